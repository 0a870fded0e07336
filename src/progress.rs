// src/progress.rs

/// Lightweight progress reporting for a multi-page sync run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page extracted and reconciled; `skipped` counts the
    /// fragments dropped on that page.
    fn page_done(&mut self, _page: u32, _events: usize, _skipped: usize) {}

    /// One page failed fatally (no anchor, unreadable snapshot).
    fn page_failed(&mut self, _page: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints progress lines to stderr; what the CLI uses.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Syncing {total} page(s)…");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn page_done(&mut self, page: u32, events: usize, skipped: usize) {
        if skipped > 0 {
            eprintln!("Page {page}: {events} event(s), {skipped} fragment(s) skipped");
        } else {
            eprintln!("Page {page}: {events} event(s)");
        }
    }

    fn page_failed(&mut self, page: u32) {
        eprintln!("Page {page}: extraction failed, skipping");
    }

    fn finish(&mut self) {
        eprintln!("Done.");
    }
}
