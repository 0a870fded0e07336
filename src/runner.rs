// src/runner.rs

use log::{error, warn};

use crate::config::SyncOptions;
use crate::progress::Progress;
use crate::sink::CalendarSink;
use crate::source::SnapshotSource;
use crate::specs::week_grid;

/// Totals for one full multi-page sync.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub pages_ok: usize,
    pub pages_failed: usize,
    pub events: usize,
    pub fragments_skipped: usize,
}

/// Sync every configured page: fetch snapshot → extract → reconcile.
/// A page that fails fatally (unreadable snapshot, missing anchor) is
/// logged and skipped; the run always continues to the next page.
pub fn run(
    opts: &SyncOptions,
    source: &mut dyn SnapshotSource,
    sink: &mut dyn CalendarSink,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    let pages: Vec<u32> = opts.pages().collect();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.len());
    }

    let mut summary = RunSummary::default();

    for page in pages {
        let bundle = source
            .fetch(page)
            .and_then(|doc| week_grid::parse_doc(&doc, &opts.layout));

        let bundle = match bundle {
            Ok(b) => b,
            Err(e) => {
                error!("page {page}: {e}");
                summary.pages_failed += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.page_failed(page);
                }
                continue;
            }
        };

        for (index, err) in &bundle.skipped {
            warn!("page {page}: fragment {index} skipped: {err}");
        }

        sink.replace_from(&bundle.events);

        summary.pages_ok += 1;
        summary.events += bundle.events.len();
        summary.fragments_skipped += bundle.skipped.len();
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, bundle.events.len(), bundle.skipped.len());
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}
