// tests/sync.rs
//
// Full pipeline over captured files: FileSource → runner → sink.

use std::fs;
use std::path::PathBuf;

use ade_sync::config::SyncOptions;
use ade_sync::progress::NullProgress;
use ade_sync::runner;
use ade_sync::sink::{CalendarSink, CsvSink, MemorySink, SinkOp};
use ade_sync::source::FileSource;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ade_sync_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn write_page(dir: &PathBuf, page: u32, monday: &str, fragments: &str) {
    let doc = format!(
        r#"<html><body>
          <div id="4">Lundi {monday}</div>
          {fragments}
        </body></html>"#
    );
    fs::write(dir.join(format!("page-{page}.html")), doc).unwrap();
}

fn fragment(left: u32, top: u32, name: &str) -> String {
    format!(
        r#"<div style="cursor: auto; position: absolute; left: {left}px; top: {top}px;">
             <table class="event" style="width: 90px;"><tbody><tr><td>
               <b class="eventText">{name}</b><br>Room 1
             </td></tr></tbody></table>
           </div>"#
    )
}

fn options(dir: &PathBuf, first: u32, last: u32) -> SyncOptions {
    SyncOptions {
        snapshot_dir: dir.clone(),
        first_page: first,
        last_page: last,
        ..SyncOptions::default()
    }
}

#[test]
fn failing_page_is_skipped_and_later_pages_still_sync() {
    let dir = tmp_dir("skip_page");
    write_page(&dir, 1, "04/03/2024", &fragment(0, 90, "Week one"));
    // page 2: anchor node missing entirely
    fs::write(dir.join("page-2.html"), "<html><body>maintenance</body></html>").unwrap();
    write_page(&dir, 3, "18/03/2024", &fragment(229, 90, "Week three"));

    let opts = options(&dir, 1, 3);
    let mut source = FileSource::new(&dir);
    let mut sink = MemorySink::default();

    let summary = runner::run(&opts, &mut source, &mut sink, Some(&mut NullProgress));

    assert_eq!(summary.pages_ok, 2);
    assert_eq!(summary.pages_failed, 1);
    assert_eq!(summary.events, 2);

    let names: Vec<&str> = sink.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Week one", "Week three"]);
}

#[test]
fn each_page_reconciles_delete_then_create() {
    let dir = tmp_dir("reconcile_order");
    write_page(
        &dir,
        1,
        "04/03/2024",
        &format!("{}\n{}", fragment(0, 90, "A"), fragment(229, 150, "B")),
    );

    let opts = options(&dir, 1, 1);
    let mut source = FileSource::new(&dir);
    let mut sink = MemorySink::default();
    runner::run(&opts, &mut source, &mut sink, Some(&mut NullProgress));

    assert_eq!(
        sink.ops,
        vec![
            SinkOp::DeleteFrom(sink.entries[0].start),
            SinkOp::Create("A".to_string()),
            SinkOp::Create("B".to_string()),
        ]
    );
}

#[test]
fn resync_replaces_the_owned_window() {
    let dir = tmp_dir("resync");
    write_page(&dir, 1, "04/03/2024", &fragment(0, 90, "Old name"));

    let opts = options(&dir, 1, 1);
    let mut sink = MemorySink::default();
    runner::run(&opts, &mut FileSource::new(&dir), &mut sink, None);
    assert_eq!(sink.entries.len(), 1);

    // Same slot, renamed upstream; a second run must not duplicate it.
    write_page(&dir, 1, "04/03/2024", &fragment(0, 90, "New name"));
    runner::run(&opts, &mut FileSource::new(&dir), &mut sink, None);

    assert_eq!(sink.entries.len(), 1);
    assert_eq!(sink.entries[0].name, "New name");
}

#[test]
fn skipped_fragments_are_counted_per_run() {
    let dir = tmp_dir("skip_fragments");
    let broken = r#"<div style="cursor: auto; position: absolute; left: bad; top: 0px;">
        <table class="event" style="width: 90px;"><tr><td>
          <b class="eventText">Broken</b>
        </td></tr></table></div>"#;
    write_page(
        &dir,
        1,
        "04/03/2024",
        &format!("{}\n{broken}", fragment(0, 90, "Fine")),
    );

    let opts = options(&dir, 1, 1);
    let mut sink = MemorySink::default();
    let summary = runner::run(&opts, &mut FileSource::new(&dir), &mut sink, None);

    assert_eq!(summary.events, 1);
    assert_eq!(summary.fragments_skipped, 1);
}

#[test]
fn csv_sink_writes_all_reconciled_events() {
    let dir = tmp_dir("csv_out");
    write_page(&dir, 1, "04/03/2024", &fragment(0, 90, "Algorithms"));
    write_page(&dir, 2, "11/03/2024", &fragment(229, 210, "Databases"));

    let out = dir.join("export/events.csv");
    let mut opts = options(&dir, 1, 2);
    opts.out = out.clone();

    let mut sink = CsvSink::new(&out);
    runner::run(&opts, &mut FileSource::new(&dir), &mut sink, None);
    sink.write().unwrap();

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Name,Location,Description,Start,End");
    assert_eq!(lines[1], "Algorithms,Room 1,,2024-03-04 10:00,2024-03-04 11:30");
    assert_eq!(lines[2], "Databases,Room 1,,2024-03-12 14:00,2024-03-12 15:30");
    assert_eq!(lines.len(), 3);
}

#[test]
fn sink_failures_do_not_stop_the_run() {
    let dir = tmp_dir("sink_failure");
    write_page(
        &dir,
        1,
        "04/03/2024",
        &format!("{}\n{}", fragment(0, 90, "Refused"), fragment(229, 90, "Kept")),
    );

    let opts = options(&dir, 1, 1);
    let mut sink = MemorySink::default();
    sink.refuse.push("Refused".to_string());

    let summary = runner::run(&opts, &mut FileSource::new(&dir), &mut sink, None);
    assert_eq!(summary.pages_ok, 1);
    assert_eq!(sink.entries.len(), 1);
    assert_eq!(sink.entries[0].name, "Kept");
}
