// src/sink.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::warn;

use crate::csv;
use crate::event::Event;
use crate::file::write_with_parents;

/// Outcome of one reconcile cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SinkSummary {
    pub deleted: usize,
    pub created: usize,
    pub failed: usize,
}

/// Target calendar boundary. The synced range is fully owned: reconcile
/// wipes everything at/after the earliest incoming start, then recreates.
pub trait CalendarSink {
    /// Remove every entry starting at or after `from`; returns the count.
    fn delete_from(&mut self, from: NaiveDateTime) -> Result<usize, Box<dyn Error>>;

    /// Add one entry.
    fn create(&mut self, event: &Event) -> Result<(), Box<dyn Error>>;

    /// Two-phase reconcile: delete, then create in sequence order.
    /// Per-item failures are logged and skipped, never aborting the
    /// cycle; no atomicity across the two phases is claimed.
    fn replace_from(&mut self, events: &[Event]) -> SinkSummary {
        let mut summary = SinkSummary::default();
        let Some(earliest) = events.iter().map(|e| e.start).min() else {
            return summary;
        };

        match self.delete_from(earliest) {
            Ok(n) => summary.deleted = n,
            Err(e) => warn!("delete phase failed, continuing with create: {e}"),
        }

        for event in events {
            match self.create(event) {
                Ok(()) => summary.created += 1,
                Err(e) => {
                    summary.failed += 1;
                    warn!("could not create \"{}\": {e}", event.name);
                }
            }
        }
        summary
    }
}

/* ---------------- CSV export sink ---------------- */

/// Accumulates reconciled events and writes them as one CSV file.
pub struct CsvSink {
    path: PathBuf,
    entries: Vec<Event>,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), entries: Vec::new() }
    }

    pub fn entries(&self) -> &[Event] {
        &self.entries
    }

    /// Write every held entry. Called once after all pages reconciled.
    pub fn write(&self) -> Result<&Path, Box<dyn Error>> {
        let headers = Some(
            ["Name", "Location", "Description", "Start", "End"]
                .map(String::from)
                .to_vec(),
        );
        let rows: Vec<Vec<String>> = self.entries.iter().map(event_row).collect();
        write_with_parents(&self.path, &csv::rows_to_string(&rows, &headers))?;
        Ok(&self.path)
    }
}

fn event_row(e: &Event) -> Vec<String> {
    let fmt = "%Y-%m-%d %H:%M";
    vec![
        e.name.clone(),
        e.location.clone(),
        e.description.clone(),
        e.start.format(fmt).to_string(),
        e.end.format(fmt).to_string(),
    ]
}

impl CalendarSink for CsvSink {
    fn delete_from(&mut self, from: NaiveDateTime) -> Result<usize, Box<dyn Error>> {
        let before = self.entries.len();
        self.entries.retain(|e| e.start < from);
        Ok(before - self.entries.len())
    }

    fn create(&mut self, event: &Event) -> Result<(), Box<dyn Error>> {
        self.entries.push(event.clone());
        Ok(())
    }
}

/* ---------------- test double ---------------- */

/// Operation log entry recorded by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOp {
    DeleteFrom(NaiveDateTime),
    Create(String),
}

/// In-memory sink recording operation order; can be told to refuse
/// events by name to exercise the skip-and-continue path.
#[derive(Default)]
pub struct MemorySink {
    pub entries: Vec<Event>,
    pub ops: Vec<SinkOp>,
    pub refuse: Vec<String>,
}

impl CalendarSink for MemorySink {
    fn delete_from(&mut self, from: NaiveDateTime) -> Result<usize, Box<dyn Error>> {
        self.ops.push(SinkOp::DeleteFrom(from));
        let before = self.entries.len();
        self.entries.retain(|e| e.start < from);
        Ok(before - self.entries.len())
    }

    fn create(&mut self, event: &Event) -> Result<(), Box<dyn Error>> {
        self.ops.push(SinkOp::Create(event.name.clone()));
        if self.refuse.contains(&event.name) {
            return Err(format!("refused: {}", event.name).into());
        }
        self.entries.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ev(name: &str, day: u32, hour: u32) -> Event {
        let start = NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Event::new(s!(name), s!(), s!(), start, start + chrono::Duration::hours(1)).unwrap()
    }

    #[test]
    fn reconcile_deletes_before_creating() {
        let mut sink = MemorySink::default();
        sink.entries.push(ev("stale", 4, 10));

        let incoming = vec![ev("a", 4, 8), ev("b", 5, 9)];
        let summary = sink.replace_from(&incoming);

        assert_eq!(summary, SinkSummary { deleted: 1, created: 2, failed: 0 });
        assert_eq!(
            sink.ops,
            vec![
                SinkOp::DeleteFrom(incoming[0].start),
                SinkOp::Create(s!("a")),
                SinkOp::Create(s!("b")),
            ]
        );
    }

    #[test]
    fn delete_window_spares_older_entries() {
        let mut sink = MemorySink::default();
        sink.entries.push(ev("past", 1, 9));
        sink.entries.push(ev("future", 8, 9));

        sink.replace_from(&[ev("new", 4, 8)]);
        let names: Vec<&str> = sink.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["past", "new"]);
    }

    #[test]
    fn refused_create_is_skipped_not_fatal() {
        let mut sink = MemorySink::default();
        sink.refuse.push(s!("bad"));

        let summary = sink.replace_from(&[ev("ok", 4, 8), ev("bad", 4, 10), ev("ok2", 4, 12)]);
        assert_eq!(summary.created, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(sink.entries.len(), 2);
    }

    #[test]
    fn empty_event_list_is_a_noop() {
        let mut sink = MemorySink::default();
        sink.entries.push(ev("keep", 4, 10));
        let summary = sink.replace_from(&[]);
        assert_eq!(summary, SinkSummary::default());
        assert!(sink.ops.is_empty());
        assert_eq!(sink.entries.len(), 1);
    }
}
