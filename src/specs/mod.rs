// src/specs/mod.rs
//! Page-specific scraping knowledge for the ADE planning site.
//!
//! Each spec encodes *where the ground truth lives in the rendered page*
//! and *how to extract it robustly*:
//! - `layout` — the pixel geometry of the week grid and how coordinates
//!   decode back into days, half-hours and durations.
//! - `week_grid` — the week-view page itself: anchor date, fragment
//!   selection, text fields, and the `parse_doc` orchestration.
//!
//! Specs only extract. Fetching snapshots, driving multiple pages, and
//! delivering events to a calendar live in `source`, `runner` and `sink`.
//! Everything here is pure and testable offline against captured or
//! synthetic snapshots.

pub mod layout;
pub mod week_grid;
