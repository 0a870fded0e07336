// src/specs/week_grid.rs
//
// The ADE week view renders one <div> per scheduled item, absolutely
// positioned inside the grid, with the Monday date sitting in the first
// day-column header. This spec turns one captured page into events.
//
// Assumptions (by design):
// - the anchor header's text ends in a day/month/year date
// - fragments carry the absolute-position style marker
// - the name is the <b class="eventText"> label
// - location is the second <br>-separated line, description the rest

use chrono::{Duration, NaiveDate};
use scraper::{ElementRef, Html};

use crate::config::consts::{DURATION_SELECTOR, NAME_SELECTOR};
use crate::core::dom;
use crate::core::sanitize::{leading_digits, trailing_digits};
use crate::error::{ExtractError, FragmentError};
use crate::event::{Event, WeekAnchor};
use crate::specs::layout::GridLayout;

/// Everything one page yields: events in document order, plus the
/// fragments that failed, by index. Skips are data, never logging.
#[derive(Debug)]
pub struct WeekBundle {
    pub anchor: WeekAnchor,
    pub events: Vec<Event>,
    pub skipped: Vec<(usize, FragmentError)>,
}

/// Parse one captured week-view document.
///
/// Anchor failure is fatal: without the Monday date no fragment can be
/// given an absolute timestamp. A bad fragment only costs that fragment.
pub fn parse_doc(html_doc: &str, layout: &GridLayout) -> Result<WeekBundle, ExtractError> {
    let doc = Html::parse_document(html_doc);
    let anchor = resolve_anchor(&doc, layout)?;

    let fragments = dom::divs_with_style_marker(&doc, &layout.fragment_marker);
    let mut events = Vec::with_capacity(fragments.len());
    let mut skipped = Vec::new();

    for (index, fragment) in fragments.into_iter().enumerate() {
        match build_event(fragment, anchor, layout) {
            Ok(event) => events.push(event),
            Err(e) => skipped.push((index, e)),
        }
    }

    Ok(WeekBundle { anchor, events, skipped })
}

/* ---------------- anchor ---------------- */

/// Monday of the displayed week, from the first day-column header.
///
/// The date substring is located by splitting the header text on `/` and
/// indexing from the end. Format-coupled and fragile by construction;
/// this is the single place that rule lives.
pub fn resolve_anchor(doc: &Html, layout: &GridLayout) -> Result<WeekAnchor, ExtractError> {
    let node = dom::by_id(doc, &layout.anchor_id)
        .ok_or_else(|| ExtractError::AnchorNotFound(layout.anchor_id.clone()))?;
    let text = dom::text_of(node);
    let bad = || ExtractError::DateFormat(text.clone());

    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() < 3 {
        return Err(bad());
    }

    // "… 04/03/2024 …" → day 04, month 03, year 2024
    let day: u32 = trailing_digits(parts[parts.len() - 3].trim())
        .ok_or_else(bad)?
        .parse()
        .map_err(|_| bad())?;
    let month: u32 = parts[parts.len() - 2].trim().parse().map_err(|_| bad())?;
    let year: i32 = leading_digits(parts[parts.len() - 1].trim())
        .ok_or_else(bad)?
        .parse()
        .map_err(|_| bad())?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(bad)?;
    Ok(WeekAnchor(date))
}

/* ---------------- per-fragment ---------------- */

fn build_event(
    fragment: ElementRef,
    anchor: WeekAnchor,
    layout: &GridLayout,
) -> Result<Event, FragmentError> {
    let style = fragment
        .value()
        .attr("style")
        .ok_or_else(|| FragmentError::StyleParse(s!("missing positioning style")))?;
    let pos = layout.decode_position(style)?;

    let duration_style = dom::first_match(fragment, DURATION_SELECTOR)
        .and_then(|t| t.value().attr("style"))
        .ok_or_else(|| FragmentError::StyleParse(s!("missing duration style")))?;
    let hours = layout.decode_duration(duration_style)?;

    let name = extract_name(fragment)?;
    let segments = dom::br_segments(fragment);
    let location = extract_location(&segments);
    let description = extract_description(&segments);

    let start = anchor.at(pos.day_offset, pos.time_offset_hours);
    let end = start + Duration::minutes((hours * 60.0).round() as i64);
    Event::new(name, location, description, start, end)
}

/// The bold label node is the one field whose absence fails the fragment.
fn extract_name(fragment: ElementRef) -> Result<String, FragmentError> {
    let label = dom::first_match(fragment, NAME_SELECTOR)
        .ok_or(FragmentError::FieldNotFound("event name"))?;
    let name = dom::text_of(label);
    if name.is_empty() {
        return Err(FragmentError::FieldNotFound("event name"));
    }
    Ok(name)
}

/// Second line of the fragment text; empty when the fragment has no
/// second line rather than an error.
fn extract_location(segments: &[String]) -> String {
    segments.get(1).cloned().unwrap_or_default()
}

/// Lines from the third onward, blanks dropped, order preserved.
fn extract_description(segments: &[String]) -> String {
    let lines: Vec<&str> = segments
        .iter()
        .skip(2)
        .map(|s| s.as_str())
        .filter(|s| !s.trim().is_empty())
        .collect();
    lines.join("\n")
}
