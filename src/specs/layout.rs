// src/specs/layout.rs
//
// Pixel-to-calendar decoding for the ADE week grid. The rendered page
// carries no day/time attributes; the only signal is the absolute
// position of each fragment, so every numeric constant of the rendering
// lives in GridLayout and never at a call site.

use serde::{Deserialize, Serialize};

use crate::config::consts::*;
use crate::error::FragmentError;

/// How event duration is derived from the rendered width.
///
/// The site's own renderer is buggy enough that historically synced data
/// always carried 1.5 h entries regardless of width, so `Fixed` is the
/// parity default. `FromWidth` scales the parsed width instead.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DurationRule {
    Fixed { hours: f64 },
    FromWidth,
}

impl Default for DurationRule {
    fn default() -> Self {
        DurationRule::Fixed { hours: FIXED_DURATION_HOURS }
    }
}

/// Pixel geometry of one specific rendering of the planning grid.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GridLayout {
    /// Width of one day column.
    pub day_column_px: u32,
    /// Height of one half-hour row.
    pub row_px: u32,
    /// Earliest hour displayed by the grid (top of the first row).
    pub base_hour: f64,
    /// Duration scale when decoding widths (see `DurationRule::FromWidth`).
    pub duration_px_per_hour: f64,
    /// `id` of the first day-column header (holds the Monday date).
    pub anchor_id: String,
    /// Inline-style prefix that marks a scheduled-item fragment.
    pub fragment_marker: String,
    pub duration: DurationRule,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            day_column_px: DAY_COLUMN_PX,
            row_px: ROW_PX,
            base_hour: BASE_HOUR,
            duration_px_per_hour: DURATION_PX_PER_HOUR,
            anchor_id: s!(ANCHOR_NODE_ID),
            fragment_marker: s!(FRAGMENT_STYLE_MARKER),
            duration: DurationRule::default(),
        }
    }
}

/// Decoded grid coordinates of one fragment, relative to the week anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPos {
    pub day_offset: u32,
    /// Hours past midnight; always a multiple of 0.5.
    pub time_offset_hours: f64,
}

impl GridLayout {
    /// Decode `left`/`top` pixel offsets from a fragment's positioning
    /// style into (day, half-hour) grid coordinates.
    pub fn decode_position(&self, style: &str) -> Result<GridPos, FragmentError> {
        let left = px_value(style, "left")?;
        let top = px_value(style, "top")?;

        let day_offset = (left as u32) / self.day_column_px;

        // Quantize to half hours: floor AFTER adding the base hour.
        // 30px per half-hour row, grid starts at base_hour.
        let raw = top / self.row_px as f64 + self.base_hour;
        let time_offset_hours = (raw / 0.5).floor() * 0.5;

        Ok(GridPos { day_offset, time_offset_hours })
    }

    /// Decode the nested duration style (a rendered width) into hours.
    /// The width token is parsed under both rules so a malformed style is
    /// always diagnosed, even when `Fixed` ignores the value.
    pub fn decode_duration(&self, style: &str) -> Result<f64, FragmentError> {
        let width = px_value(style, "width")?;
        Ok(match self.duration {
            DurationRule::Fixed { hours } => hours,
            DurationRule::FromWidth => width / self.duration_px_per_hour,
        })
    }
}

/// Pull the numeric pixel value of `prop` out of an inline style string.
/// Tolerates whitespace and attribute order; only the digits are trusted.
fn px_value(style: &str, prop: &str) -> Result<f64, FragmentError> {
    let mut search = 0usize;
    while let Some(rel) = style[search..].find(prop) {
        let at = search + rel;
        let rest = style[at + prop.len()..].trim_start();
        search = at + prop.len();
        let Some(rest) = rest.strip_prefix(':') else { continue };
        let rest = rest.trim_start();

        let end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
            .unwrap_or(rest.len());
        let token = &rest[..end];
        let value: f64 = token
            .parse()
            .map_err(|_| FragmentError::StyleParse(format!("{prop}: {token:?}")))?;
        if value < 0.0 {
            return Err(FragmentError::StyleParse(format!("{prop}: negative ({token})")));
        }
        return Ok(value);
    }
    Err(FragmentError::StyleParse(format!("missing {prop}")))
}
