// src/error.rs

use thiserror::Error;

/// Fatal extraction errors. Any of these aborts the current page:
/// without an anchor date there is no valid absolute timestamp to build.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("week anchor node not found (id \"{0}\")")]
    AnchorNotFound(String),

    #[error("anchor date malformed: {0:?}")]
    DateFormat(String),

    #[error("snapshot unavailable: {0}")]
    Snapshot(#[from] std::io::Error),
}

/// Per-fragment errors. The offending fragment is skipped and recorded;
/// extraction of the remaining fragments continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("style parse failed: {0}")]
    StyleParse(String),

    #[error("field not found: {0}")]
    FieldNotFound(&'static str),

    #[error("event would end at or before its start")]
    InvalidTimes,
}
