// src/config/consts.rs

// Rendered grid layout (ADE week view). Properties of one specific
// rendering; override via the options file when the layout changes.
pub const DAY_COLUMN_PX: u32 = 229;
pub const ROW_PX: u32 = 30;
pub const BASE_HOUR: f64 = 7.0;
// 15px per quarter hour on the rendered event table
pub const DURATION_PX_PER_HOUR: f64 = 60.0;
pub const FIXED_DURATION_HOURS: f64 = 1.5;

// Structural markers in the rendered page
pub const ANCHOR_NODE_ID: &str = "4";
pub const FRAGMENT_STYLE_MARKER: &str = "cursor: auto; position: absolute; left:";
pub const NAME_SELECTOR: &str = "b.eventText";
pub const DURATION_SELECTOR: &str = "table.event";

// Pages: the planning site exposes one week-view button per page
pub const FIRST_PAGE: u32 = 1;
pub const LAST_PAGE: u32 = 7;

// Export
pub const DEFAULT_OUT_FILE: &str = "out/events.csv";
pub const DEFAULT_SNAPSHOT_DIR: &str = "snapshots";
