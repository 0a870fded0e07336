// src/config/options.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::specs::layout::GridLayout;

/// Everything one sync run needs, TOML-loadable. Layout numbers are
/// part of the options surface on purpose: they describe a specific
/// rendering, not the program.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SyncOptions {
    /// Directory of captured week-view pages (`page-N.html`).
    pub snapshot_dir: PathBuf,
    /// Export target for the CSV sink.
    pub out: PathBuf,
    /// Inclusive page range to sync.
    pub first_page: u32,
    pub last_page: u32,
    pub layout: GridLayout,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            out: PathBuf::from(DEFAULT_OUT_FILE),
            first_page: FIRST_PAGE,
            last_page: LAST_PAGE,
            layout: GridLayout::default(),
        }
    }
}

impl SyncOptions {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = std::fs::read_to_string(path)?;
        let opts: SyncOptions = toml::from_str(&text)?;
        if opts.first_page > opts.last_page {
            return Err(format!(
                "invalid page range {}-{}",
                opts.first_page, opts.last_page
            )
            .into());
        }
        Ok(opts)
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.first_page..=self.last_page
    }
}
