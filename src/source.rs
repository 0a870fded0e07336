// src/source.rs

use std::path::PathBuf;

use crate::error::ExtractError;

/// Supplies the rendered HTML of one week-view page. The parser imposes
/// nothing on provenance: live browser capture, cache, or test fixture.
pub trait SnapshotSource {
    fn fetch(&mut self, page: u32) -> Result<String, ExtractError>;
}

/// Reads captured pages from a directory as `page-N.html`.
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn page_path(&self, page: u32) -> PathBuf {
        self.dir.join(format!("page-{page}.html"))
    }
}

impl SnapshotSource for FileSource {
    fn fetch(&mut self, page: u32) -> Result<String, ExtractError> {
        Ok(std::fs::read_to_string(self.page_path(page))?)
    }
}
