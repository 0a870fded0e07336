// src/file.rs

use std::error::Error;
use std::fs;
use std::path::Path;

/// Create `dir` (and parents) if missing; error if it exists as a file.
pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(format!("not a directory: {}", dir.display()).into());
        }
        return Ok(());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_with_parents(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}
