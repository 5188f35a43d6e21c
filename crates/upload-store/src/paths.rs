use crate::error::{Result, StoreError};
use std::path::{Path, PathBuf};

const DB_FILENAME: &str = "users.sqlite3";

/// A host naming an existing directory holds the database as
/// `<dir>/users.sqlite3`; any other host is the database file itself.
pub fn resolve_db_path(host: &str) -> Result<PathBuf> {
    let trimmed = host.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidHost(PathBuf::from(host)));
    }
    let path = PathBuf::from(trimmed);
    if path.is_dir() {
        return Ok(db_path_in(&path));
    }
    Ok(path)
}

pub fn db_path_in(dir: &Path) -> PathBuf {
    dir.join(DB_FILENAME)
}
