//! clarifier-storage
//!
//! Local key/value persistence. A string-keyed, string-valued store kept as
//! one JSON file, plus typed JSON state helpers on top of it.

pub mod error;
pub mod state;
pub mod store;

use std::path::PathBuf;

use crate::error::StorageError;

pub const STORE_FILE: &str = "store.json";

/// Per-user data directory, e.g. `~/.local/share/com.clarifier.cli`.
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
    Ok(base.join("com.clarifier.cli"))
}
