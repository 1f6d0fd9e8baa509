// SPDX-License-Identifier: MPL-2.0
//! File export for diagnostic reports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Errors that can occur during diagnostic report export.
#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Serialization(serde_json::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// Generates a default filename for diagnostic reports.
///
/// Format: `toastkit_diagnostics_YYYYMMDD_HHMMSS.json`, in local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("toastkit_diagnostics_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Writes `content` to a sibling temp file, then renames it over `path`.
///
/// # Errors
///
/// Returns the underlying I/O error; the temp file is removed if the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Returns the user's Documents folder, or the current directory.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}
