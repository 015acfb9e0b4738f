use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;

// ---------------------------------------------------------------------------
// Upload archive
// ---------------------------------------------------------------------------

/// Persist an accepted upload verbatim under a timestamped name.
///
/// The directory is created on first use. Names follow
/// `uploaded_data_<YYYYMMDDHHMMSS>.xlsx`; the timestamp is the only
/// collision discipline, which is enough for an append-only archive.
pub fn archive_upload(dir: &Path, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let stamp = Local::now().format("%Y%m%d%H%M%S");
    let path = dir.join(format!("uploaded_data_{stamp}.xlsx"));
    fs::write(&path, bytes)?;

    Ok(path)
}
