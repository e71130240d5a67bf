//! Archive extraction
//!
//! Unpacks the gzip-compressed tar archives the toolkit ships for Linux.

use flate2::read::GzDecoder;
use std::fs::File;
use std::path::Path;

use crate::error::InstallError;

/// Extract a `.tar.gz` archive into `dest`, creating it if necessary.
pub fn extract_tar_gz(archive: &Path, dest: &Path) -> Result<(), InstallError> {
    std::fs::create_dir_all(dest).map_err(|e| InstallError::Io {
        path: dest.to_path_buf(),
        error: e.to_string(),
    })?;

    let file = File::open(archive).map_err(|e| InstallError::Io {
        path: archive.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut tar = tar::Archive::new(GzDecoder::new(file));
    tar.unpack(dest).map_err(|e| InstallError::Archive {
        path: archive.to_path_buf(),
        error: e.to_string(),
    })?;

    tracing::debug!(archive = %archive.display(), dest = %dest.display(), "archive extracted");
    Ok(())
}
