//! Compiler binary auto-detection
//!
//! Locates an installed compiler binary through an ordered list of
//! strategies, each returning found/not-found. New strategies slot into
//! [`DETECTION_STRATEGIES`] without restructuring the resolver.
//!
//! Searching `PATH` is deliberately not a strategy: on Linux an unrelated
//! `nvgt` interpreter script shadowing the real binary has been observed in
//! the wild, and a `PATH` hit cannot be told apart from it. Known
//! limitation, kept on purpose.

use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// Conventional binary location inside a default install, per host OS.
fn default_install_binary() -> PathBuf {
    if cfg!(target_os = "windows") {
        PathBuf::from("C:/nvgt/nvgt.exe")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/Applications/NVGT.app/Contents/MacOS/NVGT")
    } else {
        PathBuf::from("/opt/nvgt/nvgt")
    }
}

/// Probe the host's default install location.
fn detect_default_location() -> Option<PathBuf> {
    let candidate = default_install_binary();
    candidate.is_file().then_some(candidate)
}

/// Ordered auto-detection strategies, tried first to last.
const DETECTION_STRATEGIES: &[fn() -> Option<PathBuf>] = &[detect_default_location];

/// Resolve the compiler binary path.
///
/// An explicit path must name an existing regular file; when it does not,
/// resolution fails hard with no fallback to auto-detection, so a typo in
/// `--compiler` never silently picks up a different install.
pub fn detect_compiler(explicit: Option<&Path>) -> Result<PathBuf, ResolveError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(ResolveError::ExplicitPathInvalid {
            path: path.to_path_buf(),
        });
    }

    DETECTION_STRATEGIES
        .iter()
        .find_map(|strategy| strategy())
        .ok_or(ResolveError::NotFound)
}
