//! Platform-specific directory management
//!
//! Provides the directories nvgtool writes to, following platform
//! conventions (XDG on Linux, Library on macOS). Environment variables
//! override the defaults:
//! - `NVGTOOL_CACHE_DIR` - Override cache directory
//! - `NVGTOOL_DATA_DIR` - Override data directory

use std::env;
use std::path::PathBuf;

/// Environment variable names for directory overrides
pub const ENV_CACHE_DIR: &str = "NVGTOOL_CACHE_DIR";
pub const ENV_DATA_DIR: &str = "NVGTOOL_DATA_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "nvgtool";

/// Subdirectory for downloaded release artifacts
const DOWNLOADS_SUBDIR: &str = "downloads";

/// Platform-specific directory provider for nvgtool
#[derive(Debug, Clone)]
pub struct NvgtoolDirs {
    cache_dir: PathBuf,
    data_dir: PathBuf,
}

impl NvgtoolDirs {
    /// Create a new `NvgtoolDirs` instance.
    ///
    /// Checks environment variables first, then falls back to platform
    /// defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache_dir: Self::resolve_cache_dir(),
            data_dir: Self::resolve_data_dir(),
        }
    }

    /// Cache directory, for regenerable scratch data.
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone()
    }

    /// Data directory, for persistent data.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Directory where downloaded release artifacts are kept.
    #[must_use]
    pub fn downloads_dir(&self) -> PathBuf {
        self.data_dir.join(DOWNLOADS_SUBDIR)
    }

    fn resolve_cache_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CACHE_DIR) {
            return PathBuf::from(path);
        }

        dirs::cache_dir().map(|p| p.join(APP_NAME)).unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".cache").join(APP_NAME))
                .unwrap_or_else(|| PathBuf::from(".").join(".cache").join(APP_NAME))
        })
    }

    fn resolve_data_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_DATA_DIR) {
            return PathBuf::from(path);
        }

        dirs::data_dir().map(|p| p.join(APP_NAME)).unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".local").join("share").join(APP_NAME))
                .unwrap_or_else(|| {
                    PathBuf::from(".").join(".local").join("share").join(APP_NAME)
                })
        })
    }
}

impl Default for NvgtoolDirs {
    fn default() -> Self {
        Self::new()
    }
}
