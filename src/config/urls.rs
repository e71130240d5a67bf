//! Toolkit website and release URLs

/// Toolkit website base URL
pub const WEBSITE: &str = "https://nvgt.gg";

/// Plain-text endpoint serving the latest stable version
pub const LATEST_VERSION_PATH: &str = "/downloads/latest_version";

/// Plain-text endpoint serving the latest development version
pub const LATEST_DEV_VERSION_PATH: &str = "/downloads/latest_version_unstable";

/// Base URL for release artifact downloads (GitHub release assets)
pub const RELEASE_DOWNLOAD: &str = "https://github.com/samtupy/nvgt/releases/download/latest";
