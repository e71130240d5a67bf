//! Default configuration values

/// Overall timeout for a single artifact download (in seconds)
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 300;

/// Connection timeout for HTTP requests (in seconds)
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Mount point used while installing from a macOS disk image
pub const MAC_MOUNT_POINT: &str = "/Volumes/NVGT";
