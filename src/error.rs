//! Error types for nvgtool
//!
//! Domain-specific error types using thiserror. Invocation-level failures
//! (missing script, spawn failure, nonzero exit) are deliberately NOT here:
//! they are values on [`crate::core::invoke::InvocationResult`], because a
//! failed compile is an ordinary outcome, not an exceptional one.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::options::TargetPlatform;

/// Compiler binary resolution errors
#[derive(Error, Debug)]
pub enum ResolveError {
    /// An explicitly given path does not name an existing file. No
    /// fallback search is attempted in this case.
    #[error("Compiler binary not found at '{path}'")]
    ExplicitPathInvalid { path: PathBuf },

    /// No default install location matched on this host
    #[error("No NVGT installation found. Install one with 'nvgtool install' or pass --compiler.")]
    NotFound,
}

/// Release version resolution errors
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Network error
    #[error("Network error fetching '{url}': {error}")]
    Network { url: String, error: String },

    /// Non-success HTTP status
    #[error("Version endpoint '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Response body is not a version string
    #[error("Version endpoint returned something that is not a version: '{body}'")]
    InvalidVersion { body: String },
}

/// Download errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Network error
    #[error("Network error downloading '{url}': {error}")]
    Network { url: String, error: String },

    /// Non-success HTTP status
    #[error("Download of '{url}' failed with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Install and uninstall errors
#[derive(Error, Debug)]
pub enum InstallError {
    /// Platform has no install procedure
    #[error("No install procedure for platform '{platform}'")]
    UnsupportedPlatform { platform: TargetPlatform },

    /// Artifact download failed
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Archive extraction failed
    #[error("Failed to extract archive '{path}': {error}")]
    Archive { path: PathBuf, error: String },

    /// A platform install step exited nonzero
    #[error("Install step '{command}' failed with status {status}")]
    Process { command: String, status: i32 },

    /// A platform install step could not be started
    #[error("Failed to start install step '{command}': {error}")]
    ProcessLaunch { command: String, error: String },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },

    /// Nothing to uninstall
    #[error("No installation found at '{path}'")]
    NotInstalled { path: PathBuf },
}
