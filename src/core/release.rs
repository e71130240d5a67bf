//! Toolkit release resolution
//!
//! Resolves the latest published compiler version on the stable or
//! development channel and maps a version onto its platform artifact
//! names, download URLs, and default install destinations.

use std::path::PathBuf;

use crate::config::urls;
use crate::core::options::TargetPlatform;
use crate::error::{InstallError, ReleaseError};

/// Release track to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    /// Latest published stable build
    #[default]
    Stable,
    /// Latest development build, possibly unstable
    Development,
}

impl Channel {
    /// URL path of the plain-text version endpoint for this channel.
    pub fn version_path(self) -> &'static str {
        match self {
            Self::Stable => urls::LATEST_VERSION_PATH,
            Self::Development => urls::LATEST_DEV_VERSION_PATH,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stable => f.write_str("stable"),
            Self::Development => f.write_str("development"),
        }
    }
}

/// One resolved toolkit release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBuild {
    /// Version identifier as published by the release endpoint
    pub version: String,
}

impl ReleaseBuild {
    /// Wrap an already-known version string.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// File name of the install artifact for a platform.
    ///
    /// Android is a valid compilation target but has no installable
    /// artifact; asking for one is an error rather than a silent guess.
    pub fn artifact_name(&self, platform: TargetPlatform) -> Result<String, InstallError> {
        let name = match platform {
            TargetPlatform::Windows => format!("nvgt_{}.exe", self.version),
            TargetPlatform::Linux => format!("nvgt_{}.tar.gz", self.version),
            TargetPlatform::Mac => format!("nvgt_{}.dmg", self.version),
            TargetPlatform::Auto | TargetPlatform::Android => {
                return Err(InstallError::UnsupportedPlatform { platform });
            }
        };
        Ok(name)
    }

    /// Download URL of the install artifact for a platform.
    pub fn artifact_url(&self, platform: TargetPlatform) -> Result<String, InstallError> {
        let name = self.artifact_name(platform)?;
        Ok(format!("{}/{name}", urls::RELEASE_DOWNLOAD))
    }
}

/// Default installation destination for a platform.
pub fn default_install_path(platform: TargetPlatform) -> Result<PathBuf, InstallError> {
    let path = match platform {
        TargetPlatform::Windows => PathBuf::from("C:/nvgt"),
        TargetPlatform::Linux => PathBuf::from("/opt/nvgt"),
        TargetPlatform::Mac => PathBuf::from("/Applications/NVGT.app"),
        TargetPlatform::Auto | TargetPlatform::Android => {
            return Err(InstallError::UnsupportedPlatform { platform });
        }
    };
    Ok(path)
}

/// Path of the compiler binary inside a macOS app bundle install.
pub fn mac_bundle_binary(install_path: &std::path::Path) -> PathBuf {
    install_path.join("Contents/MacOS/NVGT")
}

/// Client for the release version endpoints.
///
/// The base URL is injectable so tests can point it at a local mock server.
#[derive(Debug, Clone)]
pub struct ReleaseClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReleaseClient {
    /// Create a client against the official website.
    pub fn new() -> Self {
        Self::with_base_url(urls::WEBSITE.to_string())
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Resolve the latest version on a channel.
    ///
    /// The endpoint serves a plain-text version string; the body is
    /// trimmed and validated before use so a maintenance page or an empty
    /// response never becomes a "version".
    pub async fn resolve_latest(&self, channel: Channel) -> Result<ReleaseBuild, ReleaseError> {
        let url = format!("{}{}", self.base_url, channel.version_path());
        tracing::debug!(%url, %channel, "resolving latest toolkit version");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ReleaseError::Network {
                url: url.clone(),
                error: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ReleaseError::HttpStatus {
                url,
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ReleaseError::Network {
            url: url.clone(),
            error: e.to_string(),
        })?;

        let version = body.trim();
        if !looks_like_version(version) {
            return Err(ReleaseError::InvalidVersion {
                body: version.chars().take(80).collect(),
            });
        }

        Ok(ReleaseBuild::new(version))
    }
}

impl Default for ReleaseClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Accept dotted numeric versions with an optional pre-release suffix,
/// e.g. `0.89.0` or `0.90.1-beta`.
fn looks_like_version(candidate: &str) -> bool {
    static PATTERN: &str = r"^\d+\.\d+(?:\.\d+)?(?:[.-][0-9A-Za-z]+)*$";
    regex::Regex::new(PATTERN)
        .map(|re| re.is_match(candidate))
        .unwrap_or(false)
}
