//! Platform install and uninstall procedures
//!
//! Windows ships a silent installer executable, macOS a disk image, and
//! Linux a tar.gz archive; each platform gets its own sequence of steps.
//! Steps that must run as external processes (the Windows installer,
//! `hdiutil`, the privileged macOS copy) are checked for a zero exit
//! status and fail the whole install otherwise.

use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::config::{defaults, urls};
use crate::core::release::{default_install_path, mac_bundle_binary, ReleaseBuild};
use crate::core::options::TargetPlatform;
use crate::error::InstallError;
use crate::infra::archive::extract_tar_gz;
use crate::infra::dirs::NvgtoolDirs;
use crate::infra::download::{DownloadManager, ProgressCallback};

/// Installer for toolkit release artifacts.
#[derive(Debug)]
pub struct Installer {
    downloads: DownloadManager,
    dirs: NvgtoolDirs,
    /// Base URL for release artifacts, injectable for tests
    release_base: String,
}

impl Installer {
    /// Create an installer against the official release location.
    pub fn new() -> Self {
        Self::with_release_base(urls::RELEASE_DOWNLOAD.to_string())
    }

    /// Create an installer fetching artifacts from a custom base URL.
    pub fn with_release_base(release_base: String) -> Self {
        Self {
            downloads: DownloadManager::new(),
            dirs: NvgtoolDirs::new(),
            release_base,
        }
    }

    /// Download the platform artifact for a release into the downloads
    /// directory and return its local path.
    pub async fn fetch_artifact(
        &self,
        build: &ReleaseBuild,
        platform: TargetPlatform,
        progress: Option<ProgressCallback>,
    ) -> Result<PathBuf, InstallError> {
        let name = build.artifact_name(platform)?;
        let url = format!("{}/{name}", self.release_base);
        let dest = self.dirs.downloads_dir().join(&name);

        self.downloads.download(&url, &dest, progress).await?;
        Ok(dest)
    }

    /// Install a release for a platform.
    ///
    /// `dest` overrides the platform's default installation directory.
    /// Returns the directory the toolkit was installed into.
    pub async fn install(
        &self,
        build: &ReleaseBuild,
        platform: TargetPlatform,
        dest: Option<&Path>,
        progress: Option<ProgressCallback>,
    ) -> Result<PathBuf, InstallError> {
        let install_path = match dest {
            Some(path) => path.to_path_buf(),
            None => default_install_path(platform)?,
        };

        let artifact = self.fetch_artifact(build, platform, progress).await?;
        tracing::info!(
            version = %build.version,
            %platform,
            dest = %install_path.display(),
            "installing toolkit"
        );

        match platform {
            TargetPlatform::Windows => self.install_windows(&artifact, &install_path).await?,
            TargetPlatform::Mac => self.install_mac(&artifact, &install_path).await?,
            TargetPlatform::Linux => install_linux(&artifact, &install_path)?,
            TargetPlatform::Auto | TargetPlatform::Android => {
                return Err(InstallError::UnsupportedPlatform { platform });
            }
        }

        Ok(install_path)
    }

    /// Remove an installation.
    ///
    /// Returns the directory that was removed.
    pub async fn uninstall(
        &self,
        platform: TargetPlatform,
        dest: Option<&Path>,
    ) -> Result<PathBuf, InstallError> {
        let install_path = match dest {
            Some(path) => path.to_path_buf(),
            None => default_install_path(platform)?,
        };

        if !install_path.exists() {
            return Err(InstallError::NotInstalled { path: install_path });
        }

        tracing::info!(%platform, path = %install_path.display(), "removing installation");

        if platform == TargetPlatform::Mac {
            // The default app bundle location is root-owned
            run_step("sudo", &["rm", "-rf", &install_path.display().to_string()]).await?;
        } else {
            std::fs::remove_dir_all(&install_path).map_err(|e| InstallError::Io {
                path: install_path.clone(),
                error: e.to_string(),
            })?;
        }

        Ok(install_path)
    }

    /// Run the silent installer the Windows artifact ships as.
    async fn install_windows(&self, artifact: &Path, dest: &Path) -> Result<(), InstallError> {
        let installer = artifact.display().to_string();
        run_step(
            &installer,
            &[
                "/VERYSILENT",
                "/SUPPRESSMSGBOXES",
                "/NORESTART",
                &format!("/DIR={}", dest.display()),
            ],
        )
        .await
    }

    /// Mount the disk image, replace any existing bundle, copy the new
    /// one into place, unmount, and smoke-check the installed binary.
    async fn install_mac(&self, artifact: &Path, dest: &Path) -> Result<(), InstallError> {
        let dmg = artifact.display().to_string();
        let mount = defaults::MAC_MOUNT_POINT;

        run_step("hdiutil", &["attach", &dmg, "-mountpoint", mount]).await?;

        let copy_result = self.copy_mac_bundle(mount, dest).await;

        // Unmount even when the copy failed, then report the first error
        let detach_result = run_step("hdiutil", &["detach", mount]).await;
        copy_result?;
        detach_result?;

        let binary = mac_bundle_binary(dest);
        if binary.exists() {
            run_step("sudo", &["chmod", "+x", &binary.display().to_string()]).await?;

            let check = crate::core::compiler::Compiler::with_binary(binary).help().await;
            if !check.success {
                tracing::warn!("installed binary did not answer a help query");
            }
        } else {
            tracing::warn!(path = %binary.display(), "binary not found inside the app bundle");
        }

        Ok(())
    }

    async fn copy_mac_bundle(&self, mount: &str, dest: &Path) -> Result<(), InstallError> {
        let dest_str = dest.display().to_string();
        if dest.exists() {
            run_step("sudo", &["rm", "-rf", &dest_str]).await?;
        }
        run_step("sudo", &["cp", "-R", &format!("{mount}/NVGT.app"), &dest_str]).await
    }
}

impl Default for Installer {
    fn default() -> Self {
        Self::new()
    }
}

/// Unpack the Linux archive into the destination directory.
fn install_linux(artifact: &Path, dest: &Path) -> Result<(), InstallError> {
    extract_tar_gz(artifact, dest)
}

/// Run one external install step and require a zero exit status.
async fn run_step(program: &str, args: &[&str]) -> Result<(), InstallError> {
    let rendered = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    tracing::debug!(command = %rendered, "running install step");

    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|e| InstallError::ProcessLaunch {
            command: rendered.clone(),
            error: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(InstallError::Process {
            command: rendered,
            status: status.code().unwrap_or(-1),
        })
    }
}
