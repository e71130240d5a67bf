//! CLI implementation for `nvgtool install`
//!
//! Resolves the latest version on the requested channel, downloads the
//! platform artifact, and runs the platform install procedure.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{self, status};
use crate::core::options::TargetPlatform;
use crate::core::release::{Channel, ReleaseClient};
use crate::infra::download::ProgressCallback;
use crate::infra::installer::Installer;

/// Execute the install command
pub async fn execute(path: Option<&Path>, platform: TargetPlatform, channel: Channel) -> Result<()> {
    // Gate on platform support before any network traffic
    let default_dest = crate::core::release::default_install_path(platform)?;
    let dest = path.unwrap_or(default_dest.as_path());

    let spinner = output::create_spinner(&format!("Resolving latest {channel} version..."));
    let build = ReleaseClient::new()
        .resolve_latest(channel)
        .await
        .with_context(|| format!("Failed to resolve the latest {channel} version"))?;
    spinner.finish_and_clear();

    println!("Found {}", build.version);
    println!("Installing for {platform}");

    let bar = output::create_download_bar(0);
    let bar_handle = bar.clone();
    let progress: ProgressCallback = Box::new(move |downloaded, total| {
        if total > 0 && bar_handle.length() != Some(total) {
            bar_handle.set_length(total);
        }
        bar_handle.set_position(downloaded);
    });

    let installer = Installer::new();
    let installed = installer
        .install(&build, platform, Some(dest), Some(progress))
        .await
        .with_context(|| format!("Failed to install version {}", build.version))?;
    bar.finish_and_clear();

    println!(
        "{} Installed NVGT {} to {}",
        status::SUCCESS,
        build.version,
        installed.display()
    );

    Ok(())
}
