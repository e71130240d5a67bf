//! CLI implementation for `nvgtool uninstall`

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::status;
use crate::core::options::TargetPlatform;
use crate::infra::installer::Installer;

/// Execute the uninstall command
pub async fn execute(path: Option<&Path>, platform: TargetPlatform) -> Result<()> {
    let installer = Installer::new();
    let removed = installer
        .uninstall(platform, path)
        .await
        .with_context(|| "Failed to remove the installation")?;

    println!("{} Removed {}", status::SUCCESS, removed.display());
    Ok(())
}
