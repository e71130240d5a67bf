//! nvgtool CLI - Installer and compiler front-end for the NVGT toolkit
//!
//! Entry point for the nvgtool command-line application.

use anyhow::Result;
use clap::Parser;

use nvgtool::cli::output::display_error;
use nvgtool::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map -v/-q onto the tracing default level; RUST_LOG still wins
    let default_level = if cli.quiet {
        tracing::Level::ERROR
    } else {
        match cli.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    // Run the command and handle errors
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
