//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod compile;
pub mod doctor;
pub mod install;
pub mod run;
pub mod uninstall;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use crate::core::options::{CompilerOptions, TargetPlatform, Verbosity, WarningLevel};
use crate::core::release::Channel;

/// Target platform as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformArg {
    Auto,
    Windows,
    Linux,
    Mac,
    Android,
}

impl From<PlatformArg> for TargetPlatform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Auto => Self::Auto,
            PlatformArg::Windows => Self::Windows,
            PlatformArg::Linux => Self::Linux,
            PlatformArg::Mac => Self::Mac,
            PlatformArg::Android => Self::Android,
        }
    }
}

/// Compiler output volume as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputArg {
    #[default]
    Normal,
    Quiet,
    Silent,
}

impl From<OutputArg> for Verbosity {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Normal => Self::Normal,
            OutputArg::Quiet => Self::Quiet,
            OutputArg::Silent => Self::SuperQuiet,
        }
    }
}

/// Warning handling as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarningsArg {
    #[default]
    Ignore,
    Print,
    Error,
}

impl From<WarningsArg> for WarningLevel {
    fn from(arg: WarningsArg) -> Self {
        match arg {
            WarningsArg::Ignore => Self::Ignore,
            WarningsArg::Print => Self::Print,
            WarningsArg::Error => Self::TreatAsError,
        }
    }
}

/// Compiler options shared by the run and compile commands
#[derive(Args, Debug, Clone)]
pub struct CompilerFlags {
    /// Path to the compiler binary (auto-detected if omitted)
    #[arg(long, value_name = "PATH")]
    pub compiler: Option<PathBuf>,

    /// Compilation target platform
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,

    /// Compiler output volume
    #[arg(long, value_enum, default_value = "normal")]
    pub output: OutputArg,

    /// Warning handling
    #[arg(long, value_enum, default_value = "ignore")]
    pub warnings: WarningsArg,

    /// Embed a file as an opaque runtime asset (repeatable)
    #[arg(long = "asset", value_name = "PATH")]
    pub assets: Vec<String>,

    /// Embed a file as a document asset (repeatable)
    #[arg(long = "document-asset", value_name = "PATH")]
    pub document_assets: Vec<String>,

    /// Include an additional script (repeatable)
    #[arg(long = "include", value_name = "PATH")]
    pub includes: Vec<String>,

    /// Add a directory to the include search path (repeatable)
    #[arg(long = "include-dir", value_name = "DIR")]
    pub include_directories: Vec<String>,

    /// Override a configuration property (NAME=VALUE, repeatable,
    /// applied in the order given)
    #[arg(long = "property", value_name = "NAME=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,

    /// Settings file overriding compiler defaults
    #[arg(long, value_name = "FILE")]
    pub settings: Option<String>,
}

impl CompilerFlags {
    /// Fold the parsed flags into a [`CompilerOptions`] value.
    ///
    /// The compilation mode is set by the calling command, not here.
    pub fn to_options(&self) -> CompilerOptions {
        CompilerOptions {
            platform: self.platform.map(TargetPlatform::from),
            verbosity: self.output.into(),
            warning_level: self.warnings.into(),
            assets: self.assets.clone(),
            document_assets: self.document_assets.clone(),
            includes: self.includes.clone(),
            include_directories: self.include_directories.clone(),
            config_properties: self.properties.clone(),
            settings_file: self.settings.clone(),
            ..CompilerOptions::default()
        }
    }
}

/// Parse a `NAME=VALUE` property override.
fn parse_property(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the toolkit
    Install {
        /// Installation directory (platform default if omitted)
        #[arg(short, long, value_name = "DIR")]
        path: Option<PathBuf>,

        /// Platform to download files for (running host if omitted)
        #[arg(long, value_enum)]
        platform: Option<PlatformArg>,

        /// Install the latest development (possibly unstable) version
        #[arg(short, long)]
        dev: bool,
    },

    /// Remove an installed toolkit
    Uninstall {
        /// Installation directory (platform default if omitted)
        #[arg(short, long, value_name = "DIR")]
        path: Option<PathBuf>,

        /// Platform layout to remove (running host if omitted)
        #[arg(long, value_enum)]
        platform: Option<PlatformArg>,
    },

    /// Run a script directly
    Run {
        /// Script file to run
        script: PathBuf,

        /// Run under the attached script debugger
        #[arg(long)]
        debugger: bool,

        #[command(flatten)]
        flags: CompilerFlags,

        /// Arguments forwarded verbatim to the script
        #[arg(last = true)]
        script_args: Vec<String>,
    },

    /// Compile a script
    Compile {
        /// Script file to compile
        script: PathBuf,

        /// Compile in debug mode instead of release
        #[arg(long)]
        debug: bool,

        #[command(flatten)]
        flags: CompilerFlags,
    },

    /// Check the toolkit installation
    Doctor,
}

impl Commands {
    /// Execute the command
    pub async fn run(self, json: bool) -> Result<()> {
        match self {
            Self::Install {
                path,
                platform,
                dev,
            } => {
                let platform = platform
                    .map(TargetPlatform::from)
                    .unwrap_or_else(TargetPlatform::host);
                let channel = if dev {
                    Channel::Development
                } else {
                    Channel::Stable
                };
                install::execute(path.as_deref(), platform, channel).await
            }
            Self::Uninstall { path, platform } => {
                let platform = platform
                    .map(TargetPlatform::from)
                    .unwrap_or_else(TargetPlatform::host);
                uninstall::execute(path.as_deref(), platform).await
            }
            Self::Run {
                script,
                debugger,
                flags,
                script_args,
            } => run::execute(&script, debugger, &flags, script_args, json).await,
            Self::Compile {
                script,
                debug,
                flags,
            } => compile::execute(&script, debug, &flags, json).await,
            Self::Doctor => doctor::execute(json).await,
        }
    }
}
