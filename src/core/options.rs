//! Compilation request options
//!
//! The option bag handed to the invocation adapter. Mutually exclusive
//! option groups (compilation mode, output verbosity) are tagged variants
//! rather than independent booleans, so an invalid combination cannot be
//! represented at all.

use serde::Serialize;

/// What the compiler should do with the script.
///
/// At most one mode flag is ever emitted; `RunDirect` emits none and means
/// "run the script unmodified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Mode {
    /// Run the script directly without compiling
    #[default]
    RunDirect,
    /// Compile a release binary (`-c`)
    CompileRelease,
    /// Compile a debug binary (`-C`)
    CompileDebug,
    /// Run under the attached script debugger (`-d`)
    RunWithDebugger,
}

impl Mode {
    /// The mode flag, or `None` for a direct run.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Self::RunDirect => None,
            Self::CompileRelease => Some("-c"),
            Self::CompileDebug => Some("-C"),
            Self::RunWithDebugger => Some("-d"),
        }
    }
}

/// Compilation target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetPlatform {
    /// Let the compiler pick its own default
    Auto,
    Windows,
    Linux,
    Mac,
    Android,
}

impl TargetPlatform {
    /// Wire name as the compiler's `-p` flag expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Mac => "mac",
            Self::Android => "android",
        }
    }

    /// Platform of the running host.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Linux
        }
    }
}

impl std::fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the compiler should treat script warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WarningLevel {
    /// Discard warnings; emits no flag
    #[default]
    Ignore,
    /// Print warnings to the console
    Print,
    /// Fail the compilation on any warning
    TreatAsError,
}

impl WarningLevel {
    /// Numeric level as the compiler's `-w` flag expects it.
    pub fn numeric(self) -> u8 {
        match self {
            Self::Ignore => 0,
            Self::Print => 1,
            Self::TreatAsError => 2,
        }
    }
}

/// Console output volume of the compiler itself.
///
/// A single variant per level makes "quiet and super-quiet at once"
/// unrepresentable; the builder therefore emits at most one flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Verbosity {
    #[default]
    Normal,
    /// Suppress progress chatter (`-q`)
    Quiet,
    /// Suppress everything but errors (`-Q`)
    SuperQuiet,
}

impl Verbosity {
    /// The verbosity flag, or `None` for normal output.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Quiet => Some("-q"),
            Self::SuperQuiet => Some("-Q"),
        }
    }
}

/// Options for one compilation or run request.
///
/// Every field has a documented default; `CompilerOptions::default()` is a
/// plain direct run with no extra flags. Repeatable options keep their
/// insertion order, which is also their emission order on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Compilation mode; default is a direct run
    pub mode: Mode,
    /// Target platform; `None` leaves the choice to the compiler
    pub platform: Option<TargetPlatform>,
    /// Output verbosity; default is normal output
    pub verbosity: Verbosity,
    /// Warning handling; default ignores warnings
    pub warning_level: WarningLevel,
    /// Files embedded as opaque runtime assets (`-a`)
    pub assets: Vec<String>,
    /// Files embedded as document assets (`-A`)
    pub document_assets: Vec<String>,
    /// Scripts included into the compilation (`-i`)
    pub includes: Vec<String>,
    /// Directories added to the include search path (`-I`)
    pub include_directories: Vec<String>,
    /// Configuration property overrides (`-sname=value`), emitted in
    /// insertion order
    pub config_properties: Vec<(String, String)>,
    /// Settings file overriding compiler defaults (`-S`)
    pub settings_file: Option<String>,
    /// Arguments forwarded verbatim to the script after `--`
    pub script_args: Vec<String>,
}

impl CompilerOptions {
    /// Options for a release compilation.
    pub fn release() -> Self {
        Self {
            mode: Mode::CompileRelease,
            ..Self::default()
        }
    }

    /// Options for a debug compilation.
    pub fn debug() -> Self {
        Self {
            mode: Mode::CompileDebug,
            ..Self::default()
        }
    }

    /// Options for a run under the attached debugger.
    pub fn debugger() -> Self {
        Self {
            mode: Mode::RunWithDebugger,
            ..Self::default()
        }
    }

    /// Append a configuration property override, preserving insertion order.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.config_properties.push((name.into(), value.into()));
    }
}
