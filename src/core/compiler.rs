//! Compiler invocation facade
//!
//! [`Compiler`] holds the resolved binary path and exposes the high-level
//! operations: run a script, compile it in release or debug mode, run it
//! under the attached debugger, and query the binary's self-reported
//! version and help text.
//!
//! The facade holds no mutable state, so one instance can serve any number
//! of concurrent invocations; each call spawns exactly one child process
//! and suspends only its own task while waiting.

use std::path::{Path, PathBuf};

use crate::core::command::build_command;
use crate::core::invoke::{self, InvocationResult};
use crate::core::options::CompilerOptions;
use crate::error::ResolveError;

/// Standalone introspection flag for the compiler's version string.
const VERSION_FLAG: &str = "-V";
/// Standalone introspection flag for the compiler's help text.
const HELP_FLAG: &str = "-h";

/// Immutable handle to a located compiler binary.
#[derive(Debug, Clone)]
pub struct Compiler {
    binary: PathBuf,
}

impl Compiler {
    /// Resolve a compiler and wrap it.
    ///
    /// With `explicit` set, the path must name an existing file; otherwise
    /// the host's default install location is probed. Fails fast with
    /// [`ResolveError`] when nothing resolves; there is no degraded mode.
    pub fn new(explicit: Option<&Path>) -> Result<Self, ResolveError> {
        let binary = crate::core::detect::detect_compiler(explicit)?;
        Ok(Self { binary })
    }

    /// Wrap an already-resolved binary path without probing the filesystem.
    pub fn with_binary(binary: PathBuf) -> Self {
        Self { binary }
    }

    /// Path to the wrapped binary.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Build the argument vector for a script invocation without running it.
    pub fn build_command(&self, script: &Path, options: &CompilerOptions) -> Vec<String> {
        build_command(&self.binary, script, options)
    }

    /// Run a script directly, without compiling.
    pub async fn run(&self, script: &Path, options: &CompilerOptions) -> InvocationResult {
        self.invoke_script(script, options).await
    }

    /// Compile a script in release mode.
    ///
    /// Any mode already present in `options` is overridden.
    pub async fn compile_release(
        &self,
        script: &Path,
        options: &CompilerOptions,
    ) -> InvocationResult {
        let mut options = options.clone();
        options.mode = crate::core::options::Mode::CompileRelease;
        self.invoke_script(script, &options).await
    }

    /// Compile a script in debug mode.
    pub async fn compile_debug(
        &self,
        script: &Path,
        options: &CompilerOptions,
    ) -> InvocationResult {
        let mut options = options.clone();
        options.mode = crate::core::options::Mode::CompileDebug;
        self.invoke_script(script, &options).await
    }

    /// Run a script under the attached script debugger.
    pub async fn run_with_debugger(
        &self,
        script: &Path,
        options: &CompilerOptions,
    ) -> InvocationResult {
        let mut options = options.clone();
        options.mode = crate::core::options::Mode::RunWithDebugger;
        self.invoke_script(script, &options).await
    }

    /// Query the compiler's self-reported version string.
    ///
    /// The payload is the captured standard output; no script is involved.
    pub async fn version(&self) -> InvocationResult {
        invoke::execute(vec![
            self.binary.display().to_string(),
            VERSION_FLAG.to_string(),
        ])
        .await
    }

    /// Query the compiler's help text.
    pub async fn help(&self) -> InvocationResult {
        invoke::execute(vec![
            self.binary.display().to_string(),
            HELP_FLAG.to_string(),
        ])
        .await
    }

    async fn invoke_script(&self, script: &Path, options: &CompilerOptions) -> InvocationResult {
        let command = self.build_command(script, options);

        if !invoke::script_exists(script) {
            return InvocationResult::launch_failure(
                format!("Script file not found: {}", script.display()),
                command,
            );
        }

        invoke::execute(command).await
    }
}
