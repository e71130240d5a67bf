//! CLI implementation for `nvgtool compile`
//!
//! Compiles a script in release mode, or debug mode with `--debug`.

use std::path::Path;

use anyhow::Result;

use super::run::report_invocation;
use super::CompilerFlags;
use crate::cli::output::status;
use crate::core::compiler::Compiler;

/// Execute the compile command
pub async fn execute(script: &Path, debug: bool, flags: &CompilerFlags, json: bool) -> Result<()> {
    let compiler = Compiler::new(flags.compiler.as_deref())?;
    let options = flags.to_options();

    let result = if debug {
        compiler.compile_debug(script, &options).await
    } else {
        compiler.compile_release(script, &options).await
    };

    if result.success && !json {
        println!("{} Compiled {}", status::SUCCESS, script.display());
    }

    report_invocation(&result, json)
}
