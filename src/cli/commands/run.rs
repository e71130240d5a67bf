//! CLI implementation for `nvgtool run`
//!
//! Runs a script directly, or under the attached debugger with
//! `--debugger`. The compiler's exit status is propagated as nvgtool's
//! own exit status so scripts behave in pipelines.

use std::path::Path;

use anyhow::Result;

use super::CompilerFlags;
use crate::cli::output::status;
use crate::core::compiler::Compiler;
use crate::core::invoke::InvocationResult;

/// Execute the run command
pub async fn execute(
    script: &Path,
    debugger: bool,
    flags: &CompilerFlags,
    script_args: Vec<String>,
    json: bool,
) -> Result<()> {
    let compiler = Compiler::new(flags.compiler.as_deref())?;

    let mut options = flags.to_options();
    options.script_args = script_args;

    let result = if debugger {
        compiler.run_with_debugger(script, &options).await
    } else {
        compiler.run(script, &options).await
    };

    report_invocation(&result, json)
}

/// Print an invocation result and propagate its exit status.
///
/// A nonzero compiler exit terminates the process with the same code; a
/// launch failure surfaces as an ordinary error (exit 1). Shared with the
/// compile command.
pub(super) fn report_invocation(result: &InvocationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        if !result.success {
            std::process::exit(exit_code_for(result));
        }
        return Ok(());
    }

    if !result.stdout.is_empty() {
        print!("{}", result.stdout);
    }
    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
    }

    if result.success {
        return Ok(());
    }

    if let Some(error) = &result.error {
        anyhow::bail!("{error}");
    }

    eprintln!(
        "{} Compiler exited with status {}",
        status::ERROR,
        result.exit_code
    );
    std::process::exit(exit_code_for(result));
}

fn exit_code_for(result: &InvocationResult) -> i32 {
    if result.exit_code > 0 {
        result.exit_code
    } else {
        1
    }
}
