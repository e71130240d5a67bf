//! Compiler command-line construction
//!
//! Builds the argument vector for one compiler invocation. The emission
//! order is a compatibility contract with the compiler's own argument
//! parser and is fixed: mode, platform, verbosity, warnings, assets,
//! document assets, includes, include directories, config properties,
//! settings file, script path, then `--` and the raw script arguments.

use std::path::Path;

use crate::core::options::CompilerOptions;

/// Separator between compiler arguments and script arguments.
pub const SCRIPT_ARGS_SEPARATOR: &str = "--";

/// Build the full argument vector for a compiler invocation.
///
/// Pure function: identical inputs always produce an identical vector.
/// Element 0 is the binary path itself, suitable for spawning as-is or for
/// logging the exact command that ran.
pub fn build_command(binary: &Path, script: &Path, options: &CompilerOptions) -> Vec<String> {
    let mut cmd = vec![binary.display().to_string()];

    if let Some(flag) = options.mode.flag() {
        cmd.push(flag.to_string());
    }

    if let Some(platform) = options.platform {
        cmd.push(format!("-p{platform}"));
    }

    if let Some(flag) = options.verbosity.flag() {
        cmd.push(flag.to_string());
    }

    if options.warning_level.numeric() > 0 {
        cmd.push(format!("-w{}", options.warning_level.numeric()));
    }

    for asset in &options.assets {
        cmd.push(format!("-a{asset}"));
    }

    for doc_asset in &options.document_assets {
        cmd.push(format!("-A{doc_asset}"));
    }

    for include in &options.includes {
        cmd.push(format!("-i{include}"));
    }

    for include_dir in &options.include_directories {
        cmd.push(format!("-I{include_dir}"));
    }

    for (name, value) in &options.config_properties {
        cmd.push(format!("-s{name}={value}"));
    }

    if let Some(settings) = &options.settings_file {
        cmd.push(format!("-S{settings}"));
    }

    cmd.push(script.display().to_string());

    if !options.script_args.is_empty() {
        cmd.push(SCRIPT_ARGS_SEPARATOR.to_string());
        cmd.extend(options.script_args.iter().cloned());
    }

    cmd
}

/// Shell-quoted form of an argument vector, for logs and diagnostics only.
///
/// Not used for spawning; the process is always started from the vector
/// itself, so no escaping rules can corrupt an argument.
pub fn display_command(cmd: &[String]) -> String {
    cmd.iter()
        .map(|arg| {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                format!("\"{arg}\"")
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
