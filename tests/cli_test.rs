//! Integration tests for the nvgtool binary
//!
//! Drives the compiled binary the way a user would, with shell scripts
//! standing in for the compiler.

mod common;

use common::TestWorkspace;
use predicates::prelude::*;
use std::process::Command;

/// Run the nvgtool binary with arguments
fn run_nvgtool(args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nvgtool"));
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute nvgtool")
}

#[test]
fn test_help_lists_subcommands() {
    let output = run_nvgtool(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let lists_all = predicate::str::contains("install")
        .and(predicate::str::contains("uninstall"))
        .and(predicate::str::contains("run"))
        .and(predicate::str::contains("compile"))
        .and(predicate::str::contains("doctor"));
    assert!(lists_all.eval(&stdout), "help output was: {stdout}");
}

#[test]
fn test_no_subcommand_prints_help() {
    let output = run_nvgtool(&[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Usage"));
}

#[test]
fn test_run_with_invalid_explicit_compiler_fails_hard() {
    let ws = TestWorkspace::new();
    let script = ws.create_file("game.nvgt", "void main() {}\n");
    let bogus = ws.path().join("no-such-nvgt");

    let output = run_nvgtool(&[
        "run",
        script.to_str().unwrap(),
        "--compiler",
        bogus.to_str().unwrap(),
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    // No fallback to auto-detection; the bad path itself is reported
    assert!(stderr.contains("no-such-nvgt"), "stderr was: {stderr}");
}

#[cfg(unix)]
#[test]
fn test_run_missing_script_reports_preflight_failure() {
    let ws = TestWorkspace::new();
    let compiler = ws.create_fake_compiler("nvgt", "exit 0");

    let output = run_nvgtool(&[
        "run",
        ws.path().join("missing.nvgt").to_str().unwrap(),
        "--compiler",
        compiler.to_str().unwrap(),
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        predicate::str::contains("not found").eval(&stderr),
        "stderr was: {stderr}"
    );
}

#[cfg(unix)]
#[test]
fn test_run_propagates_compiler_exit_status() {
    let ws = TestWorkspace::new();
    let compiler = ws.create_fake_compiler("nvgt", "exit 7");
    let script = ws.create_file("game.nvgt", "void main() {}\n");

    let output = run_nvgtool(&[
        "run",
        script.to_str().unwrap(),
        "--compiler",
        compiler.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(7));
}

#[cfg(unix)]
#[test]
fn test_run_passes_compiler_stdout_through() {
    let ws = TestWorkspace::new();
    let compiler = ws.create_fake_compiler("nvgt", "echo 'hello from script'");
    let script = ws.create_file("game.nvgt", "void main() {}\n");

    let output = run_nvgtool(&[
        "run",
        script.to_str().unwrap(),
        "--compiler",
        compiler.to_str().unwrap(),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("hello from script"));
}

#[cfg(unix)]
#[test]
fn test_run_forwards_script_arguments_after_separator() {
    let ws = TestWorkspace::new();
    let compiler = ws.create_fake_compiler("nvgt", "echo \"$@\"");
    let script = ws.create_file("game.nvgt", "void main() {}\n");

    let output = run_nvgtool(&[
        "run",
        script.to_str().unwrap(),
        "--compiler",
        compiler.to_str().unwrap(),
        "--",
        "--foo",
        "bar",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.trim().ends_with("-- --foo bar"),
        "stdout was: {stdout}"
    );
}

#[cfg(unix)]
#[test]
fn test_compile_passes_release_flag_by_default() {
    let ws = TestWorkspace::new();
    let compiler = ws.create_fake_compiler("nvgt", "echo \"$@\"");
    let script = ws.create_file("game.nvgt", "void main() {}\n");

    let output = run_nvgtool(&[
        "compile",
        script.to_str().unwrap(),
        "--compiler",
        compiler.to_str().unwrap(),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("-c"), "stdout was: {stdout}");
}

#[cfg(unix)]
#[test]
fn test_compile_debug_flag_switches_mode() {
    let ws = TestWorkspace::new();
    let compiler = ws.create_fake_compiler("nvgt", "echo \"$@\"");
    let script = ws.create_file("game.nvgt", "void main() {}\n");

    let output = run_nvgtool(&[
        "compile",
        script.to_str().unwrap(),
        "--debug",
        "--compiler",
        compiler.to_str().unwrap(),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("-C"), "stdout was: {stdout}");
}

#[cfg(unix)]
#[test]
fn test_compile_options_are_emitted_in_contract_order() {
    let ws = TestWorkspace::new();
    let compiler = ws.create_fake_compiler("nvgt", "echo \"$@\"");
    let script = ws.create_file("game.nvgt", "void main() {}\n");

    let output = run_nvgtool(&[
        "compile",
        script.to_str().unwrap(),
        "--compiler",
        compiler.to_str().unwrap(),
        "--platform",
        "windows",
        "--output",
        "silent",
        "--warnings",
        "error",
        "--asset",
        "sounds.dat",
        "--property",
        "a=1",
        "--property",
        "b=2",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let args_line = stdout
        .lines()
        .find(|l| l.contains("-pwindows"))
        .unwrap_or_default();
    let pos = |needle: &str| args_line.find(needle).unwrap_or(usize::MAX);
    assert!(pos("-c") < pos("-pwindows"), "args were: {args_line}");
    assert!(pos("-pwindows") < pos("-Q"), "args were: {args_line}");
    assert!(pos("-Q") < pos("-w2"), "args were: {args_line}");
    assert!(pos("-w2") < pos("-asounds.dat"), "args were: {args_line}");
    assert!(pos("-sa=1") < pos("-sb=2"), "args were: {args_line}");
}

#[cfg(unix)]
#[test]
fn test_run_json_output_is_machine_readable() {
    let ws = TestWorkspace::new();
    let compiler = ws.create_fake_compiler("nvgt", "echo ok");
    let script = ws.create_file("game.nvgt", "void main() {}\n");

    let output = run_nvgtool(&[
        "--json",
        "run",
        script.to_str().unwrap(),
        "--compiler",
        compiler.to_str().unwrap(),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("JSON output should parse");
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["exit_code"], 0);
    assert!(parsed["stdout"].as_str().unwrap().contains("ok"));
    assert!(parsed["error"].is_null());
    assert!(parsed["command"].is_array());
}

#[test]
fn test_doctor_reports_installation_state() {
    let output = run_nvgtool(&["doctor"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Depending on the host there may or may not be a real install;
    // either way the command reports rather than crashes
    if output.status.success() {
        assert!(stdout.contains("Compiler binary"), "stdout was: {stdout}");
    } else {
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout.contains("No compiler found"), "stdout was: {stdout}");
    }
}

#[test]
fn test_install_rejects_android() {
    let output = run_nvgtool(&["install", "--platform", "android"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        predicate::str::contains("android").eval(&stderr),
        "stderr was: {stderr}"
    );
}
