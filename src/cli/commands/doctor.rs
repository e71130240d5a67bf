//! CLI implementation for `nvgtool doctor`
//!
//! Reports whether a compiler binary resolves on this host and what
//! version it self-reports.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::status;
use crate::core::compiler::Compiler;

/// Doctor report for one host
#[derive(Debug, Serialize)]
pub struct DoctorReport {
    /// Resolved compiler binary path, if any
    pub compiler: Option<String>,
    /// Version the binary reports, if it answered
    pub version: Option<String>,
}

impl DoctorReport {
    fn healthy(&self) -> bool {
        self.compiler.is_some() && self.version.is_some()
    }
}

/// Execute the doctor command
pub async fn execute(json: bool) -> Result<()> {
    let report = build_report().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &report.compiler {
            Some(path) => println!("{} Compiler binary: {path}", status::SUCCESS),
            None => println!(
                "{} No compiler found. Install one with 'nvgtool install'.",
                status::ERROR
            ),
        }
        match &report.version {
            Some(version) => println!("{} Reported version: {version}", status::SUCCESS),
            None if report.compiler.is_some() => println!(
                "{} Compiler did not answer a version query",
                status::WARNING
            ),
            None => {}
        }
    }

    if report.healthy() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

async fn build_report() -> DoctorReport {
    let Ok(compiler) = Compiler::new(None) else {
        return DoctorReport {
            compiler: None,
            version: None,
        };
    };

    let result = compiler.version().await;
    let version = if result.success {
        extract_version(&result.stdout)
    } else {
        None
    };

    DoctorReport {
        compiler: Some(compiler.binary().display().to_string()),
        version,
    }
}

/// Extract a version string from command output
fn extract_version(output: &str) -> Option<String> {
    let version_regex = regex::Regex::new(r"v?(\d+\.\d+(?:\.\d+)?(?:[.-][0-9A-Za-z]+)*)").ok()?;
    version_regex
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
