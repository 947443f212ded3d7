//! Orchestration of a single step run.

use serde::Serialize;
use tracing::{info, warn};

use crate::{cache, config::StepConfig, invocation::ScannerInvocation, reports, spawn};

/// Outcome of a run: the exit code the step should terminate with and
/// the output variables that were exported.
#[derive(Debug, Serialize)]
pub struct RunResult {
    pub exit_code: i32,
    pub published: Vec<(String, String)>,
}

/// Execute the whole step: build the scanner command line, run the
/// scanner, request database caching and export the generated reports.
///
/// Errors out of this function mean the scanner could not be run at
/// all; a scanner that ran and found vulnerabilities is a success with
/// a non-zero `exit_code`, governed by `fail_step_if_vulnerability_found`.
pub fn run(config: &StepConfig) -> miette::Result<RunResult> {
    let invocation = ScannerInvocation::build(config)?;

    info!("$ {} {}", spawn::scanner::SCANNER, invocation.args.join(" "));

    let scanner_exit = spawn::scanner::run(&invocation.args)?;

    if scanner_exit != 0 {
        info!("{} exited with code {scanner_exit}", spawn::scanner::SCANNER);
    }

    if config.cache_database {
        match &invocation.data_dir {
            Some(dir) => match cache::include_database(dir) {
                Ok(()) => info!("database directory {} marked for caching", dir.display()),
                Err(err) => warn!("database caching skipped: {err}"),
            },
            None => warn!("database caching requested but no database path is set"),
        }
    }

    let published = reports::publish(&invocation.output_dir);

    // A non-zero scanner exit means findings, not a broken tool. It only
    // fails the step when the config says so.
    let exit_code = if config.fail_step_if_vulnerability_found {
        scanner_exit
    } else {
        0
    };

    Ok(RunResult {
        exit_code,
        published,
    })
}
