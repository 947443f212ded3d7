//! Builds the scanner command line out of the step configuration.

use std::path::PathBuf;

use miette::{Context as _, IntoDiagnostic as _};
use tracing::{error, warn};

use crate::config::StepConfig;

/// Report formats the scanner knows how to produce. Matching is
/// case-sensitive, same as the scanner's own `--format` handling.
pub const KNOWN_FORMATS: &[&str] = &["HTML", "XML", "CSV", "JSON", "JUNIT", "SARIF", "ALL"];

/// The full argument list for one scanner run, along with the resolved
/// directories the later stages need again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerInvocation {
    pub args: Vec<String>,
    pub output_dir: PathBuf,
    pub data_dir: Option<PathBuf>,
}

impl ScannerInvocation {
    /// Token order is fixed: project, scan, the optional flags, data,
    /// out, then one `--format` pair per requested format in input
    /// order. Unknown formats are skipped with a warning; a data path
    /// that cannot be resolved drops the `--data` argument entirely.
    pub fn build(config: &StepConfig) -> miette::Result<Self> {
        let mut args = vec![
            "--project".to_string(),
            config.project_name.clone(),
            "--scan".to_string(),
            config.scan_path.clone(),
        ];

        if config.enable_experimental_analyzers {
            args.push("--enableExperimental".to_string());
        }

        if let Some(threshold) = &config.fail_on_cvss {
            args.push("--failOnCVSS".to_string());
            args.push(threshold.clone());
        }

        if let Some(suppression) = &config.suppression_file {
            args.push("--suppression".to_string());
            args.push(suppression.clone());
        }

        let data_dir = config.data_path.as_deref().and_then(|path| {
            match std::path::absolute(path) {
                Ok(dir) => Some(dir),
                Err(err) => {
                    error!("could not resolve database path `{path}`, scanning without --data: {err}");
                    None
                }
            }
        });

        if let Some(dir) = &data_dir {
            args.push("--data".to_string());
            args.push(dir.display().to_string());
        }

        let output_dir = std::path::absolute(config.output_path.as_deref().unwrap_or("."))
            .into_diagnostic()
            .context("resolving the report output directory")?;

        args.push("--out".to_string());
        args.push(output_dir.display().to_string());

        let mut selected = 0;
        for entry in &config.report_formats {
            if entry.is_empty() {
                continue;
            }

            if KNOWN_FORMATS.contains(&entry.as_str()) {
                args.push("--format".to_string());
                args.push(entry.clone());
                selected += 1;
            } else {
                warn!("unknown report format `{entry}` requested, skipping");
            }
        }

        if selected == 0 {
            miette::bail!(
                help = "pick at least one of HTML, XML, CSV, JSON, JUNIT, SARIF or ALL",
                "no valid report format selected"
            );
        }

        Ok(Self {
            args,
            output_dir,
            data_dir,
        })
    }
}
