use std::process::{Command, Stdio};

use miette::{Context as _, IntoDiagnostic as _};

pub const SCANNER: &str = "dependency-check";

/// Run the scanner with the given arguments, streaming its output
/// straight to the step's own stdout/stderr, and return its exit code.
/// A spawn or wait failure (binary missing, not executable) is an
/// invocation error; a non-zero scanner exit is not.
pub fn run(args: &[String]) -> miette::Result<i32> {
    let tool = super::tool_path(SCANNER);

    let status = Command::new(&tool)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .into_diagnostic()
        .with_context(|| format!("failed to run {}", tool.display()))?;

    // Termination by signal has no code; treat it as a plain failure.
    Ok(status.code().unwrap_or(1))
}
