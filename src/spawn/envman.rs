use std::process::{Command, Stdio};

use miette::{Context as _, IntoDiagnostic as _, bail};

pub const ENVMAN: &str = "envman";

/// Export an environment variable for the later steps of the build.
pub fn add(key: &str, value: &str) -> miette::Result<()> {
    let tool = super::tool_path(ENVMAN);

    let output = Command::new(&tool)
        .args(["add", "--key", key, "--value", value])
        .stdin(Stdio::null())
        .output()
        .into_diagnostic()
        .with_context(|| format!("spawning {} add", tool.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let detail = if stderr.trim().is_empty() {
            stdout
        } else {
            stderr
        };

        bail!("envman add failed for {key}: {}", detail.trim());
    }

    Ok(())
}
