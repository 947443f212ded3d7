use serde::Serialize;
use tracing::info;

/// Resolved step inputs, immutable for the duration of the run.
#[derive(Debug, Clone, Serialize)]
pub struct StepConfig {
    pub project_name: String,
    pub scan_path: String,
    pub output_path: Option<String>,
    pub suppression_file: Option<String>,
    pub data_path: Option<String>,
    pub cache_database: bool,
    pub fail_on_cvss: Option<String>,
    pub fail_step_if_vulnerability_found: bool,
    pub enable_experimental_analyzers: bool,
    pub report_formats: Vec<String>,
    pub debug: bool,
}

impl StepConfig {
    /// Echo the resolved configuration at the start of the run, one line
    /// per input, so the build log shows what the step is acting on.
    pub fn print(&self) {
        info!("step configuration:");
        info!("- project_name: {}", self.project_name);
        info!("- scan_path: {}", self.scan_path);
        info!("- output_path: {}", opt_display(&self.output_path));
        info!("- suppression_file: {}", opt_display(&self.suppression_file));
        info!("- data_path: {}", opt_display(&self.data_path));
        info!("- cache_database: {}", self.cache_database);
        info!("- fail_on_cvss: {}", opt_display(&self.fail_on_cvss));
        info!(
            "- fail_step_if_vulnerability_found: {}",
            self.fail_step_if_vulnerability_found
        );
        info!(
            "- enable_experimental_analyzers: {}",
            self.enable_experimental_analyzers
        );
        info!("- report_formats: {}", self.report_formats.join(", "));
        info!("- debug: {}", self.debug);
    }
}

fn opt_display(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("<unset>")
}
