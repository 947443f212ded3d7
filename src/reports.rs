//! The fixed report table and the export of generated reports.

use std::path::Path;

use tracing::{info, warn};

use crate::spawn::envman;

/// One report kind the scanner can produce: its `--format` name, the
/// file it writes under the output directory and the variable the path
/// is exported under.
#[derive(Debug, Clone, Copy)]
pub struct ReportDescriptor {
    pub format: &'static str,
    pub file_name: &'static str,
    pub output_var: &'static str,
}

pub const REPORTS: [ReportDescriptor; 6] = [
    ReportDescriptor {
        format: "HTML",
        file_name: "dependency-check-report.html",
        output_var: "DEPENDENCY_CHECK_HTML_REPORT_PATH",
    },
    ReportDescriptor {
        format: "XML",
        file_name: "dependency-check-report.xml",
        output_var: "DEPENDENCY_CHECK_XML_REPORT_PATH",
    },
    ReportDescriptor {
        format: "CSV",
        file_name: "dependency-check-report.csv",
        output_var: "DEPENDENCY_CHECK_CSV_REPORT_PATH",
    },
    ReportDescriptor {
        format: "JSON",
        file_name: "dependency-check-report.json",
        output_var: "DEPENDENCY_CHECK_JSON_REPORT_PATH",
    },
    ReportDescriptor {
        format: "JUNIT",
        file_name: "dependency-check-junit.xml",
        output_var: "DEPENDENCY_CHECK_JUNIT_REPORT_PATH",
    },
    ReportDescriptor {
        format: "SARIF",
        file_name: "dependency-check-report.sarif",
        output_var: "DEPENDENCY_CHECK_SARIF_REPORT_PATH",
    },
];

/// Walk the report table in order and export the path of every report
/// the scanner actually wrote under `output_dir`. Reports that were not
/// generated are skipped without a message; a failed export is a
/// warning and does not stop the remaining exports.
pub fn publish(output_dir: &Path) -> Vec<(String, String)> {
    let mut published = Vec::new();

    for report in &REPORTS {
        let path = output_dir.join(report.file_name);

        if !path.is_file() {
            continue;
        }

        let value = path.display().to_string();

        match envman::add(report.output_var, &value) {
            Ok(()) => {
                info!("exported {}={}", report.output_var, value);
                published.push((report.output_var.to_string(), value));
            }
            Err(err) => warn!("could not export {}: {err}", report.output_var),
        }
    }

    published
}
