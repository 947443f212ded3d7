//! Step input collaborator.
//!
//! Bitrise hands every step input to the process as a lowercase
//! environment variable. This module reads those variables, validates
//! them and produces the immutable [`StepConfig`] the rest of the step
//! runs on. Parsing is layered over a plain key→value lookup so tests
//! can feed inputs without touching the process environment.

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

pub mod model;

pub use model::*;

/// Input variable names, as declared in the step manifest.
pub mod keys {
    pub const DEBUG: &str = "debug";
    pub const PROJECT_NAME: &str = "project_name";
    pub const SCAN_PATH: &str = "scan_path";
    pub const OUTPUT_PATH: &str = "output_path";
    pub const SUPPRESSION_FILE: &str = "suppression_file";
    pub const DATA_PATH: &str = "data_path";
    pub const CACHE_DATABASE: &str = "cache_database";
    pub const FAIL_ON_CVSS: &str = "fail_on_cvss";
    pub const FAIL_STEP_IF_VULNERABILITY_FOUND: &str = "fail_step_if_vulnerability_found";
    pub const ENABLE_EXPERIMENTAL_ANALYZERS: &str = "enable_experimental_analyzers";
    pub const REPORT_FORMATS: &str = "report_formats";
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("missing required input `{0}`")]
    MissingInput(&'static str),

    #[error("input `{key}` has invalid boolean value `{value}`")]
    #[diagnostic(help("accepted values are true/false, yes/no and 1/0"))]
    InvalidBool { key: &'static str, value: String },

    #[error("input `fail_on_cvss` must be a number between 0 and 10, got `{0}`")]
    InvalidCvss(String),

    #[error("scan path `{0}` does not exist")]
    ScanPathNotFound(String),
}

impl StepConfig {
    /// Load and validate the step configuration from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            project_name: required(&lookup, keys::PROJECT_NAME)?,
            scan_path: required(&lookup, keys::SCAN_PATH)?,
            output_path: optional(&lookup, keys::OUTPUT_PATH),
            suppression_file: optional(&lookup, keys::SUPPRESSION_FILE),
            data_path: optional(&lookup, keys::DATA_PATH),
            cache_database: boolean(&lookup, keys::CACHE_DATABASE)?,
            fail_on_cvss: optional(&lookup, keys::FAIL_ON_CVSS),
            fail_step_if_vulnerability_found: boolean(
                &lookup,
                keys::FAIL_STEP_IF_VULNERABILITY_FOUND,
            )?,
            enable_experimental_analyzers: boolean(&lookup, keys::ENABLE_EXPERIMENTAL_ANALYZERS)?,
            report_formats: formats(required(&lookup, keys::REPORT_FORMATS)?),
            debug: boolean(&lookup, keys::DEBUG)?,
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !Path::new(&self.scan_path).exists() {
            return Err(ConfigError::ScanPathNotFound(self.scan_path.clone()));
        }

        if let Some(cvss) = &self.fail_on_cvss {
            match cvss.parse::<f64>() {
                Ok(value) if (0.0..=10.0).contains(&value) => {}
                _ => return Err(ConfigError::InvalidCvss(cvss.clone())),
            }
        }

        Ok(())
    }
}

/// Cheap peek at the `debug` input so logging can be configured before
/// the full configuration is validated.
pub fn debug_requested() -> bool {
    std::env::var(keys::DEBUG).is_ok_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        )
    })
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingInput(key)),
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn boolean<F>(lookup: &F, key: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = optional(lookup, key) else {
        return Ok(false);
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool { key, value }),
    }
}

// Bitrise multi-select inputs arrive pipe-separated; commas and newlines
// show up in hand-written workflow files as well.
fn formats(raw: String) -> Vec<String> {
    raw.split(['|', ',', '\n'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
