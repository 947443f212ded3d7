//! Build-cache registration for the vulnerability database.

use std::path::Path;

use miette::Context as _;

use crate::spawn::envman;

/// The variable the cache-push step reads, newline-separated.
pub const CACHE_INCLUDE_PATHS: &str = "BITRISE_CACHE_INCLUDE_PATHS";

/// Ask the build cache to keep the vulnerability database between
/// builds. Best-effort: the caller downgrades any failure to a warning.
pub fn include_database(data_dir: &Path) -> miette::Result<()> {
    let existing = std::env::var(CACHE_INCLUDE_PATHS).ok();
    let value = include_value(existing.as_deref(), data_dir);

    envman::add(CACHE_INCLUDE_PATHS, &value)
        .context("registering the database directory in the build cache")
}

fn include_value(existing: Option<&str>, data_dir: &Path) -> String {
    match existing {
        Some(paths) if !paths.trim().is_empty() => {
            format!("{}\n{}", paths.trim_end(), data_dir.display())
        }
        _ => data_dir.display().to_string(),
    }
}
