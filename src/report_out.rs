use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::MasteryError;

pub const REPORT_FILE_PREFIX: &str = "collated_mastery_";
/// Filename-safe timestamp, minute resolution.
pub const REPORT_FILE_TIME_FORMAT: &str = "%Y-%m-%d_%Hh%M";

#[must_use]
pub fn report_file_name(generated_at: NaiveDateTime) -> String {
    stamped_file_name(generated_at, "txt")
}

#[must_use]
pub fn json_report_file_name(generated_at: NaiveDateTime) -> String {
    stamped_file_name(generated_at, "json")
}

fn stamped_file_name(generated_at: NaiveDateTime, extension: &str) -> String {
    format!(
        "{REPORT_FILE_PREFIX}{}.{extension}",
        generated_at.format(REPORT_FILE_TIME_FORMAT)
    )
}

/// Writes the report as UTF-8 into `folder` and returns the file path.
pub fn write_report(
    folder: &Path,
    report: &str,
    generated_at: NaiveDateTime,
) -> Result<PathBuf, MasteryError> {
    let path = folder.join(report_file_name(generated_at));
    fs::write(&path, report)?;
    Ok(path)
}

/// Writes the `--json` view next to where the text report would go.
pub fn write_json_report(
    folder: &Path,
    json: &str,
    generated_at: NaiveDateTime,
) -> Result<PathBuf, MasteryError> {
    let path = folder.join(json_report_file_name(generated_at));
    fs::write(&path, json)?;
    Ok(path)
}
