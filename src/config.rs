use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::MasteryError;
use crate::models::DEFAULT_ACCOUNT;

pub const ACCOUNTS_FILE_NAME: &str = "usernames.txt";
pub const OUT_FOLDER_FILE_NAME: &str = "out_folder.txt";

#[must_use]
pub fn accounts_file(config_dir: &Path) -> PathBuf {
    config_dir.join(ACCOUNTS_FILE_NAME)
}

#[must_use]
pub fn out_folder_file(config_dir: &Path) -> PathBuf {
    config_dir.join(OUT_FOLDER_FILE_NAME)
}

/// Account identifiers, one per line. Blank lines and `#` comments are skipped.
#[must_use]
pub fn parse_account_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads the account list, falling back to the built-in example account when
/// the file does not exist.
pub fn load_account_list(path: &Path) -> Result<Vec<String>, MasteryError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_account_list(&text)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::info!(
                path = %path.display(),
                "no account list found; using example account {DEFAULT_ACCOUNT}"
            );
            Ok(vec![DEFAULT_ACCOUNT.to_string()])
        }
        Err(error) => Err(error.into()),
    }
}

#[must_use]
pub fn parse_out_folder(text: &str) -> Option<PathBuf> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

pub fn load_out_folder(path: &Path) -> Result<Option<PathBuf>, MasteryError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_out_folder(&text)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error.into()),
    }
}
