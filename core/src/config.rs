//! Data directory and classifier configuration.
//!
//! Everything lives in `~/.snippets/` (or `$SNIPPETS_HOME`):
//! ```text
//! ~/.snippets/
//!   rules.json      # Custom category rules, appended to the built-in table
//! ```

use crate::classify::{load_custom_rules, ClassifyError, Classifier};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "SNIPPETS_HOME";

const RULES_FILE: &str = "rules.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    Home,
    #[error("Invalid custom rule: {0}")]
    Rule(#[from] ClassifyError),
}

/// Return the data directory.
///
/// Uses `$SNIPPETS_HOME` if set and non-empty, otherwise `~/.snippets/`.
pub fn get_snippets_home() -> Result<PathBuf, ConfigError> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let home = dirs::home_dir().ok_or(ConfigError::Home)?;
    Ok(home.join(".snippets"))
}

/// Path of the custom rules file.
pub fn custom_rules_path() -> Result<PathBuf, ConfigError> {
    Ok(get_snippets_home()?.join(RULES_FILE))
}

/// Build the classifier for this process.
///
/// With `use_custom`, rules from `rules.json` are appended after the built-in
/// catalogue. The result is fixed for the lifetime of the classifier.
pub fn load_classifier(use_custom: bool) -> Result<Classifier, ConfigError> {
    if !use_custom {
        return Ok(Classifier::builtin().clone());
    }

    let path = custom_rules_path()?;
    let custom = load_custom_rules(&path)?;
    if custom.is_empty() {
        return Ok(Classifier::builtin().clone());
    }
    Ok(Classifier::with_custom(&custom)?)
}
