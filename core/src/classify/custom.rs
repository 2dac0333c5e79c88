//! User-defined rules loaded from `rules.json`.
//!
//! ```json
//! {
//!   "rules": [
//!     {
//!       "label": "testing",
//!       "matchers": [
//!         { "kind": "words", "words": ["describe", "it", "expect"] },
//!         { "kind": "pattern", "regex": "assert_eq!", "ignore_case": false }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub label: String,
    pub matchers: Vec<MatcherConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MatcherConfig {
    Words {
        words: Vec<String>,
        #[serde(default)]
        ignore_case: bool,
    },
    Pattern {
        regex: String,
        #[serde(default)]
        ignore_case: bool,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RulesFile {
    #[serde(default)]
    rules: Vec<RuleConfig>,
}

/// Parse custom rules from a JSON document.
pub fn parse_custom_rules(json: &str) -> Result<Vec<RuleConfig>, ConfigError> {
    let file: RulesFile = serde_json::from_str(json)?;
    Ok(file.rules)
}

/// Load custom rules from `path`. A missing file yields no rules.
pub fn load_custom_rules(path: &Path) -> Result<Vec<RuleConfig>, ConfigError> {
    if !path.exists() {
        log::debug!(
            "[load_custom_rules] No custom rules at {}",
            path.display()
        );
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let rules = parse_custom_rules(&content)?;
    log::debug!(
        "[load_custom_rules] Loaded {} custom rule(s) from {}",
        rules.len(),
        path.display()
    );
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_words_and_pattern() {
        let json = r#"{
            "rules": [
                {
                    "label": "testing",
                    "matchers": [
                        { "kind": "words", "words": ["describe", "expect"] },
                        { "kind": "pattern", "regex": "assert_eq!", "ignore_case": true }
                    ]
                }
            ]
        }"#;
        let rules = parse_custom_rules(json).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].label, "testing");
        assert_eq!(
            rules[0].matchers[0],
            MatcherConfig::Words {
                words: vec!["describe".to_owned(), "expect".to_owned()],
                ignore_case: false,
            }
        );
        assert_eq!(
            rules[0].matchers[1],
            MatcherConfig::Pattern {
                regex: "assert_eq!".to_owned(),
                ignore_case: true,
            }
        );
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(parse_custom_rules("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_unknown_kind_fails() {
        let json = r#"{"rules": [{"label": "x", "matchers": [{"kind": "glob", "glob": "*"}]}]}"#;
        assert!(matches!(
            parse_custom_rules(json),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let rules = load_custom_rules(&dir.path().join("rules.json")).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(
            &path,
            r#"{"rules": [{"label": "sql", "matchers": [{"kind": "words", "words": ["SELECT"], "ignore_case": true}]}]}"#,
        )
        .unwrap();

        let rules = load_custom_rules(&path).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].label, "sql");
    }
}
