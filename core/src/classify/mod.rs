//! Snippet auto-tagging.
//!
//! Scans snippet text against a table of category rules and returns the
//! label of every rule that matches. Classification is pure: no I/O, no
//! shared mutable state, and no failure mode. Matching runs on the `regex`
//! crate's automata, so cost is linear in the length of the input.

pub mod custom;
pub mod rules;

use regex::bytes::{Regex, RegexBuilder};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use thiserror::Error;

pub use custom::{load_custom_rules, parse_custom_rules, MatcherConfig, RuleConfig};
pub use rules::{CategoryRule, Matcher, BUILTIN_RULES};

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Rule label must not be empty")]
    EmptyLabel,
    #[error("Rule '{label}' has no matchers")]
    NoMatchers { label: String },
    #[error("Rule '{label}' has a words matcher with no usable keywords")]
    NoKeywords { label: String },
    #[error("Rule '{label}' has an invalid pattern: {source}")]
    InvalidPattern {
        label: String,
        #[source]
        source: regex::Error,
    },
}

/// Where a compiled rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleOrigin {
    Builtin,
    Custom,
}

impl std::fmt::Display for RuleOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleOrigin::Builtin => write!(f, "builtin"),
            RuleOrigin::Custom => write!(f, "custom"),
        }
    }
}

/// A rule with its matchers compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    label: String,
    origin: RuleOrigin,
    matchers: Vec<Regex>,
}

impl CompiledRule {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn origin(&self) -> RuleOrigin {
        self.origin
    }

    /// Regex sources of the matchers, in evaluation order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(Regex::as_str)
    }

    /// `any` stops at the first matching pattern.
    fn is_match(&self, bytes: &[u8]) -> bool {
        self.matchers.iter().any(|m| m.is_match(bytes))
    }
}

static BUILTIN: LazyLock<Classifier> = LazyLock::new(|| {
    Classifier::compile_table(BUILTIN_RULES, RuleOrigin::Builtin)
        .expect("built-in rule table must compile")
});

/// An immutable, compiled rule table.
///
/// Cheap to share: `Classifier` is `Send + Sync` and every method takes
/// `&self`.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<CompiledRule>,
}

impl Classifier {
    /// The built-in catalogue, compiled on first use.
    pub fn builtin() -> &'static Classifier {
        &BUILTIN
    }

    /// Compile a caller-supplied rule table. Every rule is reported as
    /// [`RuleOrigin::Custom`].
    pub fn from_rules(rules: &[CategoryRule<'_>]) -> Result<Self, ClassifyError> {
        Self::compile_table(rules, RuleOrigin::Custom)
    }

    fn compile_table(rules: &[CategoryRule<'_>], origin: RuleOrigin) -> Result<Self, ClassifyError> {
        let rules = rules
            .iter()
            .map(|rule| compile_rule(rule, origin))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// The built-in catalogue followed by `custom` rules.
    pub fn with_custom(custom: &[RuleConfig]) -> Result<Self, ClassifyError> {
        let mut rules = Self::builtin().rules.clone();
        for rule in custom {
            rules.push(compile_custom_rule(rule)?);
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Look up a rule by label. Returns the first rule with that label.
    pub fn rule(&self, label: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.label == label)
    }

    /// Classify snippet text. Returns the label of every matching rule.
    pub fn classify(&self, text: &str) -> BTreeSet<&str> {
        self.classify_bytes(text.as_bytes())
    }

    /// Classify raw bytes. Invalid UTF-8 never fails; it just doesn't match.
    pub fn classify_bytes(&self, bytes: &[u8]) -> BTreeSet<&str> {
        if bytes.is_empty() {
            return BTreeSet::new();
        }

        self.rules
            .iter()
            .filter(|rule| rule.is_match(bytes))
            .map(|rule| rule.label.as_str())
            .collect()
    }
}

/// Classify snippet text using the built-in catalogue.
pub fn classify(text: &str) -> BTreeSet<&'static str> {
    Classifier::builtin().classify(text)
}

/// Classify raw bytes using the built-in catalogue.
pub fn classify_bytes(bytes: &[u8]) -> BTreeSet<&'static str> {
    Classifier::builtin().classify_bytes(bytes)
}

fn compile_rule(rule: &CategoryRule<'_>, origin: RuleOrigin) -> Result<CompiledRule, ClassifyError> {
    check_label(rule.label, rule.matchers.len())?;

    let matchers = rule
        .matchers
        .iter()
        .map(|matcher| match *matcher {
            Matcher::Words { words, ignore_case } => {
                compile_words(rule.label, words, ignore_case)
            }
            Matcher::Pattern { regex, ignore_case } => {
                compile_pattern(rule.label, regex, ignore_case)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompiledRule {
        label: rule.label.to_owned(),
        origin,
        matchers,
    })
}

fn compile_custom_rule(rule: &RuleConfig) -> Result<CompiledRule, ClassifyError> {
    check_label(&rule.label, rule.matchers.len())?;

    let matchers = rule
        .matchers
        .iter()
        .map(|matcher| match matcher {
            MatcherConfig::Words { words, ignore_case } => {
                compile_words(&rule.label, words, *ignore_case)
            }
            MatcherConfig::Pattern { regex, ignore_case } => {
                compile_pattern(&rule.label, regex, *ignore_case)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompiledRule {
        label: rule.label.clone(),
        origin: RuleOrigin::Custom,
        matchers,
    })
}

fn check_label(label: &str, matcher_count: usize) -> Result<(), ClassifyError> {
    if label.trim().is_empty() {
        return Err(ClassifyError::EmptyLabel);
    }
    if matcher_count == 0 {
        return Err(ClassifyError::NoMatchers {
            label: label.to_owned(),
        });
    }
    Ok(())
}

fn compile_words<S: AsRef<str>>(
    label: &str,
    words: &[S],
    ignore_case: bool,
) -> Result<Regex, ClassifyError> {
    // A blank keyword would compile to an empty alternative and match at
    // every word boundary.
    if words.is_empty() || words.iter().any(|w| w.as_ref().trim().is_empty()) {
        return Err(ClassifyError::NoKeywords {
            label: label.to_owned(),
        });
    }
    compile_pattern(label, &rules::words_source(words), ignore_case)
}

fn compile_pattern(label: &str, source: &str, ignore_case: bool) -> Result<Regex, ClassifyError> {
    RegexBuilder::new(source)
        .case_insensitive(ignore_case)
        .build()
        .map_err(|source| ClassifyError::InvalidPattern {
            label: label.to_owned(),
            source,
        })
}
