//! Snippet create/update payloads.
//!
//! Validates incoming payloads and computes the tag set handed to
//! persistence: user tags plus whatever the classifier detects in the code.

pub mod tags;

use crate::classify::Classifier;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

pub use tags::merge_tags;

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),
}

/// Payload for creating a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSnippet {
    pub title: String,
    pub code: String,
    pub language: String,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<String>>,
}

impl NewSnippet {
    /// Parse and validate a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, SnippetError> {
        let snippet: Self = serde_json::from_str(json)?;
        snippet.validate()?;
        Ok(snippet)
    }

    pub fn validate(&self) -> Result<(), SnippetError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("code", &self.code)?;
        require_non_empty("language", &self.language)
    }

    /// User tags merged with labels detected in `code`.
    pub fn resolve_tags(&self, classifier: &Classifier) -> BTreeSet<String> {
        merge_tags(user_tags(self.tags.as_deref()), classifier.classify(&self.code))
    }
}

/// Payload for updating a snippet. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetUpdate {
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<String>>,
}

impl SnippetUpdate {
    /// Parse and validate a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, SnippetError> {
        let update: Self = serde_json::from_str(json)?;
        update.validate()?;
        Ok(update)
    }

    pub fn validate(&self) -> Result<(), SnippetError> {
        if let Some(title) = &self.title {
            require_non_empty("title", title)?;
        }
        if let Some(code) = &self.code {
            require_non_empty("code", code)?;
        }
        if let Some(language) = &self.language {
            require_non_empty("language", language)?;
        }
        Ok(())
    }

    /// The tag set that replaces the snippet's current tags.
    ///
    /// Code is only re-classified when the update carries new code; an
    /// update without `tags` or `code` resolves to an empty set.
    pub fn resolve_tags(&self, classifier: &Classifier) -> BTreeSet<String> {
        let smart = self
            .code
            .as_deref()
            .map(|code| classifier.classify(code))
            .unwrap_or_default();
        merge_tags(user_tags(self.tags.as_deref()), smart)
    }
}

/// Accept an absent field as `None` but reject an explicit `null`.
fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn user_tags(tags: Option<&[String]>) -> impl Iterator<Item = &str> {
    tags.unwrap_or_default().iter().map(String::as_str)
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), SnippetError> {
    if value.is_empty() {
        Err(SnippetError::EmptyField(field))
    } else {
        Ok(())
    }
}
