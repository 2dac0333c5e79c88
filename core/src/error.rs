use serde::Serialize;
use thiserror::Error;

/// Unified error type for the snippets library and CLI.
///
/// Serializes to JSON so callers sitting behind an API can report it
/// structurally.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    #[error("Rule error: {message}")]
    Rule { message: String },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl AppError {
    /// Create a Rule error
    pub fn rule(message: impl Into<String>) -> Self {
        Self::Rule {
            message: message.into(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a Not Found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable (user can retry or take action)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Fixable by editing rules.json or the environment
            Self::Config { .. } | Self::Io { .. } => true,
            // Same input fails the same way
            Self::Rule { .. }
            | Self::Validation { .. }
            | Self::NotFound { .. }
            | Self::Parse { .. } => false,
        }
    }
}

// Convert from ClassifyError
impl From<crate::classify::ClassifyError> for AppError {
    fn from(err: crate::classify::ClassifyError) -> Self {
        AppError::rule(err.to_string())
    }
}

// Convert from ConfigError
impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        use crate::config::ConfigError;
        match err {
            ConfigError::Io(e) => AppError::io(e.to_string()),
            ConfigError::Json(e) => AppError::config(format!("rules.json: {e}")),
            ConfigError::Home => AppError::config("Could not determine home directory"),
            ConfigError::Rule(e) => AppError::from(e),
        }
    }
}

// Convert from SnippetError
impl From<crate::snippet::SnippetError> for AppError {
    fn from(err: crate::snippet::SnippetError) -> Self {
        use crate::snippet::SnippetError;
        match &err {
            SnippetError::Json(e) => AppError::parse(e.to_string()),
            SnippetError::EmptyField(_) => AppError::validation(err.to_string()),
        }
    }
}

// Convert from std::io::Error
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::io(err.to_string())
    }
}

// Convert to String for callers that surface plain messages
impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}
