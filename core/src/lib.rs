//! Snippets library - auto-tagging for stored code snippets.
//!
//! This crate provides:
//! - Rule-based snippet classification (`classify`)
//! - Snippet create/update payload validation and tag merging (`snippet`)
//! - Data directory and custom rule configuration (`config`)
//!
//! Feature flags:
//! - `cli`: Command-line interface

// Core modules (always compiled)
pub mod classify;
pub mod config;
pub mod error;
pub mod snippet;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use classify::{classify, classify_bytes, Classifier};
pub use error::AppError;
pub use snippet::{NewSnippet, SnippetUpdate};
