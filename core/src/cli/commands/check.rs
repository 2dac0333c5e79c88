use super::{print_json, print_tags};
use crate::classify::Classifier;
use crate::cli::OutputFormat;
use crate::error::AppError;
use crate::snippet::{NewSnippet, SnippetUpdate};
use std::collections::BTreeSet;
use std::path::Path;

pub fn run(
    classifier: &Classifier,
    payload: &Path,
    update: bool,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (kind, tags) = resolve_payload(classifier, payload, update)?;

    if format == OutputFormat::Json {
        print_json(&serde_json::json!({
            "kind": kind,
            "valid": true,
            "tags": tags,
        }));
        return Ok(());
    }

    println!("Valid {kind} payload");
    println!();
    print_tags("Tags", &tags);
    Ok(())
}

/// Read, validate and tag a payload file. Returns the payload kind and the
/// tag set it resolves to.
fn resolve_payload(
    classifier: &Classifier,
    payload: &Path,
    update: bool,
) -> Result<(&'static str, BTreeSet<String>), AppError> {
    let content = std::fs::read_to_string(payload)
        .map_err(|e| AppError::io(format!("{}: {e}", payload.display())))?;

    if update {
        let changes = SnippetUpdate::from_json(&content)?;
        if changes.code.is_none() {
            log::debug!("[check] Update carries no code, skipping classification");
        }
        Ok(("update", changes.resolve_tags(classifier)))
    } else {
        let snippet = NewSnippet::from_json(&content)?;
        Ok(("create", snippet.resolve_tags(classifier)))
    }
}
