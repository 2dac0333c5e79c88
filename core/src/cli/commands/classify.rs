use super::{print_json, print_tags};
use crate::classify::Classifier;
use crate::cli::OutputFormat;
use crate::error::AppError;
use crate::snippet::merge_tags;
use std::io::Read;
use std::path::Path;

pub fn run(
    classifier: &Classifier,
    file: Option<&Path>,
    user_tags: &[String],
    format: OutputFormat,
) -> Result<(), AppError> {
    // Read raw bytes: snippets are not guaranteed to be valid UTF-8
    let bytes = match file {
        Some(path) => std::fs::read(path)
            .map_err(|e| AppError::io(format!("{}: {e}", path.display())))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    log::debug!("[classify] Read {} byte(s)", bytes.len());

    let detected = classifier.classify_bytes(&bytes);
    let merged = merge_tags(
        user_tags.iter().map(String::as_str),
        detected.iter().copied(),
    );

    if format == OutputFormat::Json {
        print_json(&serde_json::json!({
            "detected": detected,
            "tags": merged,
        }));
        return Ok(());
    }

    print_tags("Detected", &detected);
    if !user_tags.is_empty() {
        println!();
        print_tags("Tags", &merged);
    }
    Ok(())
}
