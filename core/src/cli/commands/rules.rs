use super::print_json;
use crate::classify::{Classifier, CompiledRule};
use crate::cli::OutputFormat;
use crate::error::AppError;
use colored::Colorize;

pub fn run(
    classifier: &Classifier,
    label: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let rules: Vec<&CompiledRule> = match label {
        Some(label) => {
            let matching: Vec<_> = classifier
                .rules()
                .iter()
                .filter(|r| r.label() == label)
                .collect();
            if matching.is_empty() {
                return Err(AppError::not_found(format!("rule '{label}'")));
            }
            matching
        }
        None => classifier.rules().iter().collect(),
    };

    if format == OutputFormat::Json {
        let output: Vec<_> = rules
            .iter()
            .map(|r| {
                serde_json::json!({
                    "label": r.label(),
                    "origin": r.origin(),
                    "patterns": r.patterns().collect::<Vec<_>>(),
                })
            })
            .collect();
        print_json(&output);
        return Ok(());
    }

    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            rule.label().bold().cyan(),
            format!("({})", rule.origin()).dimmed()
        );
        for pattern in rule.patterns() {
            println!("  {}", pattern.green());
        }
    }

    Ok(())
}
