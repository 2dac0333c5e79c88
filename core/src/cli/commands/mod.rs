pub mod check;
pub mod classify;
pub mod rules;

use colored::Colorize;
use std::collections::BTreeSet;

/// Serialize a value as pretty-printed JSON and print it to stdout.
fn print_json(value: &impl serde::Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("failed to serialize JSON output")
    );
}

/// Print a tag set one per line, or a placeholder when empty.
fn print_tags<S: AsRef<str>>(heading: &str, tags: &BTreeSet<S>) {
    println!("{}", heading.bold());
    if tags.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }
    for tag in tags {
        println!("  {}", tag.as_ref().green());
    }
}
