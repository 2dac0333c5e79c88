pub mod commands;

use crate::config;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "snippets")]
#[command(author, version, about = "Auto-tag code snippets", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Override the data directory (default: ~/.snippets/, env: SNIPPETS_HOME)
    #[arg(long, global = true)]
    pub home: Option<String>,

    /// Ignore custom rules from rules.json
    #[arg(long, global = true)]
    pub no_custom: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect tags in a snippet file (reads stdin when no file is given)
    Classify {
        /// Snippet file
        file: Option<PathBuf>,

        /// Extra user tags to merge with the detected ones
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Show the active category rules
    Rules {
        /// Show only a specific label
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Validate a snippet JSON payload and show its resolved tags
    Check {
        /// Payload file
        payload: PathBuf,

        /// Treat the payload as an update instead of a create
        #[arg(long)]
        update: bool,
    },
}

/// Resolve a potentially relative path to an absolute one.
fn resolve_absolute(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| e.to_string())?;
    Ok(cwd.join(path))
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<(), String> {
    // Set SNIPPETS_HOME early so config lookups use the override
    if let Some(home) = &cli.home {
        let absolute = resolve_absolute(Path::new(home))?;
        std::env::set_var(config::HOME_ENV, &absolute);
    }

    let classifier = config::load_classifier(!cli.no_custom).map_err(|e| {
        crate::error::AppError::from(e).to_string()
    })?;

    let result = match cli.command {
        Commands::Classify { file, tags } => {
            commands::classify::run(&classifier, file.as_deref(), &tags, cli.format)
        }
        Commands::Rules { label } => {
            commands::rules::run(&classifier, label.as_deref(), cli.format)
        }
        Commands::Check { payload, update } => {
            commands::check::run(&classifier, &payload, update, cli.format)
        }
    };
    result.map_err(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify_with_tags() {
        let cli = Cli::try_parse_from([
            "snippets", "--format", "json", "classify", "a.js", "-t", "mine", "--tag", "other",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Classify { file, tags } => {
                assert_eq!(file, Some(PathBuf::from("a.js")));
                assert_eq!(tags, vec!["mine".to_owned(), "other".to_owned()]);
            }
            other => panic!("Wrong command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["snippets", "rules", "--no-custom", "-l", "loop"]).unwrap();
        assert!(cli.no_custom);
        assert!(matches!(cli.command, Commands::Rules { label: Some(ref l) } if l == "loop"));
    }

    #[test]
    fn test_parse_check_update() {
        let cli = Cli::try_parse_from(["snippets", "check", "payload.json", "--update"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { update: true, .. }));
    }

    #[test]
    fn test_resolve_absolute() {
        let abs = resolve_absolute(Path::new("data")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("data"));
    }
}
