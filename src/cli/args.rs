//! Command line argument parsing for the Banter CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Banter - intent classification and chatbot toolkit
#[derive(Parser, Debug, Clone)]
#[command(name = "banter")]
#[command(about = "A lightweight intent classification and chatbot toolkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Banter Contributors")]
#[command(long_about = None)]
pub struct BanterArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BanterArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a single utterance against a catalog
    Classify(ClassifyArgs),

    /// Run an interactive chat session
    Chat(ChatArgs),

    /// Show catalog statistics
    Stats(StatsArgs),

    /// Aggregate chat logs into a report
    Report(ReportArgs),
}

/// Arguments for one-shot classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the catalog JSON file
    #[arg(value_name = "CATALOG_FILE")]
    pub catalog: PathBuf,

    /// The utterance to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Minimum similarity for a match (rejects strictly below)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for an interactive chat session
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Path to the catalog JSON file
    #[arg(value_name = "CATALOG_FILE")]
    pub catalog: PathBuf,

    /// Site name the conversation belongs to (used in chat logs)
    #[arg(short, long, default_value = "default")]
    pub site: String,

    /// Path to a responses JSON file (intent -> reply)
    #[arg(short, long)]
    pub responses: Option<PathBuf>,

    /// Directory to append per-site chat logs to
    #[arg(short, long)]
    pub log_dir: Option<PathBuf>,

    /// Minimum similarity for a match (rejects strictly below)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for catalog statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the catalog JSON file
    #[arg(value_name = "CATALOG_FILE")]
    pub catalog: PathBuf,
}

/// Arguments for chat log reporting
#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// Directory containing per-site chat log files
    #[arg(value_name = "LOG_DIR")]
    pub log_dir: PathBuf,

    /// Only include these sites (repeatable; default: all sites)
    #[arg(short, long)]
    pub site: Vec<String>,

    /// Number of top intents to list
    #[arg(long, default_value = "10")]
    pub top: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_classify_command() {
        let args = BanterArgs::try_parse_from([
            "banter",
            "classify",
            "catalog.json",
            "I miss my home",
            "--threshold",
            "0.4",
        ])
        .unwrap();

        if let Command::Classify(classify_args) = args.command {
            assert_eq!(classify_args.catalog, PathBuf::from("catalog.json"));
            assert_eq!(classify_args.text, "I miss my home");
            assert_eq!(classify_args.threshold, Some(0.4));
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_chat_command() {
        let args = BanterArgs::try_parse_from([
            "banter",
            "chat",
            "catalog.json",
            "--site",
            "Green View",
            "--log-dir",
            "logs",
        ])
        .unwrap();

        if let Command::Chat(chat_args) = args.command {
            assert_eq!(chat_args.site, "Green View");
            assert_eq!(chat_args.log_dir, Some(PathBuf::from("logs")));
            assert!(chat_args.responses.is_none());
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_report_command() {
        let args = BanterArgs::try_parse_from([
            "banter",
            "report",
            "logs",
            "--site",
            "Green View",
            "--site",
            "Sunrise",
            "--top",
            "3",
        ])
        .unwrap();

        if let Command::Report(report_args) = args.command {
            assert_eq!(report_args.log_dir, PathBuf::from("logs"));
            assert_eq!(report_args.site, vec!["Green View", "Sunrise"]);
            assert_eq!(report_args.top, 3);
        } else {
            panic!("Expected Report command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = BanterArgs::try_parse_from(["banter", "stats", "catalog.json"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = BanterArgs::try_parse_from(["banter", "-vv", "stats", "catalog.json"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args =
            BanterArgs::try_parse_from(["banter", "--quiet", "stats", "catalog.json"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            BanterArgs::try_parse_from(["banter", "--format", "json", "stats", "catalog.json"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
