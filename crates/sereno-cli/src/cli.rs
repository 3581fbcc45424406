//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Sereno CLI - Analyze the emotional state expressed in a text.
#[derive(Debug, Parser)]
#[command(name = "sereno")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (dominant emotion, stress, confidence)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a single text
    Analyze(AnalyzeArgs),

    /// Analyze several texts and summarize the trend
    Trend(TrendArgs),

    /// List the emotions the lexicon can detect
    Emotions,

    /// Enter the interactive session (REPL) mode
    Repl,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// The text to analyze; words are joined with spaces
    pub text: Vec<String>,

    /// Read the text from a file instead
    #[arg(short = 'F', long, conflicts_with = "text")]
    pub file: Option<String>,

    /// Read the text from stdin instead
    #[arg(long, conflicts_with_all = ["text", "file"])]
    pub stdin: bool,

    /// Also print the support-session guidance for the computed tier
    #[arg(short, long)]
    pub support: bool,
}

/// Arguments for the trend command.
#[derive(Debug, Parser)]
pub struct TrendArgs {
    /// File with one text per line
    #[arg(short = 'F', long)]
    pub file: Option<String>,

    /// Read texts from stdin, one per line
    #[arg(long, conflicts_with = "file")]
    pub stdin: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_no_command() {
        let cli = Cli::parse_from(["sereno"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_analyze_command_with_text() {
        let cli = Cli::parse_from(["sereno", "analyze", "estoy", "muy", "feliz"]);
        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.text, vec!["estoy", "muy", "feliz"]);
                assert!(!args.support);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_analyze_command_with_support_flag() {
        let cli = Cli::parse_from(["sereno", "analyze", "--support", "tengo miedo"]);
        match cli.command {
            Some(Command::Analyze(args)) => assert!(args.support),
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_trend_command_from_file() {
        let cli = Cli::parse_from(["sereno", "trend", "--file", "diario.txt"]);
        match cli.command {
            Some(Command::Trend(args)) => assert_eq!(args.file.as_deref(), Some("diario.txt")),
            _ => panic!("Expected Trend command"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["sereno", "--format", "json", "emotions"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }
}
