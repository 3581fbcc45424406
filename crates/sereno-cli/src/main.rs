//! Sereno CLI - Command-line interface for the emotional-state analyzer.

use clap::Parser;
use sereno_cli::commands;
use sereno_cli::repl;
use sereno_cli::{Cli, Command, Config, Formatter};
use tracing::Level;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();

    // A corrupt lexicon is fatal before any analysis can run
    sereno_lexicon::validate()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &formatter)?;
        }
        Some(Command::Analyze(args)) => {
            commands::execute_analyze(args, &formatter)?;
        }
        Some(Command::Trend(args)) => {
            commands::execute_trend(args, &formatter)?;
        }
        Some(Command::Emotions) => {
            commands::execute_emotions(&formatter)?;
        }
    }

    Ok(())
}
