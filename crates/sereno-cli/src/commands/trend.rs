//! Trend command - analyze several texts and summarize them.

use crate::cli::TrendArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::io::Read;

/// Execute the trend command.
///
/// Each non-empty line of the input is analyzed independently; the summary
/// aggregates the results.
pub fn execute_trend(args: TrendArgs, formatter: &Formatter) -> Result<()> {
    let contents = gather_lines(&args)?;

    let results: Vec<_> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(sereno_analyzer::analyze)
        .collect();

    match sereno_analyzer::summarize(&results) {
        Some(summary) => println!("{}", formatter.format_trend(&summary)?),
        None => println!("{}", formatter.warning("No texts to analyze")),
    }

    Ok(())
}

fn gather_lines(args: &TrendArgs) -> Result<String> {
    if let Some(path) = &args.file {
        return Ok(std::fs::read_to_string(path)?);
    }

    if args.stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    Err(CliError::InvalidInput(
        "No input given. Use --file or --stdin, one text per line.".to_string(),
    ))
}
