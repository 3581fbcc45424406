//! Analyze command - classify a single text.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use sereno_domain::SessionTier;
use std::io::Read;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, formatter: &Formatter) -> Result<()> {
    let text = gather_text(&args)?;
    let result = sereno_analyzer::analyze(&text);

    println!("{}", formatter.format_analysis(&result)?);

    // Alerting is caller-side policy: flag results that crossed into the
    // critical tier.
    if result.session == SessionTier::Critical {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "High stress level detected ({:.1}/10)",
                result.stress_level
            ))
        );
    }

    if args.support {
        println!();
        println!("{}", formatter.format_support(result.session));
    }

    Ok(())
}

fn gather_text(args: &AnalyzeArgs) -> Result<String> {
    if let Some(path) = &args.file {
        return Ok(std::fs::read_to_string(path)?);
    }

    if args.stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    if args.text.is_empty() {
        return Err(CliError::InvalidInput(
            "No text given. Pass the text as arguments, or use --file / --stdin.".to_string(),
        ));
    }

    Ok(args.text.join(" "))
}
