//! Emotions command - list the lexicon.

use crate::error::Result;
use crate::output::Formatter;

/// Execute the emotions command.
pub fn execute_emotions(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_emotions()?);
    Ok(())
}
