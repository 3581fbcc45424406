//! Interactive session (REPL) mode - the conversational layer.
//!
//! Each line the user types is analyzed as a message; the loop replies with
//! an empathetic opener, the recommendation, and the support-session banner
//! for the computed tier. Per-session results accumulate locally so the
//! farewell can include a trend summary; the loop is single-threaded, so no
//! synchronization is needed around that history.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sereno_advisor::opening_line;
use sereno_analyzer::summarize;
use sereno_domain::AnalysisResult;
use std::path::PathBuf;

/// Run the interactive session.
pub fn run_repl(config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Sereno - escribe cómo te sientes; 'ayuda' para comandos, 'salir' para terminar")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut session_results: Vec<AnalysisResult> = Vec::new();

    loop {
        match editor.readline("sereno> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match line.to_lowercase().as_str() {
                    "salir" | "exit" | "quit" | "q" => {
                        print_farewell(&session_results, formatter)?;
                        break;
                    }
                    "ayuda" | "help" | "?" => print_help(formatter),
                    "resumen" | "trend" => print_session_trend(&session_results, formatter)?,
                    _ => respond(line, config, formatter, &mut session_results)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Escribe 'salir' para terminar"));
            }
            Err(ReadlineError::Eof) => {
                print_farewell(&session_results, formatter)?;
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// Analyze one message and print the conversational reply.
fn respond(
    message: &str,
    config: &Config,
    formatter: &Formatter,
    session_results: &mut Vec<AnalysisResult>,
) -> Result<()> {
    let result = sereno_analyzer::analyze(message);

    println!();
    println!("{} {}", result.glyph, opening_line(result.dominant));
    println!();
    println!("📋 Mi recomendación: {}", result.recommendation);
    println!(
        "   Estrés: {:.1}/10 · Confianza: {:.1}%",
        result.stress_level, result.confidence
    );

    if config.settings.show_support {
        println!();
        println!("{}", formatter.format_support(result.session));
    }
    println!();

    session_results.push(result);
    Ok(())
}

fn print_session_trend(session_results: &[AnalysisResult], formatter: &Formatter) -> Result<()> {
    match summarize(session_results) {
        Some(summary) => println!("{}", formatter.format_trend(&summary)?),
        None => println!("{}", formatter.info("Aún no hay mensajes analizados")),
    }
    Ok(())
}

fn print_farewell(session_results: &[AnalysisResult], formatter: &Formatter) -> Result<()> {
    if !session_results.is_empty() {
        println!();
        println!("{}", formatter.info("Resumen de la sesión:"));
        print_session_trend(session_results, formatter)?;
    }
    println!("{}", formatter.info("Cuídate. 💙"));
    Ok(())
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let sereno_dir = home.join(".sereno");
    std::fs::create_dir_all(&sereno_dir)?;
    Ok(sereno_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Comandos disponibles:"));
    println!();
    println!("  <texto libre>     - Analiza el mensaje y responde con apoyo");
    println!("  resumen, trend    - Muestra la tendencia de la sesión");
    println!("  ayuda, help, ?    - Muestra esta ayuda");
    println!("  salir, exit, q    - Termina la sesión");
    println!();
}
