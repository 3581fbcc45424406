//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use sereno_analyzer::TrendSummary;
use sereno_domain::{AnalysisResult, SessionTier, StressTier};
use sereno_lexicon::{EmotionDef, EMOTIONS};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format one analysis result.
    pub fn format_analysis(&self, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_analysis_json(result),
            OutputFormat::Table => Ok(self.format_analysis_table(result)),
            OutputFormat::Quiet => Ok(format!(
                "{} {:.1} {:.1}",
                result.dominant_str(),
                result.stress_level,
                result.confidence
            )),
        }
    }

    /// Format an analysis as JSON, with the field names callers persist.
    fn format_analysis_json(&self, result: &AnalysisResult) -> Result<String> {
        let mut emotions = serde_json::Map::new();
        for (label, score) in &result.scores {
            emotions.insert(
                label.as_str().to_string(),
                serde_json::json!({
                    "puntuacion": score.raw_score,
                    "palabras_detectadas": score.match_count,
                    "intensidad": score.normalized_intensity,
                }),
            );
        }

        let value = serde_json::json!({
            "emocion_principal": result.dominant_str(),
            "emojis": result.glyph,
            "confianza": result.confidence,
            "nivel_estres": result.stress_level,
            "intensidad": result.intensity,
            "recomendacion": result.recommendation,
            "sesion": result.session.as_str(),
            "emociones": emotions,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format an analysis as a human-readable block with a score table.
    fn format_analysis_table(&self, result: &AnalysisResult) -> String {
        let tier = StressTier::from_level(result.stress_level);
        let stress_color = match tier {
            StressTier::Low => "green",
            StressTier::Moderate => "yellow",
            StressTier::High => "red",
        };

        let mut lines = vec![
            format!(
                "{} Emoción dominante: {}",
                result.glyph,
                self.colorize(result.dominant_str(), "cyan")
            ),
            self.colorize(
                &format!(
                    "Nivel de estrés: {:.1}/10 ({})",
                    result.stress_level,
                    tier.as_str()
                ),
                stress_color,
            ),
            format!("Confianza: {:.1}%", result.confidence),
            format!("Intensidad: {:.1}/10", result.intensity),
        ];

        if !result.scores.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Emoción", "Puntuación", "Coincidencias", "Intensidad"]);
            for (label, score) in &result.scores {
                builder.push_record([
                    label.as_str(),
                    &format!("{:.1}", score.raw_score),
                    &score.match_count.to_string(),
                    &format!("{:.1}", score.normalized_intensity),
                ]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            lines.push(String::new());
            lines.push(table.to_string());
        }

        lines.push(String::new());
        lines.push(format!("💡 Recomendación: {}", result.recommendation));
        lines.join("\n")
    }

    /// Format a trend summary.
    pub fn format_trend(&self, summary: &TrendSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut emotions = serde_json::Map::new();
                for (label, average) in &summary.average_intensity {
                    emotions.insert(
                        label.as_str().to_string(),
                        serde_json::json!(average),
                    );
                }
                let value = serde_json::json!({
                    "analisis_total": summary.analyzed,
                    "emociones_promedio": emotions,
                    "nivel_estres_promedio": summary.average_stress,
                    "tendencia": summary.direction.as_str(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(format!(
                "{} {:.1} {}",
                summary.analyzed,
                summary.average_stress,
                summary.direction.as_str()
            )),
            OutputFormat::Table => {
                let mut lines = vec![
                    format!("Textos analizados: {}", summary.analyzed),
                    format!("Estrés promedio: {:.1}/10", summary.average_stress),
                    format!("Tendencia: {}", summary.direction.as_str()),
                ];

                if !summary.average_intensity.is_empty() {
                    let mut builder = Builder::default();
                    builder.push_record(["Emoción", "Intensidad promedio"]);
                    for (label, average) in &summary.average_intensity {
                        builder.push_record([label.as_str(), &format!("{:.1}", average)]);
                    }
                    let mut table = builder.build();
                    table
                        .with(Style::rounded())
                        .with(Modify::new(Rows::first()).with(Alignment::center()));
                    lines.push(String::new());
                    lines.push(table.to_string());
                }

                Ok(lines.join("\n"))
            }
        }
    }

    /// Format the lexicon listing.
    pub fn format_emotions(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = EMOTIONS
                    .iter()
                    .map(|def: &EmotionDef| {
                        serde_json::json!({
                            "emocion": def.label.as_str(),
                            "emoji": def.glyph,
                            "nivel_base": def.base_intensity,
                            "palabras": def.keywords.len(),
                            "estresante": def.label.is_stress_bearing(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Quiet => Ok(EMOTIONS
                .iter()
                .map(|def| def.label.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Emoción", "Emoji", "Nivel base", "Palabras", "Estresante"]);
                for def in &EMOTIONS {
                    builder.push_record([
                        def.label.as_str(),
                        def.glyph,
                        &def.base_intensity.to_string(),
                        &def.keywords.len().to_string(),
                        if def.label.is_stress_bearing() { "sí" } else { "" },
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the support-session banner for a tier.
    pub fn format_support(&self, session: SessionTier) -> String {
        let text = sereno_advisor::support_session(session);
        match session {
            SessionTier::Critical => self.colorize(text, "red"),
            SessionTier::Moderate => self.colorize(text, "yellow"),
            SessionTier::Preventive => self.colorize(text, "green"),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sereno_analyzer::analyze;

    fn plain(format: OutputFormat) -> Formatter {
        Formatter::new(format, false)
    }

    #[test]
    fn test_json_format_uses_persisted_field_names() {
        let result = analyze("estoy muy feliz");
        let output = plain(OutputFormat::Json).format_analysis(&result).unwrap();
        assert!(output.contains("emocion_principal"));
        assert!(output.contains("nivel_estres"));
        assert!(output.contains("recomendacion"));
        assert!(output.contains("alegría"));
    }

    #[test]
    fn test_table_format_shows_scores() {
        let result = analyze("estoy triste y nervioso");
        let output = plain(OutputFormat::Table).format_analysis(&result).unwrap();
        assert!(output.contains("tristeza"));
        assert!(output.contains("ansiedad"));
        assert!(output.contains("Recomendación"));
    }

    #[test]
    fn test_quiet_format_is_one_line() {
        let result = analyze("estoy feliz");
        let output = plain(OutputFormat::Quiet).format_analysis(&result).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("alegría"));
    }

    #[test]
    fn test_neutral_result_formats_without_score_table() {
        let result = analyze("");
        let output = plain(OutputFormat::Table).format_analysis(&result).unwrap();
        assert!(output.contains("neutral"));
        assert!(!output.contains("Coincidencias"));
    }

    #[test]
    fn test_emotions_listing_covers_lexicon() {
        let output = plain(OutputFormat::Quiet).format_emotions().unwrap();
        assert_eq!(output.lines().count(), EMOTIONS.len());
    }

    #[test]
    fn test_trend_format() {
        let results = vec![analyze("feliz"), analyze("triste")];
        let summary = sereno_analyzer::summarize(&results).unwrap();
        let output = plain(OutputFormat::Table).format_trend(&summary).unwrap();
        assert!(output.contains("Textos analizados: 2"));
        assert!(output.contains("Tendencia"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = plain(OutputFormat::Table);
        assert_eq!(formatter.success("listo"), "✓ listo");
        assert_eq!(formatter.warning("ojo"), "⚠ ojo");
    }
}
