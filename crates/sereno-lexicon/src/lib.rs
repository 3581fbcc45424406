//! Sereno Lexicon
//!
//! The static lexicon behind the analyzer: the emotion→keyword table, the
//! intensifier/negator tables, and read-only lookup indexes over them.
//!
//! All data is embedded at compile time and immutable; the indexes are
//! built once on first access and can be read concurrently from any number
//! of threads without locking. [`validate`] checks the tables' internal
//! consistency and is meant to run once at process startup — a failure
//! there is fatal, never a per-call error.
//!
//! # Examples
//!
//! ```
//! use sereno_domain::EmotionLabel;
//!
//! assert!(sereno_lexicon::validate().is_ok());
//! assert_eq!(
//!     sereno_lexicon::emotions_for("feliz"),
//!     &[EmotionLabel::Joy]
//! );
//! assert_eq!(sereno_lexicon::intensifier_factor("muy"), Some(1.5));
//! assert!(sereno_lexicon::is_negator("no"));
//! ```

#![warn(missing_docs)]

mod emotions;
mod error;
mod modifiers;

pub use emotions::{EmotionDef, EMOTIONS, NEUTRAL_GLYPH};
pub use error::LexiconError;
pub use modifiers::{INTENSIFIERS, NEGATORS, NEGATOR_FACTOR};

use once_cell::sync::Lazy;
use sereno_domain::EmotionLabel;
use std::collections::{HashMap, HashSet};

/// Keyword → emotions carrying it. Keyword sets are not disjoint, so a
/// token can map to several labels ("pánico" is both ansiedad and miedo);
/// the per-keyword label list preserves canonical order.
static KEYWORD_INDEX: Lazy<HashMap<&'static str, Vec<EmotionLabel>>> = Lazy::new(|| {
    let mut index: HashMap<&'static str, Vec<EmotionLabel>> = HashMap::new();
    for def in &EMOTIONS {
        for &keyword in def.keywords {
            let labels = index.entry(keyword).or_default();
            // Exact duplicates within one list collapse to set semantics
            if !labels.contains(&def.label) {
                labels.push(def.label);
            }
        }
    }
    index
});

static INTENSIFIER_INDEX: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

static NEGATOR_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATORS.iter().copied().collect());

/// Look up the emotions whose keyword sets contain `token`.
///
/// Returns an empty slice for unknown tokens. Matching is exact; callers
/// are expected to pass lowercased tokens.
pub fn emotions_for(token: &str) -> &'static [EmotionLabel] {
    KEYWORD_INDEX
        .get(token)
        .map(|labels| labels.as_slice())
        .unwrap_or(&[])
}

/// Amplification factor for `token` if it is an intensifier.
pub fn intensifier_factor(token: &str) -> Option<f64> {
    INTENSIFIER_INDEX.get(token).copied()
}

/// Whether `token` is a negator.
pub fn is_negator(token: &str) -> bool {
    NEGATOR_SET.contains(token)
}

/// The full definition for a label.
pub fn definition(label: EmotionLabel) -> &'static EmotionDef {
    // validate() pins EMOTIONS to canonical order, so the index is direct
    &EMOTIONS[label.index()]
}

/// Validate the embedded tables.
///
/// Checks that the emotion table covers every label exactly once in
/// canonical order, that every emotion has at least one lowercase keyword,
/// that base intensities stay in [-3, 2], that every intensifier
/// amplifies (factor > 1), and that the modifier tables are disjoint.
pub fn validate() -> Result<(), LexiconError> {
    for (index, def) in EMOTIONS.iter().enumerate() {
        let expected = EmotionLabel::ALL[index];
        if def.label != expected {
            return Err(LexiconError::OutOfOrder {
                index,
                expected: expected.as_str().to_string(),
                found: def.label.as_str().to_string(),
            });
        }

        if def.keywords.is_empty() {
            return Err(LexiconError::EmptyKeywords(def.label.as_str().to_string()));
        }

        if !(-3..=2).contains(&def.base_intensity) {
            return Err(LexiconError::IntensityOutOfRange {
                emotion: def.label.as_str().to_string(),
                value: def.base_intensity,
            });
        }

        for keyword in def.keywords {
            if keyword.chars().any(|c| c.is_uppercase()) {
                return Err(LexiconError::NotLowercase {
                    emotion: def.label.as_str().to_string(),
                    keyword: keyword.to_string(),
                });
            }
        }
    }

    for (word, factor) in &INTENSIFIERS {
        if *factor <= 1.0 {
            return Err(LexiconError::InvalidIntensifier {
                word: word.to_string(),
                factor: *factor,
            });
        }
        if NEGATORS.contains(word) {
            return Err(LexiconError::AmbiguousModifier(word.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_are_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_keyword_lookup_single_emotion() {
        assert_eq!(emotions_for("feliz"), &[EmotionLabel::Joy]);
        assert_eq!(emotions_for("aterrado"), &[EmotionLabel::Fear]);
    }

    #[test]
    fn test_keyword_lookup_overlapping_emotions() {
        // "pánico" belongs to both ansiedad and miedo, canonical order
        assert_eq!(
            emotions_for("pánico"),
            &[EmotionLabel::Anxiety, EmotionLabel::Fear]
        );
        // "solo" belongs to tristeza and soledad
        assert_eq!(
            emotions_for("solo"),
            &[EmotionLabel::Sadness, EmotionLabel::Loneliness]
        );
    }

    #[test]
    fn test_keyword_lookup_unknown_token() {
        assert!(emotions_for("zapato").is_empty());
        assert!(emotions_for("").is_empty());
    }

    #[test]
    fn test_intensifier_lookup() {
        assert_eq!(intensifier_factor("muy"), Some(1.5));
        assert_eq!(intensifier_factor("extremadamente"), Some(2.0));
        assert_eq!(intensifier_factor("realmente"), Some(1.2));
        assert_eq!(intensifier_factor("poco"), None);
    }

    #[test]
    fn test_negator_lookup() {
        for word in NEGATORS {
            assert!(is_negator(word));
        }
        assert!(!is_negator("sí"));
    }

    #[test]
    fn test_modifier_tables_are_disjoint() {
        for (word, _) in &INTENSIFIERS {
            assert!(!is_negator(word), "'{}' is in both tables", word);
        }
    }

    #[test]
    fn test_definition_lookup_matches_label() {
        for label in EmotionLabel::ALL {
            assert_eq!(definition(label).label, label);
        }
    }

    #[test]
    fn test_every_emotion_has_keywords() {
        for def in &EMOTIONS {
            assert!(!def.keywords.is_empty());
        }
    }

    #[test]
    fn test_nada_is_negator_and_keyword() {
        // "nada" negates the next token and is itself an emptiness keyword;
        // the scorer handles both roles in one pass
        assert!(is_negator("nada"));
        assert_eq!(emotions_for("nada"), &[EmotionLabel::Emptiness]);
    }
}
