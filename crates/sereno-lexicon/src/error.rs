//! Lexicon error types

use thiserror::Error;

/// Errors that can surface while validating the embedded lexicon.
///
/// These only occur when the static tables themselves are inconsistent,
/// so any of them is fatal at process startup; there is no per-call
/// recovery path.
#[derive(Error, Debug, PartialEq)]
pub enum LexiconError {
    /// An emotion entry is out of canonical order
    #[error("Emotion table out of canonical order at index {index}: expected {expected}, found {found}")]
    OutOfOrder {
        /// Table position
        index: usize,
        /// Label the canonical order requires at this position
        expected: String,
        /// Label actually found
        found: String,
    },

    /// An emotion entry has an empty keyword set
    #[error("Emotion '{0}' has no keywords")]
    EmptyKeywords(String),

    /// A keyword is not lowercase, so it could never match a token
    #[error("Emotion '{emotion}' keyword '{keyword}' is not lowercase")]
    NotLowercase {
        /// Owning emotion label
        emotion: String,
        /// Offending keyword
        keyword: String,
    },

    /// An intensifier factor does not amplify
    #[error("Intensifier '{word}' has non-amplifying factor {factor}")]
    InvalidIntensifier {
        /// Offending intensifier word
        word: String,
        /// Its configured factor
        factor: f64,
    },

    /// A word appears in both modifier tables
    #[error("Word '{0}' is both an intensifier and a negator")]
    AmbiguousModifier(String),

    /// A base intensity falls outside the supported range
    #[error("Emotion '{emotion}' base intensity {value} is outside [-3, 2]")]
    IntensityOutOfRange {
        /// Owning emotion label
        emotion: String,
        /// Its configured base intensity
        value: i8,
    },
}
