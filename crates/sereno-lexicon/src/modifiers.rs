//! The static modifier tables: intensifiers and negators.
//!
//! Both tables apply to the token immediately preceding a keyword match.
//! The intensifier check runs first; the tables must stay disjoint, which
//! `validate()` enforces at startup.

/// Multiplicative factor applied to a keyword matched right after a negator.
/// The sign inversion dampens as well as inverts.
pub const NEGATOR_FACTOR: f64 = -0.5;

/// Words that amplify the following keyword, with their factor.
pub static INTENSIFIERS: [(&str, f64); 13] = [
    ("muy", 1.5),
    ("demasiado", 1.5),
    ("extremadamente", 2.0),
    ("increíblemente", 2.0),
    ("terriblemente", 2.0),
    ("super", 1.5),
    ("mega", 1.5),
    ("hiper", 1.5),
    ("bastante", 1.3),
    ("mucho", 1.3),
    ("un montón", 1.5),
    ("tal", 1.2),
    ("realmente", 1.2),
];

/// Words that invert and dampen the following keyword.
pub static NEGATORS: [&str; 6] = ["no", "ni", "nunca", "jamás", "tampoco", "nada"];
