//! Metric computation module
//!
//! Implements the deterministic formulas that turn raw per-emotion scores
//! into the derived metrics: normalized intensity, stress level, confidence,
//! and overall intensity. Keeping them here, away from tokenization and
//! lexicon lookup, makes the numeric contract testable in isolation.

use crate::label::EmotionLabel;
use crate::result::EmotionScore;

/// Factor applied to the per-occurrence average when normalizing intensity
pub const INTENSITY_NORMALIZATION: f64 = 1.2;

/// Amplification applied to the stress-bearing average
pub const STRESS_AMPLIFICATION: f64 = 1.5;

/// Confidence reported when text was read but no keyword matched
pub const NO_MATCH_CONFIDENCE: f64 = 30.0;

/// Stress level reported for empty or whitespace-only input.
/// 5 encodes "insufficient data", not "calm".
pub const EMPTY_INPUT_STRESS: f64 = 5.0;

/// Normalize an emotion's accumulated score into a [0, 10] intensity.
///
/// The raw score is averaged over its occurrences, scaled, and clamped.
/// A `match_count` of zero yields 0.
pub fn normalized_intensity(raw_score: f64, match_count: u32) -> f64 {
    if match_count == 0 {
        return 0.0;
    }
    ((raw_score / match_count as f64) * INTENSITY_NORMALIZATION).clamp(0.0, 10.0)
}

/// Compute the overall stress level in [0, 10] from the matched scores.
///
/// Only the stress-bearing labels participate: their normalized intensities
/// are averaged and amplified. A text whose matches are all non-stress
/// emotions scores 0, regardless of how intense its dominant emotion is.
pub fn stress_level(scores: &[(EmotionLabel, EmotionScore)]) -> f64 {
    let mut total = 0.0;
    let mut stress_bearing = 0u32;

    for (label, score) in scores {
        if label.is_stress_bearing() {
            total += score.normalized_intensity;
            stress_bearing += 1;
        }
    }

    if stress_bearing == 0 {
        return 0.0;
    }

    let average = total / stress_bearing as f64;
    (average * STRESS_AMPLIFICATION).clamp(0.0, 10.0)
}

/// Compute the analysis confidence in [0, 100].
///
/// Confidence is the share of tokens that matched any emotion keyword. A
/// token matching several emotions counts once per matching emotion, so
/// `matched_tokens` is the sum of match counts across the score table.
/// When nothing matched at all, a fixed low-confidence default signals
/// "text was read but not recognized".
pub fn confidence(matched_tokens: u32, total_tokens: usize) -> f64 {
    if matched_tokens == 0 {
        return NO_MATCH_CONFIDENCE;
    }

    let denominator = total_tokens.max(1) as f64;
    ((matched_tokens as f64 / denominator) * 100.0).min(100.0)
}

/// Intensity of the dominant emotion in [0, 10], from its raw score.
pub fn overall_intensity(dominant_raw_score: f64) -> f64 {
    (dominant_raw_score.abs() / 10.0).min(10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(raw: f64, count: u32) -> EmotionScore {
        EmotionScore {
            raw_score: raw,
            match_count: count,
            normalized_intensity: normalized_intensity(raw, count),
        }
    }

    #[test]
    fn test_normalized_intensity_basic() {
        // 3 matches of weight 2 each: (6 / 3) * 1.2 = 2.4
        assert!((normalized_intensity(6.0, 3) - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_intensity_caps_at_ten() {
        assert_eq!(normalized_intensity(100.0, 1), 10.0);
    }

    #[test]
    fn test_normalized_intensity_floors_at_zero() {
        // A negated single match can drive the raw score negative
        assert_eq!(normalized_intensity(-1.0, 1), 0.0);
    }

    #[test]
    fn test_normalized_intensity_zero_matches() {
        assert_eq!(normalized_intensity(5.0, 0), 0.0);
    }

    #[test]
    fn test_stress_level_ignores_non_stress_emotions() {
        let scores = vec![(EmotionLabel::Joy, score(6.0, 2))];
        assert_eq!(stress_level(&scores), 0.0);
    }

    #[test]
    fn test_stress_level_averages_stress_bearing_only() {
        let scores = vec![
            (EmotionLabel::Joy, score(8.0, 1)),
            (EmotionLabel::Anxiety, score(4.0, 2)),
            (EmotionLabel::Fear, score(4.0, 2)),
        ];
        // Both stress emotions normalize to (4/2)*1.2 = 2.4; avg 2.4 * 1.5 = 3.6
        assert!((stress_level(&scores) - 3.6).abs() < 1e-9);
    }

    #[test]
    fn test_stress_level_empty_scores() {
        assert_eq!(stress_level(&[]), 0.0);
    }

    #[test]
    fn test_stress_level_caps_at_ten() {
        let scores = vec![(EmotionLabel::Anxiety, score(100.0, 1))];
        assert_eq!(stress_level(&scores), 10.0);
    }

    #[test]
    fn test_confidence_share_of_tokens() {
        assert!((confidence(1, 3) - 33.333333333333336).abs() < 1e-9);
        assert_eq!(confidence(5, 5), 100.0);
    }

    #[test]
    fn test_confidence_caps_at_one_hundred() {
        // Overlapping keyword sets can make matches exceed the token count
        assert_eq!(confidence(8, 4), 100.0);
    }

    #[test]
    fn test_confidence_no_match_default() {
        assert_eq!(confidence(0, 12), NO_MATCH_CONFIDENCE);
    }

    #[test]
    fn test_confidence_zero_token_guard() {
        assert_eq!(confidence(2, 0), 100.0);
    }

    #[test]
    fn test_overall_intensity() {
        assert!((overall_intensity(4.5) - 0.45).abs() < 1e-9);
        assert!((overall_intensity(-4.5) - 0.45).abs() < 1e-9);
        assert_eq!(overall_intensity(200.0), 10.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: normalized intensity is always within [0, 10]
        #[test]
        fn test_normalized_intensity_bounds(
            raw in -1000.0f64..1000.0,
            count in 0u32..100,
        ) {
            let value = normalized_intensity(raw, count);
            prop_assert!((0.0..=10.0).contains(&value));
        }

        /// Property: stress level is always within [0, 10]
        #[test]
        fn test_stress_level_bounds(
            raws in prop::collection::vec(-100.0f64..100.0, 0..8),
        ) {
            let scores: Vec<_> = raws
                .iter()
                .enumerate()
                .map(|(i, &raw)| {
                    let label = EmotionLabel::ALL[i % EmotionLabel::COUNT];
                    let count = (i as u32 % 3) + 1;
                    (label, EmotionScore {
                        raw_score: raw,
                        match_count: count,
                        normalized_intensity: normalized_intensity(raw, count),
                    })
                })
                .collect();

            let level = stress_level(&scores);
            prop_assert!((0.0..=10.0).contains(&level));
        }

        /// Property: confidence is always within [0, 100]
        #[test]
        fn test_confidence_bounds(
            matched in 0u32..1000,
            total in 0usize..1000,
        ) {
            let value = confidence(matched, total);
            prop_assert!((0.0..=100.0).contains(&value));
        }

        /// Property: more matched tokens never decrease confidence
        #[test]
        fn test_confidence_monotonic_in_matches(
            matched in 1u32..500,
            extra in 0u32..500,
            total in 1usize..1000,
        ) {
            prop_assert!(confidence(matched + extra, total) >= confidence(matched, total));
        }
    }
}
