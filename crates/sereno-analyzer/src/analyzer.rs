//! The scoring pass: text in, `AnalysisResult` out.

use crate::tokenize::tokenize;
use sereno_domain::metrics;
use sereno_domain::{AnalysisResult, EmotionLabel, EmotionScore, SessionTier};
use sereno_lexicon::{NEGATOR_FACTOR, NEUTRAL_GLYPH};
use tracing::debug;

/// Analyze a text and produce the full emotional-state result.
///
/// Matching is whole-token and exact against the lexicon; the token
/// immediately before a match may scale its weight (intensifier) or invert
/// and dampen it (negator). Scores accumulate additively per occurrence,
/// with no cross-sentence context.
///
/// Degenerate inputs are defined outcomes, not errors: empty or
/// whitespace-only text yields the fixed insufficient-data result, and
/// text without a single keyword match yields the neutral low-confidence
/// result.
pub fn analyze(text: &str) -> AnalysisResult {
    if text.trim().is_empty() {
        return empty_input_result();
    }

    let normalized = text.to_lowercase();
    let tokens = tokenize(normalized.trim());

    let mut raw_scores = [0.0f64; EmotionLabel::COUNT];
    let mut match_counts = [0u32; EmotionLabel::COUNT];

    for (i, token) in tokens.iter().enumerate() {
        let labels = sereno_lexicon::emotions_for(token);
        if labels.is_empty() {
            continue;
        }

        // Only the immediately preceding token is inspected, and the
        // intensifier table wins over the negator table.
        let multiplier = match i.checked_sub(1).map(|p| tokens[p]) {
            Some(prev) => {
                if let Some(factor) = sereno_lexicon::intensifier_factor(prev) {
                    factor
                } else if sereno_lexicon::is_negator(prev) {
                    NEGATOR_FACTOR
                } else {
                    1.0
                }
            }
            None => 1.0,
        };

        for &label in labels {
            let weight = sereno_lexicon::definition(label).base_intensity.abs() as f64;
            raw_scores[label.index()] += multiplier * weight;
            match_counts[label.index()] += 1;
        }
    }

    let mut scores: Vec<(EmotionLabel, EmotionScore)> = Vec::new();
    for label in EmotionLabel::ALL {
        let count = match_counts[label.index()];
        if count == 0 {
            continue;
        }
        let raw = raw_scores[label.index()];
        scores.push((
            label,
            EmotionScore {
                raw_score: raw,
                match_count: count,
                normalized_intensity: metrics::normalized_intensity(raw, count),
            },
        ));
    }

    // Highest absolute raw score wins; ties resolve to the earliest label
    // in canonical order, which is the order `scores` is built in.
    let mut dominant: Option<(EmotionLabel, f64)> = None;
    for (label, score) in &scores {
        let magnitude = score.raw_score.abs();
        match dominant {
            Some((_, best)) if magnitude <= best => {}
            _ => dominant = Some((*label, magnitude)),
        }
    }

    let stress_level = metrics::stress_level(&scores);
    let matched_tokens: u32 = scores.iter().map(|(_, s)| s.match_count).sum();
    let confidence = metrics::confidence(matched_tokens, tokens.len());
    let intensity = metrics::overall_intensity(dominant.map(|(_, raw)| raw).unwrap_or(0.0));

    let dominant_label = dominant.map(|(label, _)| label);
    let recommendation = sereno_advisor::recommend(dominant_label, stress_level);
    let glyph = dominant_label
        .map(|label| sereno_lexicon::definition(label).glyph)
        .unwrap_or(NEUTRAL_GLYPH);

    debug!(
        tokens = tokens.len(),
        matched = matched_tokens,
        dominant = dominant_label.map(|l| l.as_str()).unwrap_or("neutral"),
        stress = stress_level,
        "analyzed text"
    );

    AnalysisResult {
        dominant: dominant_label,
        scores,
        stress_level,
        confidence,
        intensity,
        recommendation: recommendation.text,
        session: recommendation.session,
        glyph,
    }
}

/// Fixed result for empty or whitespace-only input.
///
/// The stress level of 5 encodes "insufficient data", deliberately not the
/// 0 that a calm text would earn.
fn empty_input_result() -> AnalysisResult {
    AnalysisResult {
        dominant: None,
        scores: Vec::new(),
        stress_level: metrics::EMPTY_INPUT_STRESS,
        confidence: 0.0,
        intensity: 0.0,
        recommendation: sereno_advisor::EMPTY_INPUT_PROMPT.to_string(),
        session: SessionTier::from_level(metrics::EMPTY_INPUT_STRESS),
        glyph: NEUTRAL_GLYPH,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every derived metric stays inside its documented range
        #[test]
        fn test_metric_ranges_for_any_input(text in ".{0,200}") {
            let result = analyze(&text);
            prop_assert!((0.0..=10.0).contains(&result.stress_level));
            prop_assert!((0.0..=100.0).contains(&result.confidence));
            prop_assert!((0.0..=10.0).contains(&result.intensity));
            for (_, score) in &result.scores {
                prop_assert!((0.0..=10.0).contains(&score.normalized_intensity));
                prop_assert!(score.match_count > 0);
            }
        }

        /// Property: analyze is a pure function of its input
        #[test]
        fn test_analyze_is_deterministic(text in ".{0,200}") {
            prop_assert_eq!(analyze(&text), analyze(&text));
        }

        /// Property: matched emotions appear in canonical order
        #[test]
        fn test_scores_in_canonical_order(text in "[a-záéíóúñ ]{0,120}") {
            let result = analyze(&text);
            let indices: Vec<usize> = result.scores.iter().map(|(l, _)| l.index()).collect();
            let mut sorted = indices.clone();
            sorted.sort_unstable();
            prop_assert_eq!(indices, sorted);
        }
    }
}
