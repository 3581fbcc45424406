//! Aggregation across multiple analyses.
//!
//! Pure functions over already-computed results; callers that accumulate
//! across threads must synchronize their own collection, the analyzer
//! itself holds no running state.

use sereno_domain::{AnalysisResult, EmotionLabel};

/// Overall direction of a series of analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    /// Average stress below 4
    Positive,

    /// Average stress between 4 and 6
    Neutral,

    /// Average stress above 6
    Negative,
}

impl TrendDirection {
    /// Get the direction name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Positive => "positiva",
            TrendDirection::Neutral => "neutral",
            TrendDirection::Negative => "negativa",
        }
    }
}

/// Aggregate view over a series of analyses.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSummary {
    /// Number of analyses aggregated
    pub analyzed: usize,

    /// Mean normalized intensity per emotion, over the analyses where the
    /// emotion matched; canonical label order
    pub average_intensity: Vec<(EmotionLabel, f64)>,

    /// Mean stress level across all analyses
    pub average_stress: f64,

    /// Direction derived from the mean stress level
    pub direction: TrendDirection,
}

/// Summarize a series of analyses. Returns `None` for an empty slice.
pub fn summarize(results: &[AnalysisResult]) -> Option<TrendSummary> {
    if results.is_empty() {
        return None;
    }

    let mut totals = [0.0f64; EmotionLabel::COUNT];
    let mut occurrences = [0u32; EmotionLabel::COUNT];

    for result in results {
        for (label, score) in &result.scores {
            totals[label.index()] += score.normalized_intensity;
            occurrences[label.index()] += 1;
        }
    }

    let average_intensity = EmotionLabel::ALL
        .iter()
        .filter(|label| occurrences[label.index()] > 0)
        .map(|label| {
            (
                *label,
                totals[label.index()] / occurrences[label.index()] as f64,
            )
        })
        .collect();

    let average_stress =
        results.iter().map(|r| r.stress_level).sum::<f64>() / results.len() as f64;

    let direction = if average_stress < 4.0 {
        TrendDirection::Positive
    } else if average_stress > 6.0 {
        TrendDirection::Negative
    } else {
        TrendDirection::Neutral
    };

    Some(TrendSummary {
        analyzed: results.len(),
        average_intensity,
        average_stress,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;

    #[test]
    fn test_empty_slice_has_no_summary() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn test_single_result_equals_itself() {
        let result = analyze("estoy muy nervioso");
        let summary = summarize(std::slice::from_ref(&result)).unwrap();

        assert_eq!(summary.analyzed, 1);
        assert!((summary.average_stress - result.stress_level).abs() < 1e-9);

        let anxiety = result.score_for(EmotionLabel::Anxiety).unwrap();
        let (label, avg) = summary.average_intensity[0];
        assert_eq!(label, EmotionLabel::Anxiety);
        assert!((avg - anxiety.normalized_intensity).abs() < 1e-9);
    }

    #[test]
    fn test_identical_results_average_to_same_values() {
        let result = analyze("tengo miedo");
        let series = vec![result.clone(), result.clone(), result.clone()];
        let summary = summarize(&series).unwrap();

        assert_eq!(summary.analyzed, 3);
        assert!((summary.average_stress - result.stress_level).abs() < 1e-9);
    }

    #[test]
    fn test_positive_trend_for_calm_series() {
        let series = vec![
            analyze("me siento feliz y contento"),
            analyze("estoy tranquilo y en paz"),
        ];
        let summary = summarize(&series).unwrap();
        assert_eq!(summary.direction, TrendDirection::Positive);
    }

    #[test]
    fn test_negative_trend_for_stressed_series() {
        let series = vec![
            analyze("estoy extremadamente aterrado"),
            analyze("tengo muchísimo pánico, extremadamente asustado"),
        ];
        let summary = summarize(&series).unwrap();
        assert!(summary.average_stress > 6.0);
        assert_eq!(summary.direction, TrendDirection::Negative);
    }

    #[test]
    fn test_average_intensity_in_canonical_order() {
        let series = vec![analyze("miedo y tristeza"), analyze("feliz")];
        let summary = summarize(&series).unwrap();
        let indices: Vec<usize> = summary
            .average_intensity
            .iter()
            .map(|(l, _)| l.index())
            .collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }
}
