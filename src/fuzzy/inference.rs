use crate::fuzzy::rules::Rule;
use crate::types::{LinguisticFeatures, NormalizedFeatures};

/// Crisp output when no rule fires (degenerate boundary inputs).
pub const NEUTRAL_SCORE: f64 = 5.0;

const UNIVERSE_MAX: f64 = 10.0;
/// Defuzzification grid resolution. 201 points over [0, 10].
const DEFUZZ_STEP: f64 = 0.05;
const ACTIVATION_EPS: f64 = 1e-9;

/// Project a feature bundle onto the common [0, 10] fuzzy input domain.
///
/// The per-100-words divisor is floored at 1 so short answers (and the
/// defensive `word_count == 0` case) never divide by zero.
pub fn normalize(features: &LinguisticFeatures, reference_word_count: f64) -> NormalizedFeatures {
    let word_count = features.word_count as f64;
    let per_hundred = (word_count / 100.0).max(1.0);

    let word_count_norm = (word_count / reference_word_count * 10.0).min(10.0);
    let coherence_norm = features.coherence_score * 10.0;
    let confidence_norm = (features.confidence_indicators as f64 / per_hundred * 5.0).min(10.0);
    let technical_norm = (features.technical_terms_count as f64 / per_hundred * 3.0).min(10.0);
    // inverted: higher means fewer fillers per 100 words
    let filler_norm = (10.0 - features.filler_words_count as f64 / per_hundred * 5.0).max(0.0);
    let complexity_norm = features.complexity_score * 10.0;

    NormalizedFeatures {
        word_count: word_count_norm.clamp(0.0, 10.0),
        coherence: coherence_norm.clamp(0.0, 10.0),
        confidence_level: confidence_norm.clamp(0.0, 10.0),
        technical_depth: technical_norm.clamp(0.0, 10.0),
        filler_ratio: filler_norm.clamp(0.0, 10.0),
        complexity: complexity_norm.clamp(0.0, 10.0),
    }
}

/// Mamdani inference over one rule base: each rule's firing strength clips its
/// consequent set, clipped sets aggregate pointwise by maximum, and the
/// aggregate defuzzifies to its centroid. Pure and deterministic.
pub fn infer(rules: &[Rule], features: &NormalizedFeatures) -> f64 {
    let strengths: Vec<f64> = rules.iter().map(|rule| rule.strength(features)).collect();

    let steps = (UNIVERSE_MAX / DEFUZZ_STEP) as usize;
    let mut weighted_sum = 0.0;
    let mut membership_sum = 0.0;
    for i in 0..=steps {
        let x = i as f64 * DEFUZZ_STEP;
        let mut aggregate = 0.0f64;
        for (rule, &strength) in rules.iter().zip(&strengths) {
            if strength <= 0.0 {
                continue;
            }
            let clipped = strength.min(rule.then.membership().degree(x));
            if clipped > aggregate {
                aggregate = clipped;
            }
        }
        weighted_sum += x * aggregate;
        membership_sum += aggregate;
    }

    if membership_sum <= ACTIVATION_EPS {
        return NEUTRAL_SCORE;
    }
    weighted_sum / membership_sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::rules::{CLARITY_RULES, CONFIDENCE_RULES, RELEVANCE_RULES};

    fn features_with(
        word_count: usize,
        confidence_indicators: usize,
        filler_words_count: usize,
        technical_terms_count: usize,
        coherence_score: f64,
        complexity_score: f64,
    ) -> LinguisticFeatures {
        LinguisticFeatures {
            word_count,
            sentence_count: 1,
            avg_sentence_length: word_count as f64,
            sentiment_score: 0.0,
            confidence_indicators,
            filler_words_count,
            technical_terms_count,
            coherence_score,
            complexity_score,
        }
    }

    #[test]
    fn normalize_reference_length_reaches_full_scale() {
        let features = features_with(150, 0, 0, 0, 0.0, 0.0);
        let normalized = normalize(&features, 150.0);
        assert_eq!(normalized.word_count, 10.0);

        let features = features_with(300, 0, 0, 0, 0.0, 0.0);
        let normalized = normalize(&features, 150.0);
        assert_eq!(normalized.word_count, 10.0);
    }

    #[test]
    fn normalize_rate_features_use_per_hundred_words() {
        // 200 words, 4 technical terms -> 2 per 100 words -> 6.0
        let features = features_with(200, 2, 1, 4, 0.0, 0.0);
        let normalized = normalize(&features, 150.0);
        assert!((normalized.technical_depth - 6.0).abs() < 1e-12);
        // 2 indicators / 2 hundred-words * 5 = 5.0
        assert!((normalized.confidence_level - 5.0).abs() < 1e-12);
        // 1 filler / 2 hundred-words * 5 = 2.5 off the inverted 10
        assert!((normalized.filler_ratio - 7.5).abs() < 1e-12);
    }

    #[test]
    fn normalize_short_answers_floor_the_divisor_at_one() {
        let features = features_with(20, 1, 2, 1, 0.0, 0.0);
        let normalized = normalize(&features, 150.0);
        assert!((normalized.confidence_level - 5.0).abs() < 1e-12);
        assert!((normalized.technical_depth - 3.0).abs() < 1e-12);
        assert!((normalized.filler_ratio - 0.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_word_count_is_guarded() {
        let features = features_with(0, 0, 0, 0, 0.5, 0.0);
        let normalized = normalize(&features, 150.0);
        assert_eq!(normalized.word_count, 0.0);
        assert_eq!(normalized.filler_ratio, 10.0);
        assert_eq!(normalized.coherence, 5.0);
    }

    #[test]
    fn normalize_clamps_to_universe() {
        let features = features_with(50, 40, 0, 40, 1.0, 1.0);
        let normalized = normalize(&features, 150.0);
        assert_eq!(normalized.confidence_level, 10.0);
        assert_eq!(normalized.technical_depth, 10.0);
        assert_eq!(normalized.coherence, 10.0);
        assert_eq!(normalized.complexity, 10.0);
    }

    #[test]
    fn fully_fired_good_set_centers_on_its_peak() {
        // medium coherence 5.0 + zero fillers fires "good" at full strength
        let normalized = NormalizedFeatures {
            word_count: 0.0,
            coherence: 5.0,
            confidence_level: 0.0,
            technical_depth: 0.0,
            filler_ratio: 10.0,
            complexity: 0.0,
        };
        let clarity = infer(CLARITY_RULES, &normalized);
        assert!((clarity - 7.0).abs() < 0.05, "got {clarity}");
    }

    #[test]
    fn poor_only_activation_lands_near_one() {
        let normalized = NormalizedFeatures {
            word_count: 0.0,
            coherence: 0.0,
            confidence_level: 0.0,
            technical_depth: 0.0,
            filler_ratio: 0.0,
            complexity: 0.0,
        };
        let clarity = infer(CLARITY_RULES, &normalized);
        assert!(clarity < 1.2, "got {clarity}");
    }

    #[test]
    fn excellent_only_activation_lands_high() {
        let normalized = NormalizedFeatures {
            word_count: 0.0,
            coherence: 10.0,
            confidence_level: 0.0,
            technical_depth: 0.0,
            filler_ratio: 10.0,
            complexity: 0.0,
        };
        let clarity = infer(CLARITY_RULES, &normalized);
        assert!(clarity > 9.0, "got {clarity}");
    }

    #[test]
    fn uncovered_combination_falls_back_to_neutral() {
        // high confidence vocabulary in a near-empty answer: no confidence
        // rule covers (high, low), so nothing fires
        let normalized = NormalizedFeatures {
            word_count: 0.0,
            coherence: 0.0,
            confidence_level: 9.0,
            technical_depth: 0.0,
            filler_ratio: 0.0,
            complexity: 0.0,
        };
        let confidence = infer(CONFIDENCE_RULES, &normalized);
        assert_eq!(confidence, NEUTRAL_SCORE);
    }

    #[test]
    fn inference_is_deterministic() {
        let normalized = NormalizedFeatures {
            word_count: 4.2,
            coherence: 6.3,
            confidence_level: 5.1,
            technical_depth: 7.7,
            filler_ratio: 8.4,
            complexity: 5.9,
        };
        let first = infer(RELEVANCE_RULES, &normalized);
        let second = infer(RELEVANCE_RULES, &normalized);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn clarity_monotone_in_coherence_without_fillers() {
        let at = |coherence: f64| {
            let normalized = NormalizedFeatures {
                word_count: 0.0,
                coherence,
                confidence_level: 0.0,
                technical_depth: 0.0,
                filler_ratio: 10.0,
                complexity: 0.0,
            };
            infer(CLARITY_RULES, &normalized)
        };
        assert!(at(9.0) >= at(2.0));
    }

    #[test]
    fn clarity_never_improves_with_more_fillers() {
        let at = |filler_ratio: f64| {
            let normalized = NormalizedFeatures {
                word_count: 0.0,
                coherence: 5.0,
                confidence_level: 0.0,
                technical_depth: 0.0,
                filler_ratio,
                complexity: 0.0,
            };
            infer(CLARITY_RULES, &normalized)
        };
        // filler_ratio is inverted: walking it down means more fillers
        let mut previous = at(10.0);
        for step in (0..=9).rev() {
            let current = at(step as f64);
            assert!(current <= previous + 1e-9);
            previous = current;
        }
    }

    #[test]
    fn outputs_stay_in_universe() {
        for technical in 0..=10 {
            for complexity in 0..=10 {
                let normalized = NormalizedFeatures {
                    word_count: 5.0,
                    coherence: 5.0,
                    confidence_level: 5.0,
                    technical_depth: technical as f64,
                    filler_ratio: 5.0,
                    complexity: complexity as f64,
                };
                let relevance = infer(RELEVANCE_RULES, &normalized);
                assert!((0.0..=10.0).contains(&relevance));
            }
        }
    }
}
