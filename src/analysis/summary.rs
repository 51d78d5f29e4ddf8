use serde::Serialize;

use crate::types::LinguisticFeatures;

/// Human-readable interpretation of a feature bundle, for feedback surfaces
/// and reports. Bands, not scores; the fuzzy evaluator owns scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureSummary {
    pub length: &'static str,
    pub tone: &'static str,
    pub coherence: &'static str,
    pub vocabulary: &'static str,
}

pub fn summarize(features: &LinguisticFeatures) -> FeatureSummary {
    FeatureSummary {
        length: length_band(features.word_count),
        tone: tone_band(features.sentiment_score),
        coherence: coherence_band(features.coherence_score),
        vocabulary: vocabulary_band(features.complexity_score),
    }
}

fn length_band(word_count: usize) -> &'static str {
    if word_count < 50 {
        "very brief"
    } else if word_count < 100 {
        "brief"
    } else if word_count < 200 {
        "moderate"
    } else {
        "detailed"
    }
}

fn tone_band(sentiment: f64) -> &'static str {
    if sentiment > 0.3 {
        "positive"
    } else if sentiment < -0.3 {
        "negative"
    } else {
        "neutral"
    }
}

fn coherence_band(coherence: f64) -> &'static str {
    if coherence > 0.7 {
        "highly coherent"
    } else if coherence > 0.4 {
        "moderately coherent"
    } else {
        "needs better structure"
    }
}

fn vocabulary_band(complexity: f64) -> &'static str {
    if complexity > 0.7 {
        "sophisticated vocabulary"
    } else if complexity > 0.4 {
        "moderate complexity"
    } else {
        "simple language"
    }
}
