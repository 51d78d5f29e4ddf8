use serde::Serialize;

/// Words and sentence grouping produced by a [`crate::pipeline::traits::Segmenter`].
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedText {
    /// Tokens with surrounding punctuation stripped, original case preserved.
    pub words: Vec<String>,
    /// The same words grouped per detected sentence, in order.
    /// Contract: concatenating `sentences` yields `words`.
    pub sentences: Vec<Vec<String>>,
}

/// Linguistic measurements extracted from one answer. Immutable value object;
/// created fresh per extraction call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinguisticFeatures {
    /// Tokens excluding punctuation.
    pub word_count: usize,
    /// Detected sentences, always at least 1.
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    /// Net lexicon polarity in [-1, 1]. Bag-of-words heuristic: negation and
    /// sarcasm are not handled.
    pub sentiment_score: f64,
    /// Distinct confidence-lexicon entries present in the answer.
    pub confidence_indicators: usize,
    /// Distinct filler-lexicon entries present in the answer.
    pub filler_words_count: usize,
    /// Distinct technical-lexicon entries present in the answer.
    pub technical_terms_count: usize,
    /// Mean adjacent-sentence keyword Jaccard overlap in [0, 1]. A weak proxy
    /// for discourse coherence: no entity resolution, no coreference.
    pub coherence_score: f64,
    /// 0.6 * vocabulary diversity + 0.4 * normalized average word length, in [0, 1].
    pub complexity_score: f64,
}

/// Features projected onto the common [0, 10] fuzzy input domain. Derived
/// purely from [`LinguisticFeatures`]; not persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedFeatures {
    pub word_count: f64,
    pub coherence: f64,
    pub confidence_level: f64,
    pub technical_depth: f64,
    /// Inverted scale: higher means fewer fillers per 100 words.
    pub filler_ratio: f64,
    pub complexity: f64,
}

/// Crisp evaluation of one answer. All fields are in [0, 10], rounded to
/// 2 decimals; `overall` is the weighted combination of the rounded components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationScore {
    pub clarity: f64,
    pub confidence: f64,
    pub relevance: f64,
    pub overall: f64,
}

impl EvaluationScore {
    pub(crate) fn from_components(
        clarity: f64,
        confidence: f64,
        relevance: f64,
        clarity_weight: f64,
        confidence_weight: f64,
        relevance_weight: f64,
    ) -> Self {
        let clarity = round2(clamp_score(clarity));
        let confidence = round2(clamp_score(confidence));
        let relevance = round2(clamp_score(relevance));
        let overall = clarity * clarity_weight
            + confidence * confidence_weight
            + relevance * relevance_weight;
        Self {
            clarity,
            confidence,
            relevance,
            overall: round2(clamp_score(overall)),
        }
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 10.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
