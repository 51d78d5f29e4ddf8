#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Weight of the clarity component in the overall score.
    pub clarity_weight: f64,
    /// Weight of the confidence component in the overall score.
    pub confidence_weight: f64,
    /// Weight of the relevance component in the overall score.
    pub relevance_weight: f64,
    /// Word count treated as a full-length answer when normalizing.
    pub reference_word_count: f64,
    /// Optional path to a lexicon override JSON file. Empty means the
    /// compiled-in lexicons are used.
    pub lexicon_path: String,
}

impl EvaluatorConfig {
    pub const DEFAULT_CLARITY_WEIGHT: f64 = 0.3;
    pub const DEFAULT_CONFIDENCE_WEIGHT: f64 = 0.3;
    pub const DEFAULT_RELEVANCE_WEIGHT: f64 = 0.4;
    pub const DEFAULT_REFERENCE_WORD_COUNT: f64 = 150.0;
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            clarity_weight: Self::DEFAULT_CLARITY_WEIGHT,
            confidence_weight: Self::DEFAULT_CONFIDENCE_WEIGHT,
            relevance_weight: Self::DEFAULT_RELEVANCE_WEIGHT,
            reference_word_count: Self::DEFAULT_REFERENCE_WORD_COUNT,
            lexicon_path: String::new(),
        }
    }
}
