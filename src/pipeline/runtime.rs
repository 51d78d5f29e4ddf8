use crate::analysis::features;
use crate::analysis::lexicons::LexiconSet;
use crate::config::EvaluatorConfig;
use crate::error::EvaluationError;
use crate::fuzzy::inference;
use crate::fuzzy::rules::{CLARITY_RULES, CONFIDENCE_RULES, RELEVANCE_RULES};
use crate::pipeline::defaults::WhitespaceSegmenter;
use crate::pipeline::traits::Segmenter;
use crate::types::{EvaluationScore, LinguisticFeatures};

/// Stateless answer evaluator: feature extraction plus three independent
/// fuzzy-inference systems. Safe to share across threads; every call is a
/// pure function of its input.
pub struct AnswerEvaluator {
    config: EvaluatorConfig,
    lexicons: LexiconSet,
    segmenter: Box<dyn Segmenter>,
}

pub(crate) struct AnswerEvaluatorParts {
    pub config: EvaluatorConfig,
    pub lexicons: LexiconSet,
    pub segmenter: Box<dyn Segmenter>,
}

impl AnswerEvaluator {
    pub(crate) fn from_parts(parts: AnswerEvaluatorParts) -> Self {
        Self {
            config: parts.config,
            lexicons: parts.lexicons,
            segmenter: parts.segmenter,
        }
    }

    /// Extract linguistic features from one answer. Fails only for
    /// empty/whitespace text; a failing segmentation backend degrades to
    /// naive splitting instead of surfacing an error.
    pub fn extract_features(&self, text: &str) -> Result<LinguisticFeatures, EvaluationError> {
        if text.trim().is_empty() {
            return Err(EvaluationError::invalid_input("answer text is empty"));
        }

        let segmented = match self.segmenter.segment(text) {
            Ok(segmented) => segmented,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "segmenter failed; falling back to naive segmentation"
                );
                WhitespaceSegmenter.segment(text)?
            }
        };

        Ok(features::extract(&segmented, &self.lexicons))
    }

    /// Score a feature bundle. Deterministic and infallible: inputs outside
    /// the expected ranges are clamped during normalization, and rule-base
    /// coverage holes defuzzify to the neutral midpoint.
    pub fn evaluate(&self, features: &LinguisticFeatures) -> EvaluationScore {
        let normalized = inference::normalize(features, self.config.reference_word_count);

        let clarity = inference::infer(CLARITY_RULES, &normalized);
        let confidence = inference::infer(CONFIDENCE_RULES, &normalized);
        let relevance = inference::infer(RELEVANCE_RULES, &normalized);
        tracing::debug!(
            clarity = format!("{clarity:.3}"),
            confidence = format!("{confidence:.3}"),
            relevance = format!("{relevance:.3}"),
            "fuzzy inference complete"
        );

        EvaluationScore::from_components(
            clarity,
            confidence,
            relevance,
            self.config.clarity_weight,
            self.config.confidence_weight,
            self.config.relevance_weight,
        )
    }

    /// Convenience composition: extract features, then score them.
    pub fn score_answer(&self, text: &str) -> Result<EvaluationScore, EvaluationError> {
        let features = self.extract_features(text)?;
        Ok(self.evaluate(&features))
    }
}
