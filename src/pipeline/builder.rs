use std::path::Path;

use crate::analysis::lexicons::LexiconSet;
use crate::config::EvaluatorConfig;
use crate::error::EvaluationError;
use crate::pipeline::defaults::BoundaryAwareSegmenter;
use crate::pipeline::runtime::{AnswerEvaluator, AnswerEvaluatorParts};
use crate::pipeline::traits::Segmenter;

pub struct AnswerEvaluatorBuilder {
    config: EvaluatorConfig,
    lexicons: Option<LexiconSet>,
    segmenter: Option<Box<dyn Segmenter>>,
}

impl AnswerEvaluatorBuilder {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            config,
            lexicons: None,
            segmenter: None,
        }
    }

    pub fn with_lexicons(mut self, lexicons: LexiconSet) -> Self {
        self.lexicons = Some(lexicons);
        self
    }

    pub fn with_segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    pub fn build(self) -> Result<AnswerEvaluator, EvaluationError> {
        validate_config(&self.config)?;

        let lexicons = match self.lexicons {
            Some(lexicons) => lexicons,
            None if !self.config.lexicon_path.is_empty() => {
                let lexicons = LexiconSet::from_json_file(Path::new(&self.config.lexicon_path))?;
                tracing::info!(path = %self.config.lexicon_path, "loaded lexicon override");
                lexicons
            }
            None => LexiconSet::builtin(),
        };

        Ok(AnswerEvaluator::from_parts(AnswerEvaluatorParts {
            config: self.config,
            lexicons,
            segmenter: self
                .segmenter
                .unwrap_or_else(|| Box::new(BoundaryAwareSegmenter)),
        }))
    }
}

fn validate_config(config: &EvaluatorConfig) -> Result<(), EvaluationError> {
    if config.clarity_weight < 0.0 || config.confidence_weight < 0.0 || config.relevance_weight < 0.0
    {
        return Err(EvaluationError::invalid_input(
            "score weights must be non-negative",
        ));
    }
    let weight_sum = config.clarity_weight + config.confidence_weight + config.relevance_weight;
    if weight_sum <= 0.0 {
        return Err(EvaluationError::invalid_input(
            "score weights must sum to a positive value",
        ));
    }
    if config.reference_word_count <= 0.0 {
        return Err(EvaluationError::invalid_input(
            "reference word count must be positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SegmentedText;

    struct FailingSegmenter;

    impl Segmenter for FailingSegmenter {
        fn segment(&self, _text: &str) -> Result<SegmentedText, EvaluationError> {
            Err(EvaluationError::invalid_input("backend unavailable"))
        }
    }

    #[test]
    fn build_with_defaults_succeeds() {
        let evaluator = AnswerEvaluatorBuilder::new(EvaluatorConfig::default())
            .build()
            .expect("build should succeed");
        let score = evaluator.score_answer("A plain sentence about databases.").unwrap();
        assert!((0.0..=10.0).contains(&score.overall));
    }

    #[test]
    fn build_rejects_negative_weights() {
        let config = EvaluatorConfig {
            clarity_weight: -0.1,
            ..EvaluatorConfig::default()
        };
        assert!(AnswerEvaluatorBuilder::new(config).build().is_err());
    }

    #[test]
    fn build_rejects_zero_weight_sum() {
        let config = EvaluatorConfig {
            clarity_weight: 0.0,
            confidence_weight: 0.0,
            relevance_weight: 0.0,
            ..EvaluatorConfig::default()
        };
        assert!(AnswerEvaluatorBuilder::new(config).build().is_err());
    }

    #[test]
    fn build_rejects_nonpositive_reference_length() {
        let config = EvaluatorConfig {
            reference_word_count: 0.0,
            ..EvaluatorConfig::default()
        };
        assert!(AnswerEvaluatorBuilder::new(config).build().is_err());
    }

    #[test]
    fn build_loads_lexicon_override_from_config_path() {
        let path = std::env::temp_dir().join("answer_eval_builder_lexicons.json");
        let json = r#"{
            "fillers": ["hmm"],
            "confidence": ["surely"],
            "technical": ["compiler"],
            "positive": ["nice"],
            "negative": ["awful"]
        }"#;
        std::fs::write(&path, json).expect("write lexicon file");

        let config = EvaluatorConfig {
            lexicon_path: path.to_string_lossy().into_owned(),
            ..EvaluatorConfig::default()
        };
        let evaluator = AnswerEvaluatorBuilder::new(config)
            .build()
            .expect("build should succeed");
        let features = evaluator
            .extract_features("The compiler is surely nice.")
            .unwrap();
        assert_eq!(features.technical_terms_count, 1);
        assert_eq!(features.confidence_indicators, 1);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn build_fails_on_missing_lexicon_path() {
        let config = EvaluatorConfig {
            lexicon_path: "/nonexistent/lexicons.json".to_string(),
            ..EvaluatorConfig::default()
        };
        assert!(AnswerEvaluatorBuilder::new(config).build().is_err());
    }

    #[test]
    fn explicit_lexicons_take_precedence_over_path() {
        let config = EvaluatorConfig {
            lexicon_path: "/nonexistent/lexicons.json".to_string(),
            ..EvaluatorConfig::default()
        };
        // the path is never touched when lexicons are supplied directly
        let evaluator = AnswerEvaluatorBuilder::new(config)
            .with_lexicons(LexiconSet::builtin())
            .build()
            .expect("build should succeed");
        let features = evaluator.extract_features("The algorithm works.").unwrap();
        assert_eq!(features.technical_terms_count, 1);
    }

    #[test]
    fn custom_segmenter_failure_degrades_instead_of_failing() {
        let evaluator = AnswerEvaluatorBuilder::new(EvaluatorConfig::default())
            .with_segmenter(Box::new(FailingSegmenter))
            .build()
            .expect("build should succeed");
        let features = evaluator
            .extract_features("Still works. Two sentences.")
            .unwrap();
        assert_eq!(features.sentence_count, 2);
    }
}
