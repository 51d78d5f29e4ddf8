pub mod analysis;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod pipeline;
pub mod types;

pub use analysis::lexicons::LexiconSet;
pub use analysis::summary::FeatureSummary;
pub use config::EvaluatorConfig;
pub use error::EvaluationError;
pub use pipeline::builder::AnswerEvaluatorBuilder;
pub use pipeline::runtime::AnswerEvaluator;
pub use pipeline::traits::Segmenter;
pub use types::{EvaluationScore, LinguisticFeatures, NormalizedFeatures, SegmentedText};
