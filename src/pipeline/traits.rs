use crate::error::EvaluationError;
use crate::types::SegmentedText;

/// Splits answer text into words and sentence groups. The built-in segmenters
/// never fail; the fallible signature lets external backends report
/// unavailability, which the runtime absorbs by degrading to naive
/// segmentation.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<SegmentedText, EvaluationError>;
}
