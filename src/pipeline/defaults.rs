use crate::analysis::tokenization::{split_sentences, split_sentences_naive, tokenize_words};
use crate::error::EvaluationError;
use crate::pipeline::traits::Segmenter;
use crate::types::SegmentedText;

/// Default segmenter: sentence boundaries at terminal punctuation followed by
/// whitespace or end of text.
pub struct BoundaryAwareSegmenter;

impl Segmenter for BoundaryAwareSegmenter {
    fn segment(&self, text: &str) -> Result<SegmentedText, EvaluationError> {
        let segmented = build_segmented(split_sentences(text));
        // Boundary detection must not drop or reshape tokens relative to
        // tokenizing the raw text in one pass.
        debug_assert_eq!(
            segmented.words,
            tokenize_words(text),
            "sentence segmentation must preserve the word stream"
        );
        Ok(segmented)
    }
}

/// Degraded fallback: split on every terminal punctuation character,
/// whitespace words. Always available.
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Result<SegmentedText, EvaluationError> {
        Ok(build_segmented(split_sentences_naive(text)))
    }
}

fn build_segmented(raw_sentences: Vec<String>) -> SegmentedText {
    let sentences: Vec<Vec<String>> = raw_sentences
        .iter()
        .map(|sentence| tokenize_words(sentence))
        .filter(|words| !words.is_empty())
        .collect();
    let words: Vec<String> = sentences.iter().flatten().cloned().collect();
    SegmentedText { words, sentences }
}
