use std::collections::HashSet;

use crate::analysis::lexicons::LexiconSet;
use crate::analysis::tokenization::stem;
use crate::types::{round2, round3, LinguisticFeatures, SegmentedText};

/// Neutral coherence when there are no sentence pairs to compare.
const NEUTRAL_COHERENCE: f64 = 0.5;

const DIVERSITY_WEIGHT: f64 = 0.6;
const WORD_LENGTH_WEIGHT: f64 = 0.4;
/// Average word length (chars) treated as maximally complex.
const MAX_AVG_WORD_LENGTH: f64 = 10.0;

/// Assemble the feature bundle for one segmented answer. Never fails: empty
/// word streams (punctuation-only text) produce zeroed counts with all
/// divisions guarded.
pub fn extract(segmented: &SegmentedText, lexicons: &LexiconSet) -> LinguisticFeatures {
    let lower: Vec<String> = segmented.words.iter().map(|w| w.to_lowercase()).collect();
    let word_count = segmented.words.len();
    let sentence_count = segmented.sentences.len().max(1);
    let avg_sentence_length = word_count as f64 / sentence_count as f64;

    LinguisticFeatures {
        word_count,
        sentence_count,
        avg_sentence_length: round2(avg_sentence_length),
        sentiment_score: round3(sentiment_polarity(&lower, lexicons)),
        confidence_indicators: lexicons.count_confidence(&lower),
        filler_words_count: lexicons.count_fillers(&lower),
        technical_terms_count: lexicons.count_technical(&lower),
        coherence_score: round3(coherence_score(&segmented.sentences, lexicons)),
        complexity_score: round3(complexity_score(&segmented.words)),
    }
}

/// Net lexicon polarity in [-1, 1]: (pos - neg) / (pos + neg), 0 when neither
/// lexicon matches. Presence-only counts; negation and sarcasm are not handled.
pub fn sentiment_polarity(tokens: &[String], lexicons: &LexiconSet) -> f64 {
    let pos = lexicons.count_positive(tokens) as f64;
    let neg = lexicons.count_negative(tokens) as f64;
    let total = pos + neg;
    if total == 0.0 {
        return 0.0;
    }
    (pos - neg) / total
}

/// Mean Jaccard overlap of content-word stems between consecutive sentences.
/// Pairs where either side has no content words are skipped; with fewer than
/// two sentences (or no usable pairs) the neutral default applies.
pub fn coherence_score(sentences: &[Vec<String>], lexicons: &LexiconSet) -> f64 {
    if sentences.len() < 2 {
        return NEUTRAL_COHERENCE;
    }

    let keyword_sets: Vec<HashSet<String>> = sentences
        .iter()
        .map(|words| content_stems(words, lexicons))
        .collect();

    let mut overlap_sum = 0.0;
    let mut pair_count = 0usize;
    for pair in keyword_sets.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.is_empty() || next.is_empty() {
            continue;
        }
        let intersection = current.intersection(next).count() as f64;
        let union = current.union(next).count() as f64;
        overlap_sum += intersection / union;
        pair_count += 1;
    }

    if pair_count == 0 {
        NEUTRAL_COHERENCE
    } else {
        overlap_sum / pair_count as f64
    }
}

/// Vocabulary complexity in [0, 1]: 0.6 * lexical diversity (unique stems over
/// word count) + 0.4 * normalized average word length.
pub fn complexity_score(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<String> = words.iter().map(|w| stem(w)).collect();
    let diversity = unique.len() as f64 / words.len() as f64;

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = total_chars as f64 / words.len() as f64;
    let length_score = (avg_word_length / MAX_AVG_WORD_LENGTH).min(1.0);

    DIVERSITY_WEIGHT * diversity + WORD_LENGTH_WEIGHT * length_score
}

/// Stopword-filtered stems of one sentence, approximating the content words
/// (nouns, verbs) a POS tagger would select.
fn content_stems(words: &[String], lexicons: &LexiconSet) -> HashSet<String> {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .filter(|w| !lexicons.is_stopword(w))
        .map(|w| stem(&w))
        .collect()
}
