use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::analysis::tokenization::tokenize_words;
use crate::error::EvaluationError;

/// Hesitation markers and verbal padding.
pub const FILLER_WORDS: &[&str] = &[
    "um",
    "uh",
    "like",
    "you know",
    "i mean",
    "sort of",
    "kind of",
    "basically",
    "actually",
    "literally",
    "so",
    "well",
];

/// Assertive and certainty vocabulary.
pub const CONFIDENCE_INDICATORS: &[&str] = &[
    "definitely",
    "certainly",
    "clearly",
    "obviously",
    "precisely",
    "exactly",
    "absolutely",
    "confident",
    "sure",
    "positive",
    "undoubtedly",
    "believe",
    "think",
    "know",
];

/// Software-engineering domain vocabulary.
pub const TECHNICAL_TERMS: &[&str] = &[
    "algorithm",
    "complexity",
    "database",
    "api",
    "framework",
    "architecture",
    "scalability",
    "optimization",
    "implementation",
    "design pattern",
    "microservice",
    "cache",
    "queue",
    "stack",
    "performance",
    "latency",
    "throughput",
    "distributed",
    "concurrent",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "success",
    "achieve",
    "improve",
    "effective",
    "efficient",
    "strong",
    "confident",
    "capable",
    "solution",
    "solve",
    "amazing",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "fail",
    "difficult",
    "problem",
    "issue",
    "struggle",
    "weak",
    "unable",
    "cannot",
    "never",
    "impossible",
    "confused",
    "error",
    "complicated",
    "wrong",
];

/// English function words excluded from keyword/content-word sets.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "else", "when", "while", "because", "as",
    "until", "of", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "in", "out", "on",
    "off", "over", "under", "again", "further", "once", "here", "there", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "can", "will", "just", "should",
    "now", "i", "me", "my", "myself", "we", "our", "ours", "you", "your", "yours", "he", "him",
    "his", "she", "her", "hers", "it", "its", "they", "them", "their", "what", "which", "who",
    "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "would", "could",
    "ought", "i'm", "you're", "he's", "she's", "it's", "we're", "they're", "don't", "doesn't",
    "didn't", "won't", "wouldn't", "can't", "couldn't", "shouldn't", "isn't", "aren't", "wasn't",
    "weren't", "let's", "that's", "there's",
];

/// Immutable lexicon bundle used by feature extraction. Built once at
/// evaluator construction, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    fillers: Vec<Vec<String>>,
    confidence: Vec<Vec<String>>,
    technical: Vec<Vec<String>>,
    positive: Vec<Vec<String>>,
    negative: Vec<Vec<String>>,
    stopwords: HashSet<String>,
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    fillers: Vec<String>,
    confidence: Vec<String>,
    technical: Vec<String>,
    positive: Vec<String>,
    negative: Vec<String>,
    #[serde(default)]
    stopwords: Vec<String>,
}

impl LexiconSet {
    /// The compiled-in English lexicons.
    pub fn builtin() -> Self {
        Self {
            fillers: compile_entries(FILLER_WORDS.iter().copied()),
            confidence: compile_entries(CONFIDENCE_INDICATORS.iter().copied()),
            technical: compile_entries(TECHNICAL_TERMS.iter().copied()),
            positive: compile_entries(POSITIVE_WORDS.iter().copied()),
            negative: compile_entries(NEGATIVE_WORDS.iter().copied()),
            stopwords: STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Load a lexicon override from a JSON file. Stopwords fall back to the
    /// compiled-in list when the file omits them.
    pub fn from_json_file(path: &Path) -> Result<Self, EvaluationError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| EvaluationError::io("read lexicon file", e))?;
        let raw: LexiconFile = serde_json::from_str(&data)
            .map_err(|e| EvaluationError::json("parse lexicon file", e))?;

        let set = Self {
            fillers: compile_entries(raw.fillers.iter().map(String::as_str)),
            confidence: compile_entries(raw.confidence.iter().map(String::as_str)),
            technical: compile_entries(raw.technical.iter().map(String::as_str)),
            positive: compile_entries(raw.positive.iter().map(String::as_str)),
            negative: compile_entries(raw.negative.iter().map(String::as_str)),
            stopwords: if raw.stopwords.is_empty() {
                STOPWORDS.iter().map(|w| w.to_string()).collect()
            } else {
                raw.stopwords.iter().map(|w| w.to_lowercase()).collect()
            },
        };

        if set.fillers.is_empty()
            || set.confidence.is_empty()
            || set.technical.is_empty()
            || set.positive.is_empty()
            || set.negative.is_empty()
        {
            return Err(EvaluationError::invalid_input(format!(
                "lexicon file '{}' must provide non-empty fillers, confidence, technical, positive and negative lists",
                path.display()
            )));
        }
        Ok(set)
    }

    /// Distinct filler entries present in the token stream.
    pub fn count_fillers(&self, tokens: &[String]) -> usize {
        count_present(&self.fillers, tokens)
    }

    /// Distinct confidence-indicator entries present in the token stream.
    pub fn count_confidence(&self, tokens: &[String]) -> usize {
        count_present(&self.confidence, tokens)
    }

    /// Distinct technical-term entries present in the token stream.
    pub fn count_technical(&self, tokens: &[String]) -> usize {
        count_present(&self.technical, tokens)
    }

    pub fn count_positive(&self, tokens: &[String]) -> usize {
        count_present(&self.positive, tokens)
    }

    pub fn count_negative(&self, tokens: &[String]) -> usize {
        count_present(&self.negative, tokens)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

/// Tokenize lexicon entries so multi-word phrases match consecutive tokens.
/// Entries that tokenize to nothing are discarded.
fn compile_entries<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Vec<String>> {
    entries
        .map(|entry| tokenize_words(&entry.to_lowercase()))
        .filter(|words| !words.is_empty())
        .collect()
}

/// Presence-only counting: each entry contributes at most once no matter how
/// often it repeats in the answer.
fn count_present(entries: &[Vec<String>], tokens: &[String]) -> usize {
    entries
        .iter()
        .filter(|entry| phrase_present(entry, tokens))
        .count()
}

fn phrase_present(entry: &[String], tokens: &[String]) -> bool {
    if entry.is_empty() || tokens.len() < entry.len() {
        return false;
    }
    tokens.windows(entry.len()).any(|window| {
        window
            .iter()
            .zip(entry)
            .all(|(token, word)| token_matches(token, word))
    })
}

/// Token-bounded match with plural tolerance: "algorithms" matches the
/// "algorithm" entry, but "well" never matches inside "well-structured" and
/// "so" never matches inside "solution".
fn token_matches(token: &str, entry: &str) -> bool {
    if token == entry {
        return true;
    }
    token.strip_suffix("es").is_some_and(|t| t == entry)
        || token.strip_suffix('s').is_some_and(|t| t == entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower_tokens(text: &str) -> Vec<String> {
        tokenize_words(&text.to_lowercase())
    }

    #[test]
    fn counts_single_word_entries() {
        let lex = LexiconSet::builtin();
        let tokens = lower_tokens("The algorithm uses a cache and a queue.");
        assert_eq!(lex.count_technical(&tokens), 3);
    }

    #[test]
    fn counts_multi_word_phrases() {
        let lex = LexiconSet::builtin();
        let tokens = lower_tokens("You know, I mean, it depends.");
        // "you know" and "i mean" each match as consecutive tokens
        assert_eq!(lex.count_fillers(&tokens), 2);
    }

    #[test]
    fn presence_counting_ignores_repetition() {
        let lex = LexiconSet::builtin();
        let tokens = lower_tokens("um um um um");
        assert_eq!(lex.count_fillers(&tokens), 1);
    }

    #[test]
    fn matching_is_token_bounded() {
        let lex = LexiconSet::builtin();
        // "well" must not match inside "well-structured", nor "so" inside "solution"
        let tokens = lower_tokens("A well-structured solution.");
        assert_eq!(lex.count_fillers(&tokens), 0);
    }

    #[test]
    fn plural_tolerance() {
        let lex = LexiconSet::builtin();
        let tokens = lower_tokens("Both algorithms hit the caches hard.");
        assert_eq!(lex.count_technical(&tokens), 2);
    }

    #[test]
    fn stopwords_are_lowercase_lookups() {
        let lex = LexiconSet::builtin();
        assert!(lex.is_stopword("the"));
        assert!(lex.is_stopword("don't"));
        assert!(!lex.is_stopword("database"));
    }

    #[test]
    fn from_json_file_roundtrip() {
        let path = std::env::temp_dir().join("answer_eval_lexicons_ok.json");
        let json = r#"{
            "fillers": ["um"],
            "confidence": ["seguro"],
            "technical": ["base de datos"],
            "positive": ["bueno"],
            "negative": ["malo"]
        }"#;
        std::fs::write(&path, json).expect("write lexicon file");

        let lex = LexiconSet::from_json_file(&path).expect("load lexicon file");
        let tokens = lower_tokens("La base de datos es bueno.");
        assert_eq!(lex.count_technical(&tokens), 1);
        assert_eq!(lex.count_positive(&tokens), 1);
        // stopwords fall back to the builtin list when omitted
        assert!(lex.is_stopword("the"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn from_json_file_rejects_empty_lists() {
        let path = std::env::temp_dir().join("answer_eval_lexicons_empty.json");
        let json = r#"{
            "fillers": [],
            "confidence": ["sure"],
            "technical": ["api"],
            "positive": ["good"],
            "negative": ["bad"]
        }"#;
        std::fs::write(&path, json).expect("write lexicon file");
        assert!(LexiconSet::from_json_file(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn from_json_file_missing_path_is_io_error() {
        let result = LexiconSet::from_json_file(Path::new("/nonexistent/lexicons.json"));
        assert!(matches!(result, Err(EvaluationError::Io { .. })));
    }
}
