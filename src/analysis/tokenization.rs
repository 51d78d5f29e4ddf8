const SENTENCE_TERMINATORS: [char; 4] = ['.', '!', '?', '…'];

/// Split text into word tokens: whitespace-delimited, surrounding punctuation
/// stripped, internal hyphens and apostrophes preserved. Tokens without any
/// alphanumeric character are dropped.
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split_whitespace().filter_map(normalize_token).collect()
}

fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim_matches(|c: char| !c.is_alphanumeric());
    if token.chars().any(|c| c.is_alphanumeric()) {
        Some(token.to_string())
    } else {
        None
    }
}

/// Split text into sentences at terminal punctuation followed by whitespace or
/// end of text. Decimal points and other mid-token periods do not split;
/// abbreviations like "e.g." do (known limitation).
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if !SENTENCE_TERMINATORS.contains(&c) {
            continue;
        }
        // absorb a terminator run ("?!", "...")
        while let Some(&next) = chars.peek() {
            if !SENTENCE_TERMINATORS.contains(&next) {
                break;
            }
            current.push(next);
            chars.next();
        }
        let at_boundary = match chars.peek() {
            None => true,
            Some(&next) => next.is_whitespace(),
        };
        if at_boundary {
            push_sentence(&mut sentences, &mut current);
        }
    }
    push_sentence(&mut sentences, &mut current);
    sentences
}

/// Degraded sentence splitting: break on every terminal punctuation character,
/// no look-ahead. Used by the fallback segmenter.
pub fn split_sentences_naive(text: &str) -> Vec<String> {
    text.split(|c| SENTENCE_TERMINATORS.contains(&c))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Light deterministic suffix stemmer standing in for lemmatization.
/// Handles common plural and inflection endings with minimum-stem guards;
/// anything else passes through lowercased.
pub fn stem(word: &str) -> String {
    let w = word.to_lowercase();
    if let Some(base) = w.strip_suffix("ies") {
        if base.len() >= 2 {
            return format!("{base}y");
        }
    }
    if let Some(base) = w.strip_suffix("sses") {
        return format!("{base}ss");
    }
    if let Some(base) = w.strip_suffix("es") {
        if base.len() >= 3 && matches!(base.chars().last(), Some('s' | 'x' | 'z')) {
            return base.to_string();
        }
    }
    if w.ends_with('s')
        && !w.ends_with("ss")
        && !w.ends_with("us")
        && !w.ends_with("is")
        && w.len() >= 4
    {
        return w[..w.len() - 1].to_string();
    }
    if let Some(base) = w.strip_suffix("ing") {
        if base.len() >= 4 {
            return base.to_string();
        }
    }
    if let Some(base) = w.strip_suffix("ed") {
        if base.len() >= 4 {
            return base.to_string();
        }
    }
    w
}
