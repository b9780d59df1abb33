// keyword extraction + coverage scoring for free-text requirements
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::core::config::MatchConfig;

const SEPARATORS: &[char] = &[
    ' ', '\t', '\n', '\r', '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}',
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
        "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
        "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
        "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from", "further",
        "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll",
        "he's", "her", "here", "here's", "hers", "herself", "him", "himself", "his", "how", "how's",
        "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its",
        "itself", "let's", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not",
        "of", "off", "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves",
        "out", "over", "own", "same", "shan't", "she", "she'd", "she'll", "she's", "should",
        "shouldn't", "so", "some", "such", "than", "that", "that's", "the", "their", "theirs",
        "them", "themselves", "then", "there", "there's", "these", "they", "they'd", "they'll",
        "they're", "they've", "this", "those", "through", "to", "too", "under", "until", "up",
        "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't",
        "what", "what's", "when", "when's", "where", "where's", "which", "while", "who", "who's",
        "whom", "why", "why's", "with", "won't", "would", "wouldn't", "you", "you'd", "you'll",
        "you're", "you've", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

//verbs every requirement uses; they say nothing about which code implements it
static GENERIC_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["use", "set", "get", "create", "update", "delete", "show", "display"]
        .into_iter()
        .collect()
});

/// Salient lowercase terms of a requirement, deduplicated in first-seen order.
///
/// Short tokens (two chars or less), tokens with punctuation left in them, stop words and
/// generic verbs are dropped. Empty for blank input.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for token in lowered.split(SEPARATORS).filter(|t| !t.is_empty()) {
        if token.chars().count() <= 2 {
            continue;
        }
        if !token.chars().all(char::is_alphanumeric) {
            continue;
        }
        if STOP_WORDS.contains(token) || GENERIC_VERBS.contains(token) {
            continue;
        }
        if seen.insert(token) {
            out.push(token.to_string());
        }
    }

    out
}

/// How much of a keyword set one body of text covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub hits: usize,
    pub score: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordScorer {
    quorum_divisor: usize,
    min_hits: usize,
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

impl KeywordScorer {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            quorum_divisor: config.keyword_quorum_divisor.max(1),
            min_hits: config.min_keyword_hits,
        }
    }

    //each keyword counts once, case-insensitive substring search
    pub fn score(&self, keywords: &[String], body: &str) -> Coverage {
        if keywords.is_empty() {
            return Coverage { hits: 0, score: 0.0 };
        }
        let body = body.to_lowercase();
        let hits = keywords.iter().filter(|k| body.contains(&k.to_lowercase())).count();
        Coverage { hits, score: hits as f64 / keywords.len() as f64 }
    }

    /// Hits needed before a body counts as covering the requirement.
    pub fn required_hits(&self, keyword_count: usize) -> usize {
        self.min_hits.max(keyword_count / self.quorum_divisor)
    }

    pub fn is_match(&self, keywords: &[String], coverage: Coverage) -> bool {
        !keywords.is_empty() && coverage.hits >= self.required_hits(keywords.len())
    }
}
