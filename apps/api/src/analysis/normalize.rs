//! Text normalization: lowercases, strips punctuation, tokenizes, and drops
//! stop words and very short tokens before vectorization.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Tokens shorter than this carry no keyword signal.
const MIN_TOKEN_LEN: usize = 3;

/// Fixed English stop-word set. Sorted, so membership is a binary search.
/// Contractions appear without apostrophes because punctuation is stripped
/// before filtering ("don't" reaches the filter as "dont").
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "arent", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "cannot", "cant", "could", "couldnt", "did", "didnt", "do",
    "does", "doesnt", "doing", "dont", "down", "during", "each", "few", "for", "from",
    "further", "had", "hadnt", "has", "hasnt", "have", "havent", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "isnt",
    "it", "its", "itself", "just", "me", "more", "most", "mustnt", "my", "myself", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "same", "shant", "she", "should", "shouldnt", "so", "some", "such",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "wasnt", "we", "were", "werent", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "wont", "would", "wouldnt", "you", "your", "yours", "yourself",
    "yourselves",
];

static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation pattern"));

/// Normalizes raw text for vectorization: lowercase, strip punctuation,
/// tokenize, drop stop words and tokens shorter than [`MIN_TOKEN_LEN`].
/// Tokens are rejoined with single spaces. Deterministic and idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lowered, "");
    stripped
        .unicode_words()
        .filter(|w| w.len() >= MIN_TOKEN_LEN && !is_stop_word(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Word count of raw (non-normalized) text, used by the length heuristics.
pub fn word_count(text: &str) -> usize {
    text.unicode_words().count()
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}
