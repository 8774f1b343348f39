//! Stop-word sets
//!
//! The fixed English list ships as a cached process-wide set; alternate
//! languages or custom lists are supplied by constructing a [`StopWords`]
//! value and injecting it where needed.

use std::collections::HashSet;
use std::sync::OnceLock;

/// The standard English stop-word list
const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then",
    "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we",
    "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's",
    "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with",
    "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

static ENGLISH_SET: OnceLock<StopWords> = OnceLock::new();

/// A set of words excluded from vocabularies
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a custom stop-word set
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The cached English set
    pub fn english() -> &'static StopWords {
        ENGLISH_SET.get_or_init(|| StopWords::new(ENGLISH.iter().copied()))
    }

    /// Look up the built-in set for a language code
    pub fn for_language(code: &str) -> Option<&'static StopWords> {
        match code {
            "en" => Some(Self::english()),
            _ => None,
        }
    }

    /// Whether the word is a stop word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether the word should be kept in a vocabulary
    pub fn keep(&self, word: &str) -> bool {
        !self.contains(word)
    }
}
