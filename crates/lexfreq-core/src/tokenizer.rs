//! Word tokenization
//!
//! Splits on Unicode word boundaries by default, or returns the
//! non-overlapping matches of a caller-supplied pattern.

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Pattern that keeps punctuation only between word characters, so
/// "day-to-day" and "you're" survive as single tokens while leading and
/// trailing punctuation is cut off.
pub const MID_WORD_PUNCTUATION: &str = r"\w+(?:[^\w\s]?\w+)*";

/// Tokenizer with an optional pattern override
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    pattern: Option<Regex>,
}

impl Tokenizer {
    /// Create the default word tokenizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer whose tokens are the pattern's matches, left to right
    pub fn with_pattern(pattern: Regex) -> Self {
        Self {
            pattern: Some(pattern),
        }
    }

    /// Tokenize text into terms
    ///
    /// Case is left untouched; callers fold case once, before tokenizing.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match &self.pattern {
            Some(pattern) => pattern
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect(),
            None => text.unicode_words().map(str::to_string).collect(),
        }
    }
}
