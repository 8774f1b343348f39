//! Vocabulary construction
//!
//! The pipeline entry point: documents are case-folded, tokenized, cleaned,
//! and optionally stemmed, producing a duplicate-free vocabulary alongside
//! the adjusted corpus the frequency matrix is counted from.

use ahash::AHashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cleanup::clean_tokens;
use crate::frequency::{count_frequencies, FrequencyMatrix};
use crate::stem::WordStemmer;
use crate::tokenizer::Tokenizer;

/// An ordered, duplicate-free word list with a prebuilt word-to-row map
///
/// The enumeration order is fixed at construction (first occurrence wins)
/// and is the row order of any matrix built against this vocabulary.
/// Serializes as a plain sequence of words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    words: Vec<String>,
    index: AHashMap<String, usize>,
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived from the words, so word order decides equality.
        self.words == other.words
    }
}

impl Eq for Vocabulary {}

impl Vocabulary {
    /// Build a vocabulary from words, dropping duplicates
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Vocabulary::default();
        for word in words {
            vocabulary.insert(word.into());
        }
        vocabulary
    }

    fn insert(&mut self, word: String) {
        if !self.index.contains_key(&word) {
            self.index.insert(word.clone(), self.words.len());
            self.words.push(word);
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in row order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words in row order
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The matrix row assigned to a word
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Duplicate-free union: self's words first, then the other's unseen ones
    pub fn union(&self, other: &Vocabulary) -> Vocabulary {
        let mut combined = self.clone();
        for word in &other.words {
            combined.insert(word.clone());
        }
        combined
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(words: Vec<String>) -> Self {
        Vocabulary::from_words(words)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.words
    }
}

/// Runs tokenize, clean, and (optionally) stem over a corpus
pub struct VocabularyBuilder {
    tokenizer: Tokenizer,
    cleanup: Option<Regex>,
    stem: bool,
    stemmer: WordStemmer,
    preset: Option<Vocabulary>,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            cleanup: None,
            stem: false,
            stemmer: WordStemmer::new(),
            preset: None,
        }
    }

    /// Tokenize with a pattern instead of Unicode word boundaries
    pub fn with_tokenizer_pattern(mut self, pattern: Regex) -> Self {
        self.tokenizer = Tokenizer::with_pattern(pattern);
        self
    }

    /// Strip matches of a pattern out of every token
    pub fn with_cleanup_pattern(mut self, pattern: Regex) -> Self {
        self.cleanup = Some(pattern);
        self
    }

    /// Replace cleaned tokens with their stems
    pub fn with_stemming(mut self, stem: bool) -> Self {
        self.stem = stem;
        self
    }

    /// Use a fixed vocabulary instead of deriving one from the corpus
    ///
    /// Tokens outside the preset still appear in the adjusted corpus; they
    /// simply count for nothing when frequencies are taken.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.preset = Some(vocabulary);
        self
    }

    /// Produce the vocabulary and the adjusted corpus
    ///
    /// Each document is lower-cased, tokenized, cleaned (emptied tokens
    /// dropped), and optionally stemmed, in corpus order. The stem map is
    /// discarded here; callers who need it use [`WordStemmer::stem_all`]
    /// directly.
    pub fn build(&self, corpus: &[String]) -> (Vocabulary, Vec<Vec<String>>) {
        debug!(documents = corpus.len(), "building vocabulary");

        let mut pool: Vec<String> = Vec::new();
        let mut adjusted: Vec<Vec<String>> = Vec::with_capacity(corpus.len());

        for document in corpus {
            let lowered = document.to_lowercase();
            let tokens = self.tokenizer.tokenize(&lowered);
            let mut cleaned = clean_tokens(&tokens, self.cleanup.as_ref());
            if self.stem {
                let (stemmed, _) = self.stemmer.stem_all(&cleaned);
                cleaned = stemmed;
            }
            pool.extend(cleaned.iter().cloned());
            adjusted.push(cleaned);
        }

        let vocabulary = match &self.preset {
            Some(preset) => preset.clone(),
            None => Vocabulary::from_words(pool),
        };
        debug!(words = vocabulary.len(), "vocabulary assembled");

        (vocabulary, adjusted)
    }

    /// Produce the vocabulary, the adjusted corpus, and the word-by-document
    /// frequency matrix in one invocation
    pub fn build_with_counts(
        &self,
        corpus: &[String],
    ) -> (Vocabulary, Vec<Vec<String>>, FrequencyMatrix) {
        let (vocabulary, adjusted) = self.build(corpus);
        let matrix = count_frequencies(&vocabulary, &adjusted);
        (vocabulary, adjusted, matrix)
    }
}

impl Default for VocabularyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
