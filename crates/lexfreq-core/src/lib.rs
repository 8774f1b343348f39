//! LexFreq Core - vocabulary extraction and word-frequency counting in Rust
//!
//! This library turns a corpus of free text into a deduplicated vocabulary,
//! an adjusted per-document token stream, and a word-by-document frequency
//! matrix, and merges independently built (vocabulary, matrix) pairs.

pub mod cleanup;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod merge;
pub mod stem;
pub mod stopwords;
pub mod tokenizer;
pub mod vocabulary;

pub use error::{Error, MergeSide, Result};
pub use frequency::{count_frequencies, FrequencyMatrix};
pub use merge::merge;
pub use stem::{StemMap, WordStemmer};
pub use stopwords::StopWords;
pub use tokenizer::Tokenizer;
pub use vocabulary::{Vocabulary, VocabularyBuilder};
