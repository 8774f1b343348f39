//! Python bindings for LexFreq Rust components

use lexfreq_core::vocabulary::VocabularyBuilder as CoreVocabularyBuilder;
use lexfreq_core::{count_frequencies, merge as merge_pairs, FrequencyMatrix, Vocabulary};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use regex::Regex;

fn invalid_argument(message: impl ToString) -> PyErr {
    PyValueError::new_err(message.to_string())
}

/// Python-exposed vocabulary pipeline
#[pyclass]
pub struct VocabularyBuilder {
    builder: CoreVocabularyBuilder,
    stem: bool,
}

#[pymethods]
impl VocabularyBuilder {
    /// Create a new vocabulary builder
    ///
    /// Args:
    ///     tokenizer_pattern: Regex whose matches become the tokens
    ///     cleanup_pattern: Regex stripped out of every token
    ///     stem: Replace tokens with their stems
    #[new]
    #[pyo3(signature = (tokenizer_pattern=None, cleanup_pattern=None, stem=false))]
    fn new(
        tokenizer_pattern: Option<&str>,
        cleanup_pattern: Option<&str>,
        stem: bool,
    ) -> PyResult<Self> {
        let mut builder = CoreVocabularyBuilder::new().with_stemming(stem);
        if let Some(pattern) = tokenizer_pattern {
            builder = builder.with_tokenizer_pattern(
                Regex::new(pattern).map_err(invalid_argument)?,
            );
        }
        if let Some(pattern) = cleanup_pattern {
            builder =
                builder.with_cleanup_pattern(Regex::new(pattern).map_err(invalid_argument)?);
        }
        Ok(Self { builder, stem })
    }

    /// Build the vocabulary and the adjusted corpus
    ///
    /// Args:
    ///     corpus: List of document strings
    ///
    /// Returns:
    ///     (vocabulary, adjusted_corpus)
    fn build(&self, corpus: Vec<String>) -> (Vec<String>, Vec<Vec<String>>) {
        let (vocabulary, adjusted) = self.builder.build(&corpus);
        (vocabulary.into(), adjusted)
    }

    /// Build the vocabulary, the adjusted corpus, and the frequency matrix
    ///
    /// Args:
    ///     corpus: List of document strings
    ///
    /// Returns:
    ///     (vocabulary, adjusted_corpus, matrix) with matrix[i][j] the count
    ///     of vocabulary[i] in document j
    fn build_with_counts(
        &self,
        corpus: Vec<String>,
    ) -> (Vec<String>, Vec<Vec<String>>, Vec<Vec<u32>>) {
        let (vocabulary, adjusted, matrix) = self.builder.build_with_counts(&corpus);
        (vocabulary.into(), adjusted, matrix.into())
    }

    fn __repr__(&self) -> String {
        format!("VocabularyBuilder(stem={})", self.stem)
    }
}

/// Count vocabulary-word occurrences per document
#[pyfunction]
fn count(vocabulary: Vec<String>, corpus: Vec<Vec<String>>) -> Vec<Vec<u32>> {
    let vocabulary = Vocabulary::from_words(vocabulary);
    count_frequencies(&vocabulary, &corpus).into()
}

/// Merge two (vocabulary, matrix) pairs into one
///
/// Raises:
///     ValueError: When a matrix's row count does not match its vocabulary
#[pyfunction]
fn merge(
    vocab_a: Vec<String>,
    vocab_b: Vec<String>,
    matrix_a: Vec<Vec<u32>>,
    matrix_b: Vec<Vec<u32>>,
) -> PyResult<(Vec<String>, Vec<Vec<u32>>)> {
    let vocab_a = Vocabulary::from_words(vocab_a);
    let vocab_b = Vocabulary::from_words(vocab_b);
    let matrix_a = FrequencyMatrix::from_rows(matrix_a).map_err(invalid_argument)?;
    let matrix_b = FrequencyMatrix::from_rows(matrix_b).map_err(invalid_argument)?;

    let (vocabulary, matrix) =
        merge_pairs(&vocab_a, &vocab_b, &matrix_a, &matrix_b).map_err(invalid_argument)?;
    Ok((vocabulary.into(), matrix.into()))
}

/// Python module
#[pymodule]
fn lexfreq_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<VocabularyBuilder>()?;
    m.add_function(wrap_pyfunction!(count, m)?)?;
    m.add_function(wrap_pyfunction!(merge, m)?)?;
    Ok(())
}
