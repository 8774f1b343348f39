//! Word-by-document frequency matrices

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::vocabulary::Vocabulary;

/// Dense word-by-document count matrix
///
/// Rows follow the vocabulary's word order, columns the corpus's document
/// order; entry (i, j) is the count of word i in document j. Serializes as
/// a nested 2-D array, one inner array per word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct FrequencyMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl FrequencyMatrix {
    /// An all-zero matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Build a matrix from explicit rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        Self::try_from(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The count at (row, col)
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.data[row * self.cols + col]
    }

    /// A word's counts across all documents
    pub fn row(&self, row: usize) -> &[u32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u32] {
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn increment(&mut self, row: usize, col: usize) {
        self.data[row * self.cols + col] += 1;
    }

    /// The matrix as a row-per-word nested vector
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.rows).map(|row| self.row(row).to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<u32>>> for FrequencyMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(Error::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }
}

impl From<FrequencyMatrix> for Vec<Vec<u32>> {
    fn from(matrix: FrequencyMatrix) -> Self {
        matrix.to_rows()
    }
}

/// Count how often each vocabulary word occurs in each document
///
/// Runs in time proportional to the total token count: every token is a
/// single lookup in the vocabulary's word-to-row map. Tokens outside the
/// vocabulary are skipped, not an error.
pub fn count_frequencies(vocabulary: &Vocabulary, corpus: &[Vec<String>]) -> FrequencyMatrix {
    let mut matrix = FrequencyMatrix::zeros(vocabulary.len(), corpus.len());
    for (col, document) in corpus.iter().enumerate() {
        for token in document {
            if let Some(row) = vocabulary.index_of(token) {
                matrix.increment(row, col);
            }
        }
    }
    debug!(
        rows = matrix.rows(),
        cols = matrix.cols(),
        "frequency matrix counted"
    );
    matrix
}
