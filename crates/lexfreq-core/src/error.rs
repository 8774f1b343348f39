//! Error types for the vocabulary and frequency pipeline

use std::fmt;

use thiserror::Error;

/// Identifies which input pair of a merge failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSide {
    Left,
    Right,
}

impl fmt::Display for MergeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeSide::Left => write!(f, "left"),
            MergeSide::Right => write!(f, "right"),
        }
    }
}

/// Invalid-argument errors raised before any output is produced
///
/// Every variant indicates a mistake in the caller's data preparation, so
/// none of them is retried or recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A merge input whose matrix row count does not match its vocabulary length
    #[error("{side} matrix has {rows} rows but its vocabulary has {words} words")]
    RowCountMismatch {
        side: MergeSide,
        words: usize,
        rows: usize,
    },

    /// A matrix built from rows of unequal width
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
