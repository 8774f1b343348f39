//! Merging independently built (vocabulary, matrix) pairs
//!
//! The combined vocabulary is the duplicate-free union of both sides. The
//! combined matrix keeps every original document column, all of the left
//! side's columns before all of the right side's, zero-filling the rows of
//! words a side never saw.

use tracing::debug;

use crate::error::{Error, MergeSide, Result};
use crate::frequency::FrequencyMatrix;
use crate::vocabulary::Vocabulary;

/// Merge two (vocabulary, frequency matrix) pairs into one consistent pair
///
/// Fails before producing anything when either side's matrix row count does
/// not match its vocabulary length. Row lookups go through each side's
/// prebuilt word-to-row map, so the whole merge costs one lookup per side
/// per combined word. Inputs are never mutated.
pub fn merge(
    vocab_a: &Vocabulary,
    vocab_b: &Vocabulary,
    matrix_a: &FrequencyMatrix,
    matrix_b: &FrequencyMatrix,
) -> Result<(Vocabulary, FrequencyMatrix)> {
    check_pair(MergeSide::Left, vocab_a, matrix_a)?;
    check_pair(MergeSide::Right, vocab_b, matrix_b)?;

    let combined = vocab_a.union(vocab_b);
    let left_cols = matrix_a.cols();
    let mut matrix = FrequencyMatrix::zeros(combined.len(), left_cols + matrix_b.cols());

    for (row, word) in combined.iter().enumerate() {
        let target = matrix.row_mut(row);
        if let Some(source) = vocab_a.index_of(word) {
            target[..left_cols].copy_from_slice(matrix_a.row(source));
        }
        if let Some(source) = vocab_b.index_of(word) {
            target[left_cols..].copy_from_slice(matrix_b.row(source));
        }
    }

    debug!(
        words = combined.len(),
        documents = matrix.cols(),
        "merged vocabulary pair"
    );
    Ok((combined, matrix))
}

fn check_pair(side: MergeSide, vocabulary: &Vocabulary, matrix: &FrequencyMatrix) -> Result<()> {
    if matrix.rows() != vocabulary.len() {
        return Err(Error::RowCountMismatch {
            side,
            words: vocabulary.len(),
            rows: matrix.rows(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vocabulary {
        Vocabulary::from_words(list.iter().copied())
    }

    #[test]
    fn test_row_count_mismatch_fails_before_merging() {
        let vocab_a = words(&["tony", "stark", "is", "ironman"]);
        let vocab_b = words(&["nat", "romanoff", "is", "blackwidow"]);

        let err = merge(
            &vocab_a,
            &vocab_b,
            &FrequencyMatrix::zeros(5, 3),
            &FrequencyMatrix::zeros(4, 2),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::RowCountMismatch {
                side: MergeSide::Left,
                words: 4,
                rows: 5
            }
        );

        let err = merge(
            &vocab_a,
            &vocab_b,
            &FrequencyMatrix::zeros(4, 3),
            &FrequencyMatrix::zeros(5, 2),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::RowCountMismatch {
                side: MergeSide::Right,
                words: 4,
                rows: 5
            }
        );
    }

    #[test]
    fn test_merge_joins_rosters() {
        let vocab_a = words(&[
            "quicksilver",
            "ironman",
            "thor",
            "captainamerica",
            "spiderman",
            "hawkeye",
            "scarlet",
        ]);
        let vocab_b = words(&["wolverine", "quicksilver", "beast", "cyclops", "phoenix"]);
        let matrix_a = FrequencyMatrix::from_rows(vec![
            vec![8, 10, 20],
            vec![1, 2, 11],
            vec![5, 0, 10],
            vec![0, 2, 1],
            vec![1, 1, 0],
            vec![20, 10, 8],
            vec![1, 1, 1],
        ])
        .unwrap();
        let matrix_b = FrequencyMatrix::from_rows(vec![
            vec![5, 3],
            vec![0, 2],
            vec![10, 1],
            vec![21, 23],
            vec![1, 0],
        ])
        .unwrap();

        let (vocabulary, matrix) = merge(&vocab_a, &vocab_b, &matrix_a, &matrix_b).unwrap();

        assert_eq!(vocabulary.len(), 11);
        assert_eq!(matrix.shape(), (11, 5));

        // Checked through the word-to-row mapping rather than row positions.
        let expected: [(&str, [u32; 5]); 11] = [
            ("quicksilver", [8, 10, 20, 0, 2]),
            ("ironman", [1, 2, 11, 0, 0]),
            ("thor", [5, 0, 10, 0, 0]),
            ("captainamerica", [0, 2, 1, 0, 0]),
            ("spiderman", [1, 1, 0, 0, 0]),
            ("hawkeye", [20, 10, 8, 0, 0]),
            ("scarlet", [1, 1, 1, 0, 0]),
            ("wolverine", [0, 0, 0, 5, 3]),
            ("beast", [0, 0, 0, 10, 1]),
            ("cyclops", [0, 0, 0, 21, 23]),
            ("phoenix", [0, 0, 0, 1, 0]),
        ];
        for (word, counts) in &expected {
            let row = vocabulary.index_of(word).unwrap();
            assert_eq!(matrix.row(row), *counts, "row for {word}");
        }
    }

    #[test]
    fn test_merge_with_empty_side() {
        let vocab_a = words(&["apple", "dog"]);
        let matrix_a = FrequencyMatrix::from_rows(vec![vec![1, 0, 2], vec![0, 3, 1]]).unwrap();

        let (vocabulary, matrix) = merge(
            &vocab_a,
            &Vocabulary::default(),
            &matrix_a,
            &FrequencyMatrix::zeros(0, 0),
        )
        .unwrap();
        assert_eq!(vocabulary.words(), ["apple", "dog"]);
        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix.row(0), [1, 0, 2]);
        assert_eq!(matrix.row(1), [0, 3, 1]);
    }

    #[test]
    fn test_merge_keeps_document_columns_in_side_order() {
        let vocab_a = words(&["shared"]);
        let vocab_b = words(&["shared"]);
        let matrix_a = FrequencyMatrix::from_rows(vec![vec![1, 2]]).unwrap();
        let matrix_b = FrequencyMatrix::from_rows(vec![vec![3]]).unwrap();

        let (vocabulary, matrix) = merge(&vocab_a, &vocab_b, &matrix_a, &matrix_b).unwrap();
        assert_eq!(vocabulary.words(), ["shared"]);
        assert_eq!(matrix.row(0), [1, 2, 3]);
    }
}
