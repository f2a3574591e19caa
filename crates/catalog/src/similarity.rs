//! Precomputed item-to-item similarity matrix.

use crate::error::{CatalogError, Result};
use crate::types::OrdinalId;

/// Square matrix of similarity scores, indexed by ordinal id.
///
/// Symmetric in practice but not enforced. Row `i`, column `i` is
/// self-similarity and is never reported by [`SimilarityMatrix::scores_for`].
/// Immutable after load.
#[derive(Debug)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    /// Validate and wrap a raw matrix.
    ///
    /// `expected` is the catalog size the matrix must agree with. Every row
    /// must be fully populated; a short or long row is rejected rather than
    /// treated as missing entries.
    pub fn new(rows: Vec<Vec<f32>>, expected: usize) -> Result<Self> {
        if rows.len() != expected {
            return Err(CatalogError::DimensionMismatch {
                movies: expected,
                rows: rows.len(),
            });
        }
        for (row, scores) in rows.iter().enumerate() {
            if scores.len() != expected {
                return Err(CatalogError::RowLengthMismatch {
                    row,
                    expected,
                    found: scores.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Similarity scores between `ordinal_id` and every other item.
    ///
    /// The query item itself is excluded. Callers must pass an id from the
    /// catalog this matrix was validated against.
    pub fn scores_for(&self, ordinal_id: OrdinalId) -> Vec<(OrdinalId, f32)> {
        self.rows[ordinal_id]
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != ordinal_id)
            .map(|(other, &score)| (other, score))
            .collect()
    }

    /// Number of items covered by the matrix
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_row_count_mismatch() {
        let err = SimilarityMatrix::new(vec![vec![1.0, 0.5], vec![0.5, 1.0]], 3).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DimensionMismatch { movies: 3, rows: 2 }
        ));
    }

    #[test]
    fn test_rejects_underpopulated_row() {
        let rows = vec![vec![1.0, 0.5, 0.1], vec![0.5, 1.0], vec![0.1, 0.2, 1.0]];
        let err = SimilarityMatrix::new(rows, 3).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::RowLengthMismatch {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_scores_for_excludes_self() {
        let rows = vec![
            vec![1.0, 0.9, 0.1],
            vec![0.9, 1.0, 0.4],
            vec![0.1, 0.4, 1.0],
        ];
        let matrix = SimilarityMatrix::new(rows, 3).unwrap();

        let scores = matrix.scores_for(1);
        assert_eq!(scores, vec![(0, 0.9), (2, 0.4)]);
    }

    #[test]
    fn test_scores_for_covers_every_other_item() {
        let n = 6;
        let rows: Vec<Vec<f32>> = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.2 }).collect())
            .collect();
        let matrix = SimilarityMatrix::new(rows, n).unwrap();

        let scores = matrix.scores_for(3);
        assert_eq!(scores.len(), n - 1);
        assert!(scores.iter().all(|(id, _)| *id != 3));
    }
}
