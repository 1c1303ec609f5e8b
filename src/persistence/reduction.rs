//! Sparse boundary-matrix reduction over Z/2.
//!
//! Standard persistence algorithm: process columns in filtration
//! order, repeatedly adding previously reduced columns with the same
//! low entry. A column that reduces to zero creates a class; a column
//! with a surviving low entry destroys the class created at that row.
//!
//! Reference: Edelsbrunner, Letscher, Zomorodian (2002), "Topological
//! Persistence and Simplification".

use std::collections::{BTreeMap, BTreeSet};

/// One column of the boundary matrix, stored as its non-zero rows.
#[derive(Debug, Clone, Default)]
pub(crate) struct SparseColumn {
    rows: BTreeSet<usize>,
}

impl SparseColumn {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Toggle a row: insert if absent, remove if present (addition of
    /// a basis element in Z/2).
    pub(crate) fn toggle(&mut self, row: usize) {
        if !self.rows.remove(&row) {
            self.rows.insert(row);
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest non-zero row index, the pivot candidate.
    pub(crate) fn low(&self) -> Option<usize> {
        self.rows.iter().next_back().copied()
    }

    /// Symmetric difference with another column (Z/2 addition).
    fn add_assign(&mut self, other: &SparseColumn) {
        for &row in &other.rows {
            self.toggle(row);
        }
    }
}

/// A (creator, destroyer) pair of filtration positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReducedPair {
    pub(crate) creator: usize,
    pub(crate) destroyer: usize,
}

/// Reduce the boundary matrix and extract all persistence pairs.
///
/// `boundaries[i]` is the boundary of the i-th simplex in filtration
/// order. Unpaired positions (columns that reduce to zero and whose
/// row never becomes a pivot) are the essential classes of the
/// complex; the caller decides what to do with them.
pub(crate) fn reduce(mut boundaries: Vec<SparseColumn>) -> Vec<ReducedPair> {
    let mut low_to_col: BTreeMap<usize, usize> = BTreeMap::new();
    let mut pairs = Vec::new();

    for col_idx in 0..boundaries.len() {
        // Reduce against earlier columns sharing the same low entry.
        loop {
            let Some(low) = boundaries[col_idx].low() else {
                break;
            };
            let Some(&pivot_col) = low_to_col.get(&low) else {
                break;
            };
            let (left, right) = boundaries.split_at_mut(col_idx);
            right[0].add_assign(&left[pivot_col]);
        }

        if let Some(low) = boundaries[col_idx].low() {
            low_to_col.insert(low, col_idx);
            pairs.push(ReducedPair {
                creator: low,
                destroyer: col_idx,
            });
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(rows: &[usize]) -> SparseColumn {
        let mut c = SparseColumn::new();
        for &r in rows {
            c.toggle(r);
        }
        c
    }

    #[test]
    fn toggle_is_z2_addition() {
        let mut c = SparseColumn::new();
        c.toggle(3);
        c.toggle(3);
        assert!(c.is_zero());
        c.toggle(1);
        c.toggle(5);
        assert_eq!(c.low(), Some(5));
    }

    #[test]
    fn path_graph_pairs_vertices_with_edges() {
        // Filtration: v0, v1, v2, e01, e12 (positions 0..5).
        let boundaries = vec![
            column(&[]),
            column(&[]),
            column(&[]),
            column(&[0, 1]),
            column(&[1, 2]),
        ];
        let pairs = reduce(boundaries);
        assert_eq!(
            pairs,
            vec![
                ReducedPair { creator: 1, destroyer: 3 },
                ReducedPair { creator: 2, destroyer: 4 },
            ]
        );
    }

    #[test]
    fn cycle_closing_edge_reduces_to_zero() {
        // Triangle boundary: v0, v1, v2, e01, e02, e12. The last edge
        // closes a loop, so its column must vanish and stay unpaired.
        let boundaries = vec![
            column(&[]),
            column(&[]),
            column(&[]),
            column(&[0, 1]),
            column(&[0, 2]),
            column(&[1, 2]),
        ];
        let pairs = reduce(boundaries);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.destroyer != 5));
    }
}
