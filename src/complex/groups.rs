//! Order-preserving grouping of point indices by curve id.

use std::collections::HashMap;

/// Mapping `curveId → ordered point indices`, iterated in first-seen
/// curve order. Built in one pass; partitions all point indices.
#[derive(Debug, Clone, Default)]
pub struct CurveGroups {
    groups: Vec<(u32, Vec<usize>)>,
}

impl CurveGroups {
    /// Group point indices by curve id, preserving both the order of
    /// points within a curve and the order in which curves first
    /// appear.
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        let mut groups: Vec<(u32, Vec<usize>)> = Vec::new();
        let mut slot: HashMap<u32, usize> = HashMap::new();

        for (index, id) in ids.into_iter().enumerate() {
            match slot.get(&id) {
                Some(&g) => groups[g].1.push(index),
                None => {
                    slot.insert(id, groups.len());
                    groups.push((id, vec![index]));
                }
            }
        }

        Self { groups }
    }

    /// All `n` points on one implicit curve (id 0).
    pub fn single_curve(n: usize) -> Self {
        Self {
            groups: vec![(0, (0..n).collect())],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct curves.
    pub fn curve_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of grouped point indices.
    pub fn point_count(&self) -> usize {
        self.groups.iter().map(|(_, idx)| idx.len()).sum()
    }

    /// Iterate `(curve_id, indices)` in first-seen curve order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[usize])> {
        self.groups.iter().map(|(id, idx)| (*id, idx.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_order_is_preserved() {
        // Curve 7 appears before curve 0; interleaved membership.
        let groups = CurveGroups::from_ids([7, 0, 7, 0, 3]);
        let collected: Vec<(u32, Vec<usize>)> = groups
            .iter()
            .map(|(id, idx)| (id, idx.to_vec()))
            .collect();
        assert_eq!(
            collected,
            vec![(7, vec![0, 2]), (0, vec![1, 3]), (3, vec![4])]
        );
    }

    #[test]
    fn groups_partition_all_indices() {
        let groups = CurveGroups::from_ids([1, 2, 1, 2, 2, 9]);
        assert_eq!(groups.point_count(), 6);
        assert_eq!(groups.curve_count(), 3);
        let mut seen: Vec<usize> = groups.iter().flat_map(|(_, idx)| idx.to_vec()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn single_curve_covers_range() {
        let groups = CurveGroups::single_curve(4);
        assert_eq!(groups.curve_count(), 1);
        let (id, idx) = groups.iter().next().unwrap();
        assert_eq!(id, 0);
        assert_eq!(idx, &[0, 1, 2, 3]);
    }
}
