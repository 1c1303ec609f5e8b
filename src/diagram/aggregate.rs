//! Six-bucket aggregation of extended persistence classes.

use serde::{Deserialize, Serialize};

use crate::persistence::{Diagram, ExtendedDiagrams};

/// Cap scale for single-center requests, applied to that request's
/// own `r_max`.
pub const SINGLE_MODE_CAP_SCALE: f64 = 1.5;

/// Cap scale for vineyard requests, applied to the global maximum of
/// the whole distance matrix and shared across every center.
pub const VINEYARD_CAP_SCALE: f64 = 1.15;

/// Reporting cap for a single-center request.
pub fn single_mode_cap(r_max: f64) -> f64 {
    r_max * SINGLE_MODE_CAP_SCALE
}

/// Shared reporting cap for a vineyard request.
pub fn vineyard_cap(global_max_distance: f64) -> f64 {
    global_max_distance * VINEYARD_CAP_SCALE
}

/// Coarse class kind carried by vineyard entries: the +/− extended
/// distinction is already collapsed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairKind {
    #[serde(rename = "ord")]
    Ordinary,
    #[serde(rename = "rel")]
    Relative,
    #[serde(rename = "ext")]
    Extended,
}

impl From<Diagram> for PairKind {
    fn from(d: Diagram) -> Self {
        match d {
            Diagram::Ordinary => PairKind::Ordinary,
            Diagram::Relative => PairKind::Relative,
            Diagram::ExtendedPlus | Diagram::ExtendedMinus => PairKind::Extended,
        }
    }
}

/// The six reporting buckets. `T` is `[f64; 2]` for single-center
/// responses and [`VineyardEntry`] for vineyard responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagrams<T> {
    pub ord0: Vec<T>,
    pub ord1: Vec<T>,
    pub rel0: Vec<T>,
    pub rel1: Vec<T>,
    pub ext0: Vec<T>,
    pub ext1: Vec<T>,
}

// Not derived: the derive would demand `T: Default`, which entry
// types have no reason to implement.
impl<T> Default for Diagrams<T> {
    fn default() -> Self {
        Self {
            ord0: Vec::new(),
            ord1: Vec::new(),
            rel0: Vec::new(),
            rel1: Vec::new(),
            ext0: Vec::new(),
            ext1: Vec::new(),
        }
    }
}

impl<T> Diagrams<T> {
    pub fn bucket(&self, kind: PairKind, dimension: usize) -> &Vec<T> {
        match (kind, dimension) {
            (PairKind::Ordinary, 0) => &self.ord0,
            (PairKind::Ordinary, _) => &self.ord1,
            (PairKind::Relative, 0) => &self.rel0,
            (PairKind::Relative, _) => &self.rel1,
            (PairKind::Extended, 0) => &self.ext0,
            (PairKind::Extended, _) => &self.ext1,
        }
    }

    fn bucket_mut(&mut self, kind: PairKind, dimension: usize) -> &mut Vec<T> {
        match (kind, dimension) {
            (PairKind::Ordinary, 0) => &mut self.ord0,
            (PairKind::Ordinary, _) => &mut self.ord1,
            (PairKind::Relative, 0) => &mut self.rel0,
            (PairKind::Relative, _) => &mut self.rel1,
            (PairKind::Extended, 0) => &mut self.ext0,
            (PairKind::Extended, _) => &mut self.ext1,
        }
    }

    /// Total entries across all six buckets.
    pub fn len(&self) -> usize {
        self.ord0.len()
            + self.ord1.len()
            + self.rel0.len()
            + self.rel1.len()
            + self.ext0.len()
            + self.ext1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move every entry of `other` onto the end of the matching
    /// buckets, preserving order.
    pub fn append(&mut self, other: &mut Diagrams<T>) {
        self.ord0.append(&mut other.ord0);
        self.ord1.append(&mut other.ord1);
        self.rel0.append(&mut other.rel0);
        self.rel1.append(&mut other.rel1);
        self.ext0.append(&mut other.ext0);
        self.ext1.append(&mut other.ext1);
    }
}

/// One vineyard diagram entry, tagged with the center that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VineyardEntry {
    pub birth: f64,
    /// Capped at the shared vineyard cap when `is_infinite` is set.
    pub death: f64,
    #[serde(rename = "centerIdx")]
    pub center_idx: usize,
    #[serde(rename = "isInfinite")]
    pub is_infinite: bool,
    #[serde(rename = "type")]
    pub kind: PairKind,
}

/// Classify engine output into `[birth, death]` buckets for a
/// single-center response, replacing infinite deaths with `cap`.
pub fn aggregate_pairs(diagrams: &ExtendedDiagrams, cap: f64) -> Diagrams<[f64; 2]> {
    let mut out = Diagrams::default();
    for (diagram, class) in diagrams.iter() {
        let death = if class.death.is_infinite() {
            cap
        } else {
            class.death
        };
        out.bucket_mut(diagram.into(), class.dimension)
            .push([class.birth, death]);
    }
    out
}

/// Classify engine output into tagged vineyard entries for center
/// `center_idx`, using the shared vineyard cap.
pub fn aggregate_vineyard(
    diagrams: &ExtendedDiagrams,
    cap: f64,
    center_idx: usize,
) -> Diagrams<VineyardEntry> {
    let mut out = Diagrams::default();
    for (diagram, class) in diagrams.iter() {
        let kind = PairKind::from(diagram);
        let is_infinite = class.death.is_infinite();
        out.bucket_mut(kind, class.dimension).push(VineyardEntry {
            birth: class.birth,
            death: if is_infinite { cap } else { class.death },
            center_idx,
            is_infinite,
            kind,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::PersistenceClass;

    fn sample_diagrams() -> ExtendedDiagrams {
        let class = |dimension, birth, death| PersistenceClass {
            dimension,
            birth,
            death,
        };
        ExtendedDiagrams {
            ordinary: vec![
                class(0, 1.0, 2.0),
                class(0, 1.0, f64::INFINITY),
            ],
            relative: vec![class(1, 5.0, 3.0)],
            extended_plus: vec![class(0, 1.0, 6.0)],
            extended_minus: vec![class(1, 6.0, 1.0)],
        }
    }

    #[test]
    fn classes_route_to_their_buckets() {
        let d = sample_diagrams();
        let out = aggregate_pairs(&d, 9.0);

        assert_eq!(out.ord0.len(), 2);
        assert!(out.ord1.is_empty());
        assert!(out.rel0.is_empty());
        assert_eq!(out.rel1, vec![[5.0, 3.0]]);
        assert_eq!(out.ext0, vec![[1.0, 6.0]]);
        assert_eq!(out.ext1, vec![[6.0, 1.0]]);

        // Nothing dropped, nothing duplicated.
        assert_eq!(out.len(), d.class_count());
    }

    #[test]
    fn infinite_deaths_are_capped_and_flagged() {
        let d = sample_diagrams();
        let cap = 9.0;
        let out = aggregate_vineyard(&d, cap, 4);

        for bucket in [&out.ord0, &out.ord1, &out.rel0, &out.rel1, &out.ext0, &out.ext1] {
            for entry in bucket {
                assert!(entry.death <= cap);
                assert_eq!(entry.is_infinite, entry.death == cap, "{entry:?}");
                assert_eq!(entry.center_idx, 4);
            }
        }

        let flagged: Vec<&VineyardEntry> =
            out.ord0.iter().filter(|e| e.is_infinite).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].death, cap);
    }

    #[test]
    fn vineyard_entries_carry_collapsed_kind() {
        let d = sample_diagrams();
        let out = aggregate_vineyard(&d, 9.0, 0);
        assert!(out.ord0.iter().all(|e| e.kind == PairKind::Ordinary));
        assert!(out.rel1.iter().all(|e| e.kind == PairKind::Relative));
        assert!(out.ext0.iter().all(|e| e.kind == PairKind::Extended));
        assert!(out.ext1.iter().all(|e| e.kind == PairKind::Extended));
    }

    #[test]
    fn cap_formulas_stay_distinct() {
        assert_eq!(single_mode_cap(2.0), 3.0);
        assert!((vineyard_cap(2.0) - 2.3).abs() < 1e-12);
        assert!(single_mode_cap(1.0) != vineyard_cap(1.0));
    }

    #[test]
    fn append_preserves_order() {
        let d = sample_diagrams();
        let mut a = aggregate_vineyard(&d, 9.0, 0);
        let mut b = aggregate_vineyard(&d, 9.0, 1);
        a.append(&mut b);
        assert_eq!(a.ord0.len(), 4);
        assert_eq!(a.ord0[0].center_idx, 0);
        assert_eq!(a.ord0[2].center_idx, 1);
        assert!(b.is_empty());
    }
}
