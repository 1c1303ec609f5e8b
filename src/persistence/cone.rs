//! Extended persistence via the cone construction.
//!
//! The extended filtration of a filtered 1-skeleton K is built by
//! adding a cone vertex ω and sweeping twice:
//!
//! 1. ascending: the simplices of K in increasing filtration order;
//! 2. descending: for every vertex u the coned edge {u, ω} keyed by
//!    f(u), and for every edge {u, v} the coned triangle {u, v, ω}
//!    keyed by min(f(u), f(v)), both in *decreasing* key order.
//!
//! The cone is contractible, so boundary-matrix reduction pairs every
//! simplex except ω itself. Pairs are classified by which passes their
//! endpoints fall in:
//!
//! - ascending/ascending → Ordinary;
//! - descending/descending → Relative;
//! - ascending/descending → Extended (+ when birth ≤ death, the
//!   per-component (min, max) pairs; − otherwise, the loop pairs).
//!
//! On top of the extended pairing, each connected component's
//! essential class is also reported in the ordinary dimension-0
//! diagram with an infinite death, which the aggregator caps for
//! reporting. Zero-persistence pairs are kept, so every complex with
//! n vertices, e edges and c components yields exactly n + e + c
//! classes.

use std::collections::HashMap;

use crate::complex::FilteredComplex;
use crate::error::{Error, Result};

use super::reduction::{reduce, SparseColumn};
use super::{ExtendedDiagrams, PersistenceClass, PersistenceEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Ascending,
    Descending,
}

/// A simplex of the coned complex: sorted vertex ids (the cone vertex
/// is id n, so it always sorts last) plus its filtration key.
#[derive(Debug, Clone)]
struct ConeSimplex {
    vertices: Vec<usize>,
    key: f64,
    pass: Pass,
}

impl ConeSimplex {
    fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }
}

/// Default persistence engine: cone construction + sparse Z/2
/// boundary-matrix reduction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConeReduction;

impl ConeReduction {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the coned complex in filtration order.
    fn filtration_order(complex: &FilteredComplex) -> Vec<ConeSimplex> {
        let n = complex.vertex_count();
        let cone = n;

        let mut ascending: Vec<ConeSimplex> = Vec::with_capacity(n + complex.edge_count());
        for i in 0..n {
            ascending.push(ConeSimplex {
                vertices: vec![i],
                key: complex.vertex_value(i),
                pass: Pass::Ascending,
            });
        }
        for e in complex.edges() {
            ascending.push(ConeSimplex {
                vertices: vec![e.a, e.b],
                key: e.value,
                pass: Pass::Ascending,
            });
        }
        ascending.sort_by(|x, y| {
            x.key
                .total_cmp(&y.key)
                .then(x.vertices.len().cmp(&y.vertices.len()))
                .then(x.vertices.cmp(&y.vertices))
        });

        let mut descending: Vec<ConeSimplex> = Vec::with_capacity(n + complex.edge_count());
        for i in 0..n {
            descending.push(ConeSimplex {
                vertices: vec![i, cone],
                key: complex.vertex_value(i),
                pass: Pass::Descending,
            });
        }
        for e in complex.edges() {
            descending.push(ConeSimplex {
                vertices: vec![e.a, e.b, cone],
                key: complex.vertex_value(e.a).min(complex.vertex_value(e.b)),
                pass: Pass::Descending,
            });
        }
        // Decreasing key; at equal keys coned edges precede the coned
        // triangles they bound.
        descending.sort_by(|x, y| {
            y.key
                .total_cmp(&x.key)
                .then(x.vertices.len().cmp(&y.vertices.len()))
                .then(x.vertices.cmp(&y.vertices))
        });

        let mut order = Vec::with_capacity(1 + ascending.len() + descending.len());
        order.push(ConeSimplex {
            vertices: vec![cone],
            key: f64::NEG_INFINITY,
            pass: Pass::Descending,
        });
        order.extend(ascending);
        order.extend(descending);
        order
    }

    /// Boundary columns for the ordered coned complex.
    fn boundaries(order: &[ConeSimplex]) -> Result<Vec<SparseColumn>> {
        let mut position: HashMap<&[usize], usize> = HashMap::with_capacity(order.len());
        for (idx, s) in order.iter().enumerate() {
            position.insert(s.vertices.as_slice(), idx);
        }

        let mut columns = Vec::with_capacity(order.len());
        for s in order {
            let mut column = SparseColumn::new();
            if s.dimension() > 0 {
                for omit in 0..s.vertices.len() {
                    let mut face = s.vertices.clone();
                    face.remove(omit);
                    let &face_idx = position.get(face.as_slice()).ok_or_else(|| {
                        Error::computation(format!(
                            "face {face:?} of simplex {:?} missing from filtration",
                            s.vertices
                        ))
                    })?;
                    column.toggle(face_idx);
                }
            }
            columns.push(column);
        }
        Ok(columns)
    }
}

impl PersistenceEngine for ConeReduction {
    fn compute(&self, complex: &FilteredComplex) -> Result<ExtendedDiagrams> {
        if complex.vertex_count() == 0 {
            return Err(Error::InvalidInput(
                "cannot compute persistence of an empty complex".into(),
            ));
        }

        let order = Self::filtration_order(complex);
        let columns = Self::boundaries(&order)?;
        let pairs = reduce(columns);

        let mut diagrams = ExtendedDiagrams::default();
        let mut essential_births: Vec<f64> = Vec::new();

        for pair in pairs {
            let creator = &order[pair.creator];
            let destroyer = &order[pair.destroyer];
            let dimension = creator.dimension();
            let (birth, death) = (creator.key, destroyer.key);

            let class = PersistenceClass {
                dimension,
                birth,
                death,
            };
            match (creator.pass, destroyer.pass) {
                (Pass::Ascending, Pass::Ascending) => diagrams.ordinary.push(class),
                (Pass::Descending, Pass::Descending) => diagrams.relative.push(class),
                (Pass::Ascending, Pass::Descending) => {
                    if dimension == 0 {
                        essential_births.push(birth);
                    }
                    if birth <= death {
                        diagrams.extended_plus.push(class);
                    } else {
                        diagrams.extended_minus.push(class);
                    }
                }
                (Pass::Descending, Pass::Ascending) => {
                    return Err(Error::computation(
                        "descending simplex destroyed by ascending one; \
                         the extended filtration order is broken",
                    ));
                }
            }
        }

        // One essential class per connected component, reported in the
        // ordinary dimension-0 diagram with an infinite death. The
        // aggregator replaces the infinity with the reporting cap.
        for birth in essential_births {
            diagrams.ordinary.push(PersistenceClass {
                dimension: 0,
                birth,
                death: f64::INFINITY,
            });
        }

        Ok(diagrams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{build_complex, CurveGroups};
    use ndarray::array;

    fn single_cycle(values: &[f64]) -> FilteredComplex {
        let f = ndarray::Array1::from(values.to_vec());
        build_complex(f.view(), &CurveGroups::single_curve(values.len())).unwrap()
    }

    #[test]
    fn four_cycle_with_distinct_values() {
        // Cycle 0-1-2-3-0 with f = [1, 2, 3, 4].
        let complex = single_cycle(&[1.0, 2.0, 3.0, 4.0]);
        let d = ConeReduction::new().compute(&complex).unwrap();

        // n + e + c classes, none dropped.
        assert_eq!(d.class_count(), 4 + 4 + 1);

        // Ordinary dim 0: three merges plus the essential class.
        let finite: Vec<(f64, f64)> = d
            .ordinary
            .iter()
            .filter(|c| !c.is_essential())
            .map(|c| (c.birth, c.death))
            .collect();
        assert_eq!(finite, vec![(2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);

        let essential: Vec<&PersistenceClass> =
            d.ordinary.iter().filter(|c| c.is_essential()).collect();
        assert_eq!(essential.len(), 1);
        assert_eq!(essential[0].dimension, 0);
        assert_eq!(essential[0].birth, 1.0);

        // Extended+: the component spans its min and max.
        assert_eq!(d.extended_plus.len(), 1);
        let comp = d.extended_plus[0];
        assert_eq!((comp.dimension, comp.birth, comp.death), (0, 1.0, 4.0));

        // Extended−: the loop forms at the last ascending edge and is
        // paired at the cycle minimum on the way down.
        assert_eq!(d.extended_minus.len(), 1);
        let loop_class = d.extended_minus[0];
        assert_eq!(
            (loop_class.dimension, loop_class.birth, loop_class.death),
            (1, 4.0, 1.0)
        );

        // Relative dim 1: descending merges, births above deaths.
        assert_eq!(d.relative.len(), 3);
        for c in &d.relative {
            assert_eq!(c.dimension, 1);
            assert!(c.birth >= c.death);
        }
    }

    #[test]
    fn equal_values_keep_zero_persistence_pairs() {
        // Equilateral configuration: every simplex at the same value.
        let complex = single_cycle(&[2.0, 2.0, 2.0]);
        let d = ConeReduction::new().compute(&complex).unwrap();

        assert_eq!(d.class_count(), 3 + 3 + 1);

        // Exactly one infinite class, in ordinary dim 0, born at 2.
        let infinite: Vec<&PersistenceClass> =
            d.iter().map(|(_, c)| c).filter(|c| c.is_essential()).collect();
        assert_eq!(infinite.len(), 1);
        assert_eq!((infinite[0].dimension, infinite[0].birth), (0, 2.0));

        // Exactly one extended dim-1 class (the triangle's loop),
        // born and paired at 2.
        let loops: Vec<&PersistenceClass> = d
            .extended_plus
            .iter()
            .chain(d.extended_minus.iter())
            .filter(|c| c.dimension == 1)
            .collect();
        assert_eq!(loops.len(), 1);
        assert_eq!((loops[0].birth, loops[0].death), (2.0, 2.0));

        // No infinite dim-1 class anywhere.
        assert!(d.iter().all(|(_, c)| c.dimension == 0 || !c.is_essential()));
    }

    #[test]
    fn two_components_two_loops() {
        // Two disjoint triangles with different value ranges.
        let f = array![1.0, 2.0, 3.0, 10.0, 11.0, 12.0];
        let groups = CurveGroups::from_ids([0, 0, 0, 1, 1, 1]);
        let complex = build_complex(f.view(), &groups).unwrap();
        let d = ConeReduction::new().compute(&complex).unwrap();

        assert_eq!(d.class_count(), 6 + 6 + 2);

        // One essential component class each.
        let essential: Vec<f64> = d
            .ordinary
            .iter()
            .filter(|c| c.is_essential())
            .map(|c| c.birth)
            .collect();
        assert_eq!(essential.len(), 2);
        assert!(essential.contains(&1.0));
        assert!(essential.contains(&10.0));

        // Extended+ spans each component's own range; nothing crosses.
        let mut spans: Vec<(f64, f64)> = d
            .extended_plus
            .iter()
            .filter(|c| c.dimension == 0)
            .map(|c| (c.birth, c.death))
            .collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));
        assert_eq!(spans, vec![(1.0, 3.0), (10.0, 12.0)]);

        // One loop per curve.
        let loops: Vec<&PersistenceClass> = d
            .extended_minus
            .iter()
            .chain(d.extended_plus.iter())
            .filter(|c| c.dimension == 1)
            .collect();
        assert_eq!(loops.len(), 2);
    }

    #[test]
    fn engine_is_pure() {
        let complex = single_cycle(&[3.0, 1.0, 4.0, 1.5, 5.0]);
        let engine = ConeReduction::new();
        let a = engine.compute(&complex).unwrap();
        let b = engine.compute(&complex).unwrap();
        let pairs = |d: &ExtendedDiagrams| {
            d.iter()
                .map(|(_, c)| (c.dimension, c.birth, c.death))
                .collect::<Vec<_>>()
        };
        assert_eq!(pairs(&a), pairs(&b));
    }
}
