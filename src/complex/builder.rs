//! Filtered 1-skeleton construction.

use ndarray::ArrayView1;

use crate::error::{Error, Result};

use super::CurveGroups;

/// An edge of the 1-skeleton with its filtration value.
///
/// Endpoints are stored with `a < b`; the value is the max of the
/// endpoint filtration values, never less than either of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub value: f64,
}

/// A filtered complex of vertices and edges for one (point set, center)
/// pair. Built fresh per center and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct FilteredComplex {
    vertex_values: Vec<f64>,
    edges: Vec<Edge>,
}

impl FilteredComplex {
    pub fn vertex_count(&self) -> usize {
        self.vertex_values.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Filtration value of vertex `i`.
    pub fn vertex_value(&self, i: usize) -> f64 {
        self.vertex_values[i]
    }

    pub fn vertex_values(&self) -> &[f64] {
        &self.vertex_values
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Build the filtered 1-skeleton for one center.
///
/// `filtration[i]` is the distance of point `i` to the center. Each
/// curve group with ordered indices `[i0 .. i(m-1)]` is closed into a
/// cycle by joining `ij` to `i((j+1) mod m)`. A two-point curve yields
/// one edge (both cycle steps name the same unordered pair); a
/// one-point curve cannot form a cycle and is rejected.
pub fn build_complex(
    filtration: ArrayView1<'_, f64>,
    groups: &CurveGroups,
) -> Result<FilteredComplex> {
    let n = filtration.len();
    if n == 0 {
        return Err(Error::InvalidInput("need at least 1 point".into()));
    }
    if groups.point_count() != n {
        return Err(Error::InvalidInput(format!(
            "curve groups cover {} indices but there are {} points",
            groups.point_count(),
            n
        )));
    }

    let vertex_values: Vec<f64> = filtration.iter().copied().collect();
    if vertex_values.iter().any(|v| !v.is_finite()) {
        return Err(Error::InvalidInput(
            "filtration values must be finite".into(),
        ));
    }

    let mut edges = Vec::new();
    for (curve_id, indices) in groups.iter() {
        let m = indices.len();
        if m < 2 {
            return Err(Error::InvalidInput(format!(
                "curve {curve_id} has {m} point(s); a closed curve needs at least 2"
            )));
        }
        // m == 2: the forward and the wrap-around step are the same
        // unordered pair, so emit it once.
        let steps = if m == 2 { 1 } else { m };
        for j in 0..steps {
            let v1 = indices[j];
            let v2 = indices[(j + 1) % m];
            if v1 >= n || v2 >= n {
                return Err(Error::InvalidInput(format!(
                    "curve {curve_id} references point index {} out of range 0..{n}",
                    v1.max(v2)
                )));
            }
            let (a, b) = if v1 < v2 { (v1, v2) } else { (v2, v1) };
            edges.push(Edge {
                a,
                b,
                value: vertex_values[a].max(vertex_values[b]),
            });
        }
    }

    Ok(FilteredComplex {
        vertex_values,
        edges,
    })
}
