//! Vectorized distance kernels over `ndarray` views.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Distance metric used as the radial filtration function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Squared Euclidean distance (default; no square root per point).
    #[default]
    Squared,
    /// Euclidean distance.
    Euclidean,
}

impl Metric {
    /// Metric implied by the wire-level `use_squared_distance` flag.
    pub fn from_squared_flag(use_squared: bool) -> Self {
        if use_squared {
            Metric::Squared
        } else {
            Metric::Euclidean
        }
    }
}

fn check_coords(coords: &ArrayView2<'_, f64>, what: &str) -> Result<()> {
    if coords.nrows() == 0 {
        return Err(Error::InvalidInput(format!("need at least 1 {what}")));
    }
    if coords.ncols() != 2 {
        return Err(Error::InvalidInput(format!(
            "{what} coordinates must be planar (got {} columns)",
            coords.ncols()
        )));
    }
    if coords.iter().any(|v| !v.is_finite()) {
        return Err(Error::InvalidInput(format!(
            "{what} coordinates must be finite"
        )));
    }
    Ok(())
}

/// Distances from every point to a single center.
///
/// `coords` is n×2. Returns an n-vector of non-negative values in the
/// chosen metric.
pub fn distances_to_center(
    coords: ArrayView2<'_, f64>,
    center: [f64; 2],
    metric: Metric,
) -> Result<Array1<f64>> {
    check_coords(&coords, "point")?;
    if !center[0].is_finite() || !center[1].is_finite() {
        return Err(Error::InvalidInput("center coordinates must be finite".into()));
    }

    let sq = coords
        .rows()
        .into_iter()
        .map(|p| {
            let dx = p[0] - center[0];
            let dy = p[1] - center[1];
            dx * dx + dy * dy
        })
        .collect::<Array1<f64>>();

    Ok(match metric {
        Metric::Squared => sq,
        Metric::Euclidean => sq.mapv(f64::sqrt),
    })
}

/// Distances from every point to every center, batched.
///
/// `coords` is n×2, `centers` is k×2; the result is k×n with row `ci`
/// holding the distances for center `ci`. The whole matrix is produced
/// in one broadcasted pass rather than k independent ones; this is a
/// performance choice only, the values match [`distances_to_center`]
/// row by row.
pub fn distances_to_centers(
    coords: ArrayView2<'_, f64>,
    centers: ArrayView2<'_, f64>,
    metric: Metric,
) -> Result<Array2<f64>> {
    check_coords(&coords, "point")?;
    check_coords(&centers, "center")?;

    // (k, n, 2) difference tensor via broadcasting, then reduce over
    // the coordinate axis.
    let k = centers.nrows();
    let n = coords.nrows();
    let pts = coords.insert_axis(Axis(0));
    let pts = pts
        .broadcast((k, n, 2))
        .ok_or_else(|| Error::InvalidInput("point/center shapes do not broadcast".into()))?;
    let cts = centers.insert_axis(Axis(1));
    let diff = &pts - &cts;
    let sq = diff.mapv(|v| v * v).sum_axis(Axis(2));

    Ok(match metric {
        Metric::Squared => sq,
        Metric::Euclidean => sq.mapv(f64::sqrt),
    })
}
