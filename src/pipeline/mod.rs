//! Pipeline Module: Request Orchestration
//!
//! Drives the full chain — validation, distance computation, complex
//! construction, persistence, aggregation — once per request (single
//! mode) or once per center (vineyard mode).
//!
//! Vineyard centers are logically independent: every per-center branch
//! reads only its own row of the distance matrix plus the shared,
//! read-only curve groups and cap, so the loop fans out over a rayon
//! parallel iterator. Results are collected back in center order,
//! which keeps the concatenated buckets reproducible regardless of
//! scheduling. A failure in any branch aborts the whole request; no
//! partial vineyard results are returned.

use log::debug;
use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;

use crate::api::{
    CenterInput, PersistenceRequest, PersistenceResponse, PointInput, VineyardRequest,
    VineyardResponse,
};
use crate::complex::{build_complex, CurveGroups};
use crate::diagram::{
    aggregate_pairs, aggregate_vineyard, single_mode_cap, vineyard_cap, Diagrams, VineyardEntry,
};
use crate::error::{Error, Result};
use crate::geometry::{distances_to_center, distances_to_centers, Metric};
use crate::persistence::{ConeReduction, Diagram, ExtendedDiagrams, PersistenceEngine};

/// Minimum number of points for any request.
const MIN_POINTS: usize = 3;

/// The request orchestrator, generic over the persistence engine.
#[derive(Debug, Clone, Default)]
pub struct RadialPipeline<E = ConeReduction> {
    engine: E,
}

impl RadialPipeline<ConeReduction> {
    /// Pipeline with the default cone-reduction engine.
    pub fn new() -> Self {
        Self {
            engine: ConeReduction::new(),
        }
    }
}

impl<E: PersistenceEngine + Sync> RadialPipeline<E> {
    /// Pipeline with a caller-provided engine.
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Single-center mode: one diagram set plus the distance range.
    pub fn single(&self, request: &PersistenceRequest) -> Result<PersistenceResponse> {
        let (coords, groups) = prepare_points(&request.points)?;
        let metric = Metric::from_squared_flag(request.use_squared_distance);

        let distances = distances_to_center(
            coords.view(),
            [request.center.x, request.center.y],
            metric,
        )?;
        let r_min = distances.fold(f64::INFINITY, |a, &b| a.min(b));
        let r_max = distances.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let cap = single_mode_cap(r_max);
        debug!(
            "single-center request: n={} curves={} r_min={r_min:.6} r_max={r_max:.6}",
            request.points.len(),
            groups.curve_count()
        );

        let complex = build_complex(distances.view(), &groups)?;
        let diagrams = self.engine.compute(&complex)?;
        check_engine_contract(&diagrams)?;

        Ok(PersistenceResponse {
            diagrams: aggregate_pairs(&diagrams, cap),
            r_min,
            r_max,
        })
    }

    /// Vineyard mode: diagrams for every center, sharing one global
    /// cap computed up front from the whole distance matrix.
    pub fn vineyard(&self, request: &VineyardRequest) -> Result<VineyardResponse> {
        let (coords, groups) = prepare_points(&request.points)?;
        let metric = Metric::from_squared_flag(request.use_squared_distance);
        let centers = center_matrix(&request.centers);

        let matrix = distances_to_centers(coords.view(), centers.view(), metric)?;
        let global_max = matrix.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let cap = vineyard_cap(global_max);
        debug!(
            "vineyard request: n={} k={} curves={} cap={cap:.6}",
            request.points.len(),
            request.centers.len(),
            groups.curve_count()
        );

        let per_center: Vec<Diagrams<_>> = (0..matrix.nrows())
            .into_par_iter()
            .map(|ci| {
                self.diagrams_for_center(matrix.row(ci), &groups, cap, ci)
                    .map_err(|err| annotate_center(err, ci))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut diagrams = Diagrams::default();
        for mut bucket_set in per_center {
            diagrams.append(&mut bucket_set);
        }

        Ok(VineyardResponse {
            diagrams,
            infinity_y: cap,
        })
    }

    fn diagrams_for_center(
        &self,
        distances: ArrayView1<'_, f64>,
        groups: &CurveGroups,
        cap: f64,
        center_idx: usize,
    ) -> Result<Diagrams<VineyardEntry>> {
        let complex = build_complex(distances, groups)?;
        let diagrams = self.engine.compute(&complex)?;
        check_engine_contract(&diagrams)?;
        Ok(aggregate_vineyard(&diagrams, cap, center_idx))
    }
}

/// Validate the shared point set and derive coordinates plus curve
/// groups. Raised before any distance or persistence work.
fn prepare_points(points: &[PointInput]) -> Result<(Array2<f64>, CurveGroups)> {
    if points.len() < MIN_POINTS {
        return Err(Error::Validation("Need at least 3 points".into()));
    }
    let mut coords = Array2::<f64>::zeros((points.len(), 2));
    for (i, p) in points.iter().enumerate() {
        coords[[i, 0]] = p.x;
        coords[[i, 1]] = p.y;
    }
    let groups = CurveGroups::from_ids(points.iter().map(|p| p.curve_id));
    Ok((coords, groups))
}

fn center_matrix(centers: &[CenterInput]) -> Array2<f64> {
    let mut out = Array2::<f64>::zeros((centers.len(), 2));
    for (i, c) in centers.iter().enumerate() {
        out[[i, 0]] = c.x;
        out[[i, 1]] = c.y;
    }
    out
}

/// Record the failing center on computation errors so vineyard
/// failures stay diagnosable.
fn annotate_center(err: Error, center_idx: usize) -> Error {
    match err {
        Error::Computation { message, trace } => Error::Computation {
            message,
            trace: Some(match trace {
                Some(t) => format!("center {center_idx}: {t}"),
                None => format!("center {center_idx}"),
            }),
        },
        other => other,
    }
}

/// Enforce the engine contract from the integration seam: dimensions
/// 0/1 only, finite births, no NaNs, and infinite deaths only for
/// ordinary dimension-0 classes.
fn check_engine_contract(diagrams: &ExtendedDiagrams) -> Result<()> {
    for (diagram, class) in diagrams.iter() {
        if class.dimension > 1 {
            return Err(Error::computation(format!(
                "engine returned a dimension-{} class for a 1-skeleton",
                class.dimension
            )));
        }
        if class.birth.is_nan() || class.death.is_nan() || class.birth.is_infinite() {
            return Err(Error::computation(format!(
                "engine returned a malformed pair ({}, {})",
                class.birth, class.death
            )));
        }
        let infinite_allowed = diagram == Diagram::Ordinary && class.dimension == 0;
        if class.death.is_infinite() && !infinite_allowed {
            return Err(Error::computation(format!(
                "engine returned an infinite death outside ordinary dimension 0 \
                 (dimension {})",
                class.dimension
            )));
        }
    }
    Ok(())
}
