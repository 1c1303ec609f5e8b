//! # radial-persistence
//!
//! Extended persistence of radial filtrations on closed planar curves,
//! with vineyard sweeps over moving centers.
//!
//! ## What it computes
//!
//! Given one or more closed curves sampled as ordered point lists and a
//! query center, the crate builds the radial sublevel-set filtration —
//! every vertex enters at its distance to the center, every curve edge
//! at the max of its endpoints — and computes extended persistence of
//! the resulting 1-skeleton. The output is a birth/death summary of how
//! the curves' connected components and loops are arranged around the
//! center.
//!
//! In vineyard mode the same point set is swept against many centers at
//! once: distances are computed as one batched k×n matrix, every center
//! gets its own diagram set, and all diagrams share a single global
//! infinity cap so they can be plotted on one axis.
//!
//! ## Pipeline
//!
//! 1. [`geometry`] — vectorized radial distances (squared Euclidean by
//!    default, plain Euclidean on request)
//! 2. [`complex`] — curve grouping and filtered 1-skeleton construction
//! 3. [`persistence`] — the engine seam plus the default cone-reduction
//!    implementation of extended persistence
//! 4. [`diagram`] — six-bucket classification and infinity capping
//! 5. [`pipeline`] — request orchestration, single and vineyard modes
//!
//! Requests are independent: no state survives a call, and vineyard
//! centers are processed in parallel over read-only shared inputs.
//!
//! ## Example
//!
//! ```
//! use radial_persistence::{CenterInput, PersistenceRequest, PointInput, RadialPipeline};
//!
//! let h = 3.0_f64.sqrt() / 2.0;
//! let request = PersistenceRequest {
//!     center: CenterInput { x: 0.0, y: 0.0 },
//!     points: vec![
//!         PointInput { x: 1.0, y: 0.0, curve_id: 0 },
//!         PointInput { x: -0.5, y: h, curve_id: 0 },
//!         PointInput { x: -0.5, y: -h, curve_id: 0 },
//!     ],
//!     use_squared_distance: true,
//! };
//!
//! let response = RadialPipeline::new().single(&request).unwrap();
//! assert!((response.r_max - 1.0).abs() < 1e-12);
//! assert_eq!(response.diagrams.ext1.len(), 1); // the triangle's loop
//! ```
//!
//! ## References
//!
//! - Cohen-Steiner, Edelsbrunner, Harer, "Extending Persistence Using
//!   Poincaré and Lefschetz Duality" (2009)
//! - Edelsbrunner, Letscher, Zomorodian, "Topological Persistence and
//!   Simplification" (2002)
//! - Cohen-Steiner, Edelsbrunner, Morozov, "Vines and Vineyards by
//!   Updating Persistence in Linear Time" (2006)

pub mod api;
pub mod complex;
pub mod diagram;
pub mod error;
pub mod geometry;
pub mod persistence;
pub mod pipeline;

// Re-exports from api
pub use api::{
    CenterInput, ErrorResponse, PersistenceRequest, PersistenceResponse, PointInput,
    VineyardRequest, VineyardResponse,
};

// Re-exports from complex
pub use complex::{build_complex, CurveGroups, FilteredComplex};

// Re-exports from diagram
pub use diagram::{Diagrams, PairKind, VineyardEntry};

// Re-exports from error
pub use error::{Error, Result};

// Re-exports from geometry
pub use geometry::Metric;

// Re-exports from persistence
pub use persistence::{ConeReduction, ExtendedDiagrams, PersistenceClass, PersistenceEngine};

// Re-exports from pipeline
pub use pipeline::RadialPipeline;
