//! Complex Module: Filtered 1-Skeletons from Closed Curves
//!
//! Turns per-point filtration values plus curve membership into a
//! filtered simplicial complex of dimension ≤ 1:
//!
//! - every point becomes a vertex with filtration value equal to its
//!   radial distance;
//! - every curve becomes a closed cycle: consecutive points (in the
//!   caller-provided order, which defines connectivity — not spatial
//!   adjacency) are joined, including last back to first;
//! - every edge carries `max(endpoint values)`, so faces never appear
//!   after their cofaces and the filtration ordering is valid.
//!
//! Curves never share edges; the complex is immutable once built.

mod builder;
mod groups;

pub use builder::{build_complex, Edge, FilteredComplex};
pub use groups::CurveGroups;
