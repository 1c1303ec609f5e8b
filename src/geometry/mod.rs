//! Geometry Module: Radial Distance Computation
//!
//! Computes the filtration function of the radial sublevel-set
//! filtration: the distance from every sample point to a query center.
//! Single-center mode produces an n-vector; vineyard mode produces the
//! full k×n matrix for k centers in one broadcasted pass.
//!
//! Squared Euclidean distance is the default metric. It is a monotone
//! transform of the true distance, so the filtration *ordering* (all
//! that persistence cares about) is identical, while the per-point
//! square root is avoided. The reported birth/death values do depend on
//! the choice, so the metric is threaded through to the caller.

mod distance;

pub use distance::{distances_to_center, distances_to_centers, Metric};
