//! Diagram Module: Bucket Classification and Infinity Capping
//!
//! Normalizes engine output into the six reporting buckets
//! (`ord0/ord1/rel0/rel1/ext0/ext1`): ordinary and relative classes
//! split by dimension, the two extended diagrams collapsed into one
//! pair of buckets (the +/− sign is recoverable from the pair itself,
//! birth ≤ death ⇔ +).
//!
//! Infinite deaths are replaced by a deterministic reporting cap and
//! flagged. The cap deliberately differs by mode:
//!
//! - single-center: `1.5 × r_max` of that request's distances;
//! - vineyard: `1.15 × max` over the whole k×n distance matrix,
//!   computed once and shared by every center's diagrams.
//!
//! Pure transformations throughout; bucket order follows engine order
//! and is reproducible.

mod aggregate;

pub use aggregate::{
    aggregate_pairs, aggregate_vineyard, single_mode_cap, vineyard_cap, Diagrams, PairKind,
    VineyardEntry, SINGLE_MODE_CAP_SCALE, VINEYARD_CAP_SCALE,
};
