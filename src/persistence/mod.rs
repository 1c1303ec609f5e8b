//! Persistence Module: Extended Persistence of Filtered 1-Skeletons
//!
//! Defines the engine seam the pipeline computes through, plus the
//! default implementation.
//!
//! ## Extended persistence
//!
//! Ordinary sublevel persistence of a function on a graph leaves every
//! loop — and one component class per connected component — alive
//! forever. The extended construction (Cohen-Steiner, Edelsbrunner,
//! Harer) pairs those essential classes against a descending pass,
//! yielding four diagrams: Ordinary, Relative, Extended+ and Extended−.
//!
//! ## Engine contract
//!
//! [`PersistenceEngine::compute`] maps a [`FilteredComplex`] to
//! [`ExtendedDiagrams`]. All births are finite; the only legitimate
//! infinite deaths are the per-component essential classes in the
//! ordinary dimension-0 diagram (the caller caps those for reporting).
//! Dimension-1 classes are always finite: every loop of a closed curve
//! is paired by the descending pass.
//!
//! The default engine is [`ConeReduction`], which builds the extended
//! filtration by coning the complex and runs sparse boundary-matrix
//! reduction over Z/2 (the standard algorithm).

mod cone;
mod reduction;

pub use cone::ConeReduction;

use crate::complex::FilteredComplex;
use crate::error::Result;

/// One persistence class: a topological feature with its birth and
/// death filtration values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistenceClass {
    /// 0 for connected components, 1 for loops.
    pub dimension: usize,
    pub birth: f64,
    /// `f64::INFINITY` for essential ordinary dimension-0 classes.
    pub death: f64,
}

impl PersistenceClass {
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }
}

/// The four diagrams of the extended persistence construction.
#[derive(Debug, Clone, Default)]
pub struct ExtendedDiagrams {
    /// Ascending-pass pairs; includes the essential dimension-0 class
    /// of each connected component with an infinite death.
    pub ordinary: Vec<PersistenceClass>,
    /// Descending-pass pairs (births numerically above deaths).
    pub relative: Vec<PersistenceClass>,
    /// Cross-pass pairs with birth ≤ death (components: min to max).
    pub extended_plus: Vec<PersistenceClass>,
    /// Cross-pass pairs with birth > death (loops).
    pub extended_minus: Vec<PersistenceClass>,
}

impl ExtendedDiagrams {
    /// Total number of classes across all four diagrams.
    pub fn class_count(&self) -> usize {
        self.ordinary.len()
            + self.relative.len()
            + self.extended_plus.len()
            + self.extended_minus.len()
    }

    /// Iterate every class with the diagram it came from.
    pub fn iter(&self) -> impl Iterator<Item = (Diagram, &PersistenceClass)> {
        self.ordinary
            .iter()
            .map(|c| (Diagram::Ordinary, c))
            .chain(self.relative.iter().map(|c| (Diagram::Relative, c)))
            .chain(
                self.extended_plus
                    .iter()
                    .map(|c| (Diagram::ExtendedPlus, c)),
            )
            .chain(
                self.extended_minus
                    .iter()
                    .map(|c| (Diagram::ExtendedMinus, c)),
            )
    }
}

/// Which of the four diagrams a class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagram {
    Ordinary,
    Relative,
    ExtendedPlus,
    ExtendedMinus,
}

/// A persistence computation over filtered 1-skeletons.
///
/// Implementations are pure: same complex in, same diagrams out, no
/// state carried across calls.
pub trait PersistenceEngine {
    fn compute(&self, complex: &FilteredComplex) -> Result<ExtendedDiagrams>;
}
