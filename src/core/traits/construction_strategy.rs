//! Common trait for level-by-level Čech complex construction strategies.
//!
//! A strategy turns the verified simplices of dimension `k` into the verified
//! simplices of dimension `k + 1`. Levels 0 and 1 come straight from the ball
//! list and the neighbor graph, so strategies only ever see `k ≥ 1`.
//!
//! Two strategies are provided and must produce identical output:
//!
//! - [`BaselineConstruction`](crate::core::algorithms::baseline::BaselineConstruction)
//!   enumerates every neighbor-star subset and verifies it from scratch.
//! - [`WitnessCachingConstruction`](crate::core::algorithms::witness_caching::WitnessCachingConstruction)
//!   only extends verified simplices and reuses their witnesses.

use crate::core::algorithms::witness::{Verification, VerificationMethod};
use crate::core::neighbor_graph::NeighborGraph;
use crate::core::simplex::Level;
use crate::geometry::ball::Ball;
use crate::geometry::traits::coordinate::CoordinateScalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which construction strategy to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Exhaustive enumeration, verification from scratch. Reference oracle.
    Baseline,
    /// Extension of verified simplices with memoized witnesses.
    #[default]
    WitnessCaching,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline => write!(f, "baseline"),
            Self::WitnessCaching => write!(f, "witness-caching"),
        }
    }
}

/// Counters accumulated over one construction run.
///
/// # Examples
///
/// ```rust
/// use gcech::core::traits::construction_strategy::ConstructionStatistics;
///
/// let stats = ConstructionStatistics::default();
/// assert_eq!(stats.verified(), 0);
/// assert_eq!(stats.candidates, 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionStatistics {
    /// Distinct candidates submitted to the verifier.
    pub candidates: usize,
    /// Proposals skipped because the same simplex was already proposed.
    pub duplicates: usize,
    /// Candidates certified by the containment shortcut.
    pub verified_by_containment: usize,
    /// Candidates certified by reusing a base witness.
    pub verified_by_witness_reuse: usize,
    /// Candidates certified by the pairwise-intersection search.
    pub verified_by_pairwise_intersection: usize,
    /// Candidates without a common point.
    pub rejected: usize,
}

impl ConstructionStatistics {
    /// Counts one verification outcome.
    pub fn record<T>(&mut self, outcome: &Verification<T>) {
        self.candidates += 1;
        match outcome {
            Verification::Verified { method, .. } => match method {
                VerificationMethod::Containment => self.verified_by_containment += 1,
                VerificationMethod::WitnessReuse => self.verified_by_witness_reuse += 1,
                VerificationMethod::PairwiseIntersection => {
                    self.verified_by_pairwise_intersection += 1;
                }
            },
            Verification::Rejected => self.rejected += 1,
        }
    }

    /// Total number of verified candidates.
    #[must_use]
    pub const fn verified(&self) -> usize {
        self.verified_by_containment
            + self.verified_by_witness_reuse
            + self.verified_by_pairwise_intersection
    }
}

/// Read-only state shared by every level of one construction run.
#[derive(Clone, Copy, Debug)]
pub struct LevelContext<'a, T>
where
    T: CoordinateScalar,
{
    /// The validated balls, indexed by vertex.
    pub balls: &'a [Ball<T>],
    /// Overlap graph of `balls`.
    pub graph: &'a NeighborGraph,
    /// Verify candidates on rayon's pool (requires the `parallel` feature).
    pub parallel: bool,
}

/// Trait for strategies that grow a Čech complex one dimension at a time.
///
/// Implementations may keep state across levels of one run (such as a witness
/// memo) but must not carry it across runs; [`reset`](Self::reset) discards it.
pub trait ConstructionStrategy<T>
where
    T: CoordinateScalar,
{
    /// Identifies the strategy.
    fn kind(&self) -> StrategyKind;

    /// Builds the verified level of dimension `previous.dimension() + 1`.
    ///
    /// Every candidate outcome is recorded in `statistics`.
    fn next_level(
        &mut self,
        context: &LevelContext<'_, T>,
        previous: &Level,
        statistics: &mut ConstructionStatistics,
    ) -> Level;

    /// Discards any per-run state.
    fn reset(&mut self) {}
}
