//! Exhaustive construction strategy.
//!
//! Every level is rebuilt from the neighbor graph alone: each vertex set that
//! forms a star around its smallest vertex is verified from scratch, without
//! consulting lower levels or reusing witnesses. The cost grows with the
//! number of neighbor-star subsets rather than the number of verified
//! simplices, so this strategy serves as a reference for
//! [`WitnessCachingConstruction`](crate::core::algorithms::witness_caching::WitnessCachingConstruction).

use crate::core::algorithms::candidates::enumerate_star_candidates;
use crate::core::algorithms::witness::{WitnessVerifier, verify_all};
use crate::core::simplex::Level;
use crate::core::traits::construction_strategy::{
    ConstructionStatistics, ConstructionStrategy, LevelContext, StrategyKind,
};
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Stateless exhaustive strategy.
///
/// # Examples
///
/// ```rust
/// use gcech::ball;
/// use gcech::core::algorithms::baseline::BaselineConstruction;
/// use gcech::core::neighbor_graph::NeighborGraph;
/// use gcech::core::traits::construction_strategy::{
///     ConstructionStatistics, ConstructionStrategy, LevelContext,
/// };
///
/// let balls = vec![
///     ball!([0.0, 0.0], 1.0),
///     ball!([1.0, 0.0], 1.0),
///     ball!([0.5, 0.5], 1.0),
/// ];
/// let graph = NeighborGraph::build(&balls);
/// let context = LevelContext { balls: &balls, graph: &graph, parallel: false };
/// let mut stats = ConstructionStatistics::default();
///
/// let triangles = BaselineConstruction.next_level(&context, &graph.edge_level(), &mut stats);
/// assert_eq!(triangles.len(), 1);
/// assert_eq!(stats.candidates, 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaselineConstruction;

impl BaselineConstruction {
    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<T> ConstructionStrategy<T> for BaselineConstruction
where
    T: CoordinateScalar,
{
    fn kind(&self) -> StrategyKind {
        StrategyKind::Baseline
    }

    fn next_level(
        &mut self,
        context: &LevelContext<'_, T>,
        previous: &Level,
        statistics: &mut ConstructionStatistics,
    ) -> Level {
        let dimension = previous.dimension() + 1;
        let batch = enumerate_star_candidates(context.graph, dimension);
        let verifier = WitnessVerifier::new(context.balls);

        let outcomes = verify_all(&batch.candidates, context.parallel, |candidate| {
            verifier.verify_from_scratch(candidate.simplex().vertices())
        });

        let mut verified = Vec::new();
        for (candidate, outcome) in batch.candidates.into_iter().zip(outcomes) {
            statistics.record(&outcome);
            tracing::trace!(
                simplex = %candidate.simplex(),
                method = ?outcome.method(),
                "baseline verification"
            );
            if outcome.is_verified() {
                verified.push(candidate.into_simplex());
            }
        }

        Level::new(dimension, verified)
    }
}
