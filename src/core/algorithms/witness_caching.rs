//! Witness-caching construction strategy.
//!
//! Candidates of dimension `k + 1` are grown only from verified `k`-simplices
//! (see [`extend_verified`]), and every verified simplex stores its witness so
//! that supersets can be certified by a single disc test against the new
//! vertex. The memo lives inside the strategy value and is dropped with it.

use crate::core::algorithms::candidates::extend_verified;
use crate::core::algorithms::witness::{Verification, WitnessVerifier, verify_all};
use crate::core::collections::{Entry, WitnessMap};
use crate::core::simplex::{Level, Simplex};
use crate::core::traits::construction_strategy::{
    ConstructionStatistics, ConstructionStrategy, LevelContext, StrategyKind,
};
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Strategy that memoizes one witness per verified simplex.
///
/// # Examples
///
/// ```rust
/// use gcech::ball;
/// use gcech::core::algorithms::witness_caching::WitnessCachingConstruction;
/// use gcech::core::neighbor_graph::NeighborGraph;
/// use gcech::core::simplex::Simplex;
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
/// let mut strategy = WitnessCachingConstruction::new();
///
/// let triangles = strategy.next_level(&context, &graph.edge_level(), &mut stats);
/// assert_eq!(triangles.len(), 1);
/// assert!(strategy.witness(&Simplex::new([0, 1, 2])).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct WitnessCachingConstruction<T>
where
    T: CoordinateScalar,
{
    memo: WitnessMap<T>,
}

impl<T> WitnessCachingConstruction<T>
where
    T: CoordinateScalar,
{
    /// Creates the strategy with an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self {
            memo: WitnessMap::default(),
        }
    }

    /// The memoized witness of a verified simplex of dimension ≥ 2.
    #[must_use]
    pub fn witness(&self, simplex: &Simplex) -> Option<&Point<T>> {
        self.memo.get(simplex)
    }

    /// Number of memoized witnesses.
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}

impl<T> ConstructionStrategy<T> for WitnessCachingConstruction<T>
where
    T: CoordinateScalar,
{
    fn kind(&self) -> StrategyKind {
        StrategyKind::WitnessCaching
    }

    fn next_level(
        &mut self,
        context: &LevelContext<'_, T>,
        previous: &Level,
        statistics: &mut ConstructionStatistics,
    ) -> Level {
        let dimension = previous.dimension() + 1;
        let batch = extend_verified(previous, context.graph);
        statistics.duplicates += batch.duplicates;

        let verifier = WitnessVerifier::new(context.balls);
        let memo = &self.memo;
        let outcomes = verify_all(&batch.candidates, context.parallel, |candidate| {
            verifier.verify_with_memo(candidate, memo)
        });

        // Outcomes are merged sequentially so each key is inserted at most once.
        let mut verified = Vec::new();
        for (candidate, outcome) in batch.candidates.into_iter().zip(outcomes) {
            statistics.record(&outcome);
            tracing::trace!(
                simplex = %candidate.simplex(),
                method = ?outcome.method(),
                "witness-caching verification"
            );
            if let Verification::Verified { witness, .. } = outcome {
                let simplex = candidate.into_simplex();
                if let Entry::Vacant(slot) = self.memo.entry(simplex.clone()) {
                    slot.insert(witness);
                }
                verified.push(simplex);
            }
        }

        Level::new(dimension, verified)
    }

    fn reset(&mut self) {
        self.memo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball;
    use crate::core::neighbor_graph::NeighborGraph;
    use crate::geometry::ball::Ball;
    use crate::geometry::predicates::disc_contains;

    fn square() -> Vec<Ball<f64>> {
        vec![
            ball!([0.0, 0.0], 1.0),
            ball!([1.0, 0.0], 1.0),
            ball!([0.0, 1.0], 1.0),
            ball!([1.0, 1.0], 1.0),
        ]
    }

    #[test]
    fn test_memo_holds_valid_witnesses_across_levels() {
        let balls = square();
        let graph = NeighborGraph::build(&balls);
        let context = LevelContext {
            balls: &balls,
            graph: &graph,
            parallel: false,
        };
        let mut stats = ConstructionStatistics::default();
        let mut strategy = WitnessCachingConstruction::new();

        let triangles = strategy.next_level(&context, &graph.edge_level(), &mut stats);
        assert_eq!(triangles.len(), 4);
        assert_eq!(stats.duplicates, 8);

        let tetrahedra = strategy.next_level(&context, &triangles, &mut stats);
        assert_eq!(tetrahedra.simplices(), &[Simplex::new([0, 1, 2, 3])]);
        assert_eq!(strategy.memo_len(), 5);

        for simplex in triangles.iter().chain(tetrahedra.iter()) {
            let witness = strategy.witness(simplex).unwrap();
            for &v in simplex.vertices() {
                assert!(disc_contains(&balls[v], witness));
            }
        }
        // The square's center lies in all four discs, so reuse succeeds somewhere.
        assert!(stats.verified_by_witness_reuse >= 1);
    }

    #[test]
    fn test_reset_clears_memo() {
        let balls = square();
        let graph = NeighborGraph::build(&balls);
        let context = LevelContext {
            balls: &balls,
            graph: &graph,
            parallel: false,
        };
        let mut stats = ConstructionStatistics::default();
        let mut strategy = WitnessCachingConstruction::new();
        let _ = strategy.next_level(&context, &graph.edge_level(), &mut stats);
        assert!(strategy.memo_len() > 0);
        strategy.reset();
        assert_eq!(strategy.memo_len(), 0);
        assert_eq!(strategy.kind(), StrategyKind::WitnessCaching);
    }
}
