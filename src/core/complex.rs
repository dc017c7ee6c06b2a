//! The generalized Čech complex of a ball configuration.
//!
//! [`CechComplex`] is assembled one dimension at a time:
//!
//! - level 0 holds one vertex per ball,
//! - level 1 holds the overlapping pairs found by the [`NeighborGraph`],
//! - level `k ≥ 2` is produced from level `k - 1` by the configured
//!   [`ConstructionStrategy`].
//!
//! Construction stops at the first empty level or when the next level would
//! exceed [`ConstructionOptions::max_dimension`]. Levels are strictly ordered:
//! level `k` is only computed once level `k - 1` and its witnesses are final.
//!
//! # Examples
//!
//! ```rust
//! use gcech::core::complex::construct;
//! use gcech::core::simplex::Simplex;
//!
//! // Three nested discs around the origin.
//! let positions = [[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]];
//! let radii = [1.0, 2.0, 3.0];
//! let complex = construct(&positions, &radii, None).unwrap();
//!
//! assert_eq!(complex.f_vector(), vec![3, 3, 1]);
//! assert!(complex.contains(&Simplex::new([0, 1, 2])));
//! ```

use crate::core::algorithms::baseline::BaselineConstruction;
use crate::core::algorithms::witness::WitnessVerifier;
use crate::core::algorithms::witness_caching::WitnessCachingConstruction;
use crate::core::neighbor_graph::NeighborGraph;
use crate::core::simplex::{Level, Simplex};
pub use crate::core::traits::construction_strategy::{ConstructionStatistics, StrategyKind};
use crate::core::traits::construction_strategy::{ConstructionStrategy, LevelContext};
use crate::geometry::ball::{Ball, BallValidationError};
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Configuration options for [`construct_with_options`].
///
/// # Examples
///
/// ```rust
/// use gcech::core::complex::{ConstructionOptions, StrategyKind};
///
/// let options = ConstructionOptions::new()
///     .with_max_dimension(Some(2))
///     .with_strategy(StrategyKind::Baseline);
/// assert_eq!(options.max_dimension, Some(2));
/// assert!(!options.parallel);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionOptions {
    /// Highest dimension to build; `None` builds until a level is empty.
    pub max_dimension: Option<usize>,
    /// Strategy for levels of dimension 2 and above.
    pub strategy: StrategyKind,
    /// Verify candidates on rayon's pool. Ignored unless the crate is built
    /// with the `parallel` feature.
    pub parallel: bool,
}

impl ConstructionOptions {
    /// Default options: no dimension cap, witness caching, sequential.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_dimension: None,
            strategy: StrategyKind::WitnessCaching,
            parallel: false,
        }
    }

    /// Sets the dimension cap.
    #[must_use]
    pub const fn with_max_dimension(mut self, max_dimension: Option<usize>) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Sets the construction strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables parallel verification.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    const fn exceeds_cap(&self, dimension: usize) -> bool {
        match self.max_dimension {
            Some(max) => dimension > max,
            None => false,
        }
    }
}

/// Why construction stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The last computed level was empty, so no higher level can exist.
    #[default]
    EmptyLevel,
    /// The next level would have exceeded the dimension cap.
    MaxDimension,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors reported before any geometry runs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    /// `positions` and `radii` have different lengths.
    #[error("Input length mismatch: {positions} positions but {radii} radii")]
    LengthMismatch {
        /// Number of positions supplied.
        positions: usize,
        /// Number of radii supplied.
        radii: usize,
    },
    /// A ball has a non-finite center or a negative or non-finite radius.
    #[error("Invalid ball at index {index}: {source}")]
    InvalidBall {
        /// Index of the offending ball.
        index: usize,
        /// The underlying validation error.
        source: BallValidationError,
    },
}

// =============================================================================
// COMPLEX
// =============================================================================

/// Verified simplices of a ball configuration, grouped by dimension.
///
/// `levels()[k]` holds every `k`-simplex, i.e. every set of `k + 1` balls
/// whose closed discs share a point. Level 0 and (unless capped at dimension
/// 0) level 1 are always present, possibly empty; higher levels are present
/// only when non-empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: CoordinateScalar"))]
pub struct CechComplex<T>
where
    T: CoordinateScalar,
{
    balls: Vec<Ball<T>>,
    levels: Vec<Level>,
    options: ConstructionOptions,
    statistics: ConstructionStatistics,
    stop_reason: StopReason,
}

/// Builds the Čech complex of `positions[i]` with `radii[i]` using the
/// default strategy.
///
/// # Errors
///
/// Returns [`InputError`] if the slices differ in length or a ball is invalid.
///
/// # Examples
///
/// ```rust
/// use gcech::core::complex::construct;
///
/// // Two far-apart discs: only the vertices.
/// let complex = construct(&[[0.0, 0.0], [3.0, 0.0]], &[1.0, 1.0], None).unwrap();
/// assert_eq!(complex.f_vector(), vec![2]);
/// assert!(complex.level(1).unwrap().is_empty());
///
/// assert!(construct(&[[0.0, 0.0]], &[1.0, 2.0], None).is_err());
/// ```
pub fn construct<T>(
    positions: &[[T; 2]],
    radii: &[T],
    max_dimension: Option<usize>,
) -> Result<CechComplex<T>, InputError>
where
    T: CoordinateScalar,
{
    construct_with_options(
        positions,
        radii,
        ConstructionOptions::new().with_max_dimension(max_dimension),
    )
}

/// Builds the Čech complex of `positions[i]` with `radii[i]`.
///
/// # Errors
///
/// Returns [`InputError`] if the slices differ in length or a ball is invalid.
pub fn construct_with_options<T>(
    positions: &[[T; 2]],
    radii: &[T],
    options: ConstructionOptions,
) -> Result<CechComplex<T>, InputError>
where
    T: CoordinateScalar,
{
    if positions.len() != radii.len() {
        return Err(InputError::LengthMismatch {
            positions: positions.len(),
            radii: radii.len(),
        });
    }

    let balls = positions
        .iter()
        .zip(radii)
        .enumerate()
        .map(|(index, (&coords, &radius))| {
            Ball::new(Point::new(coords), radius)
                .map_err(|source| InputError::InvalidBall { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CechComplex::assemble(balls, options))
}

impl<T> CechComplex<T>
where
    T: CoordinateScalar,
{
    /// Builds the complex of already constructed balls.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidBall`] if a ball fails validation (possible
    /// for balls obtained through deserialization).
    pub fn from_balls(balls: Vec<Ball<T>>, options: ConstructionOptions) -> Result<Self, InputError> {
        for (index, ball) in balls.iter().enumerate() {
            ball.validate()
                .map_err(|source| InputError::InvalidBall { index, source })?;
        }
        Ok(Self::assemble(balls, options))
    }

    fn assemble(balls: Vec<Ball<T>>, options: ConstructionOptions) -> Self {
        tracing::debug!(
            balls = balls.len(),
            strategy = %options.strategy,
            max_dimension = ?options.max_dimension,
            parallel = options.parallel,
            "starting Čech construction"
        );

        let mut strategy: Box<dyn ConstructionStrategy<T>> = match options.strategy {
            StrategyKind::Baseline => Box::new(BaselineConstruction::new()),
            StrategyKind::WitnessCaching => Box::new(WitnessCachingConstruction::new()),
        };
        let mut statistics = ConstructionStatistics::default();
        let mut levels = vec![Level::new(0, (0..balls.len()).map(Simplex::vertex).collect())];

        let stop_reason = if options.exceeds_cap(1) {
            StopReason::MaxDimension
        } else {
            let graph = NeighborGraph::build(&balls);
            levels.push(graph.edge_level());
            let context = LevelContext {
                balls: &balls,
                graph: &graph,
                parallel: options.parallel,
            };

            loop {
                let Some(previous) = levels.last() else {
                    break StopReason::EmptyLevel;
                };
                if previous.is_empty() {
                    break StopReason::EmptyLevel;
                }
                let dimension = previous.dimension() + 1;
                if options.exceeds_cap(dimension) {
                    break StopReason::MaxDimension;
                }

                let before = statistics;
                let next = strategy.next_level(&context, previous, &mut statistics);
                tracing::debug!(
                    dimension,
                    candidates = statistics.candidates - before.candidates,
                    duplicates = statistics.duplicates - before.duplicates,
                    verified = next.len(),
                    "built level"
                );

                if next.is_empty() {
                    break StopReason::EmptyLevel;
                }
                levels.push(next);
            }
        };

        let complex = Self {
            balls,
            levels,
            options,
            statistics,
            stop_reason,
        };
        tracing::debug!(
            f_vector = ?complex.f_vector(),
            stop_reason = ?complex.stop_reason,
            "finished Čech construction"
        );
        complex
    }

    /// The balls, indexed by vertex.
    #[must_use]
    pub fn balls(&self) -> &[Ball<T>] {
        &self.balls
    }

    /// Number of balls (0-simplices).
    #[must_use]
    pub fn number_of_balls(&self) -> usize {
        self.balls.len()
    }

    /// All levels in increasing dimension.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// The level of dimension `k`, if it was built.
    #[must_use]
    pub fn level(&self, k: usize) -> Option<&Level> {
        self.levels.get(k)
    }

    /// Highest dimension with at least one simplex; `None` for no balls.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.levels.iter().rposition(|level| !level.is_empty())
    }

    /// Total number of simplices over all levels.
    #[must_use]
    pub fn number_of_simplices(&self) -> usize {
        self.levels.iter().map(Level::len).sum()
    }

    /// Returns `true` if `simplex` is in the complex.
    #[must_use]
    pub fn contains(&self, simplex: &Simplex) -> bool {
        !simplex.is_empty()
            && self
                .level(simplex.dim())
                .is_some_and(|level| level.contains(simplex))
    }

    /// Every simplex, by increasing dimension then lexicographically.
    pub fn simplices(&self) -> impl Iterator<Item = &Simplex> + '_ {
        self.levels.iter().flat_map(Level::iter)
    }

    /// `f[k]` is the number of `k`-simplices, up to [`dimension`](Self::dimension).
    #[must_use]
    pub fn f_vector(&self) -> Vec<usize> {
        let top = self.dimension().map_or(0, |d| d + 1);
        self.levels[..top].iter().map(Level::len).collect()
    }

    /// Alternating sum `f₀ - f₁ + f₂ - …` of the simplex counts.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // Simplex counts won't exceed isize::MAX in practice
    pub fn euler_characteristic(&self) -> isize {
        self.f_vector()
            .iter()
            .enumerate()
            .map(|(k, &f_k)| {
                let sign = if k % 2 == 0 { 1 } else { -1 };
                sign * (f_k as isize)
            })
            .sum()
    }

    /// Returns `true` if every facet of every simplex is itself in the complex.
    ///
    /// Levels above the dimension cap are never built, so truncation cannot
    /// make this fail.
    #[must_use]
    pub fn is_closed_under_faces(&self) -> bool {
        self.levels.windows(2).all(|pair| {
            pair[1]
                .iter()
                .all(|simplex| simplex.facets().all(|facet| pair[0].contains(&facet)))
        })
    }

    /// A point in every disc of `simplex`, if it belongs to the complex.
    #[must_use]
    pub fn witness(&self, simplex: &Simplex) -> Option<Point<T>> {
        if !self.contains(simplex) {
            return None;
        }
        WitnessVerifier::new(&self.balls)
            .verify_from_scratch(simplex.vertices())
            .witness()
            .copied()
    }

    /// The options used for construction.
    #[must_use]
    pub const fn options(&self) -> &ConstructionOptions {
        &self.options
    }

    /// The dimension cap used for construction.
    #[must_use]
    pub const fn max_dimension(&self) -> Option<usize> {
        self.options.max_dimension
    }

    /// The strategy used for levels of dimension 2 and above.
    #[must_use]
    pub const fn strategy(&self) -> StrategyKind {
        self.options.strategy
    }

    /// Counters accumulated during construction.
    #[must_use]
    pub const fn statistics(&self) -> &ConstructionStatistics {
        &self.statistics
    }

    /// Why construction stopped.
    #[must_use]
    pub const fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn both_strategies() -> [ConstructionOptions; 2] {
        [
            ConstructionOptions::new().with_strategy(StrategyKind::Baseline),
            ConstructionOptions::new().with_strategy(StrategyKind::WitnessCaching),
        ]
    }

    #[test]
    fn test_options_builders() {
        let options = ConstructionOptions::default()
            .with_max_dimension(Some(3))
            .with_strategy(StrategyKind::Baseline)
            .with_parallel(true);
        assert_eq!(options.max_dimension, Some(3));
        assert_eq!(options.strategy, StrategyKind::Baseline);
        assert!(options.parallel);
        assert_eq!(ConstructionOptions::new(), ConstructionOptions::default());
        assert!(options.exceeds_cap(4));
        assert!(!options.exceeds_cap(3));
        assert!(!ConstructionOptions::new().exceeds_cap(usize::MAX));
    }

    #[test]
    fn test_input_errors() {
        let err = construct::<f64>(&[[0.0, 0.0]], &[], None).unwrap_err();
        assert_eq!(
            err,
            InputError::LengthMismatch {
                positions: 1,
                radii: 0
            }
        );

        let err = construct(&[[0.0, 0.0], [1.0, 0.0]], &[1.0, -0.5], None).unwrap_err();
        assert!(matches!(err, InputError::InvalidBall { index: 1, .. }));
        assert!(err.to_string().contains("index 1"));

        let err = construct(&[[f64::NAN, 0.0]], &[1.0], None).unwrap_err();
        assert!(matches!(err, InputError::InvalidBall { index: 0, .. }));
    }

    #[test]
    fn test_empty_input() {
        for options in both_strategies() {
            let complex = construct_with_options::<f64>(&[], &[], options).unwrap();
            assert_eq!(complex.number_of_balls(), 0);
            assert_eq!(complex.number_of_simplices(), 0);
            assert_eq!(complex.dimension(), None);
            assert!(complex.f_vector().is_empty());
            assert_eq!(complex.euler_characteristic(), 0);
            assert_eq!(complex.stop_reason(), StopReason::EmptyLevel);
        }
    }

    #[test]
    fn test_single_ball() {
        let complex = construct(&[[1.0, 2.0]], &[0.5], None).unwrap();
        assert_eq!(complex.f_vector(), vec![1]);
        assert_eq!(complex.dimension(), Some(0));
        assert!(complex.contains(&Simplex::vertex(0)));
        assert!(!complex.contains(&Simplex::vertex(1)));
        assert_eq!(
            complex.witness(&Simplex::vertex(0)),
            Some(Point::new([1.0, 2.0]))
        );
    }

    #[test]
    fn test_max_dimension_zero() {
        let complex = construct(&[[0.0, 0.0], [0.5, 0.0]], &[1.0, 1.0], Some(0)).unwrap();
        assert_eq!(complex.levels().len(), 1);
        assert_eq!(complex.stop_reason(), StopReason::MaxDimension);
        assert_eq!(complex.max_dimension(), Some(0));
    }

    #[test]
    fn test_square_complex() {
        let positions = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let radii = [1.0; 4];
        for options in both_strategies() {
            let complex = construct_with_options(&positions, &radii, options).unwrap();
            assert_eq!(complex.f_vector(), vec![4, 6, 4, 1]);
            assert_eq!(complex.euler_characteristic(), 1);
            assert!(complex.is_closed_under_faces());
            assert_eq!(complex.strategy(), options.strategy);
            assert_eq!(complex.simplices().count(), 15);

            let witness = complex.witness(&Simplex::new([0, 1, 2, 3])).unwrap();
            for ball in complex.balls() {
                assert!(crate::geometry::predicates::disc_contains(ball, &witness));
            }
        }
    }

    #[test]
    fn test_nested_triple_witness() {
        let complex = construct(&[[0.0, 0.0]; 3], &[1.0, 2.0, 3.0], None).unwrap();
        let witness = complex.witness(&Simplex::new([0, 1, 2])).unwrap();
        assert_relative_eq!(witness.x(), 0.0);
        assert_relative_eq!(witness.y(), 0.0);
        assert_eq!(complex.statistics().verified_by_containment, 1);
        assert_eq!(complex.witness(&Simplex::new([0, 1, 3])), None);
    }

    #[test]
    fn test_statistics_differ_but_levels_agree() {
        // A ring of eight discs overlapping only their two neighbors: a cycle with no triangles.
        let positions: Vec<[f64; 2]> = (0..8)
            .map(|i| {
                let angle = f64::from(i) * std::f64::consts::TAU / 8.0;
                [2.0 * angle.cos(), 2.0 * angle.sin()]
            })
            .collect();
        let radii = vec![1.1; 8];
        let [baseline, caching] = both_strategies()
            .map(|options| construct_with_options(&positions, &radii, options).unwrap());
        assert_eq!(baseline.levels(), caching.levels());
        assert_eq!(baseline.statistics().duplicates, 0);
        assert!(caching.is_closed_under_faces());
        assert_eq!(caching.f_vector(), vec![8, 8]);
        assert_eq!(caching.euler_characteristic(), 0);
    }

    #[test]
    fn test_from_balls_validates() {
        let balls: Vec<Ball<f64>> =
            serde_json::from_str(r#"[{"center":[0.0,0.0],"radius":-1.0}]"#).unwrap();
        let err = CechComplex::from_balls(balls, ConstructionOptions::new()).unwrap_err();
        assert!(matches!(err, InputError::InvalidBall { index: 0, .. }));
    }
}
