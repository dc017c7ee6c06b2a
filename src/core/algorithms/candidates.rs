//! Candidate generation for the next level of a Čech complex.
//!
//! Two generators are provided:
//!
//! - [`extend_verified`] proposes `s ∪ {c}` for every verified simplex `s` and
//!   every common neighbor `c` of its vertices. Every proposal therefore has at
//!   least one verified facet, and the same proposal reached from several
//!   facets is kept once.
//! - [`enumerate_star_candidates`] proposes every vertex set whose smallest
//!   vertex overlaps all others, without consulting lower levels. It is the
//!   exhaustive enumeration used by the baseline strategy.

use crate::core::collections::{FastHashSet, fast_hash_set_with_capacity};
use crate::core::neighbor_graph::NeighborGraph;
use crate::core::simplex::{Level, Simplex, combinations};

// =============================================================================
// CANDIDATE
// =============================================================================

/// A proposed simplex together with the facet it was grown from.
///
/// The `apex` is the most recently added vertex; `base` is the candidate with
/// the apex removed. Witness reuse tests the memoized witness of `base`
/// against the apex disc.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    base: Simplex,
    apex: usize,
    simplex: Simplex,
}

impl Candidate {
    /// Creates the candidate `base ∪ {apex}`.
    #[must_use]
    pub fn new(base: Simplex, apex: usize) -> Self {
        let simplex = base.with_vertex(apex);
        Self {
            base,
            apex,
            simplex,
        }
    }

    /// The facet the candidate was grown from.
    #[inline]
    #[must_use]
    pub const fn base(&self) -> &Simplex {
        &self.base
    }

    /// The vertex added to `base`.
    #[inline]
    #[must_use]
    pub const fn apex(&self) -> usize {
        self.apex
    }

    /// The full candidate simplex in canonical form.
    #[inline]
    #[must_use]
    pub const fn simplex(&self) -> &Simplex {
        &self.simplex
    }

    /// Consumes the candidate, returning the full simplex.
    #[must_use]
    pub fn into_simplex(self) -> Simplex {
        self.simplex
    }
}

/// Deduplicated candidates for one level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateBatch {
    /// Candidates in proposal order, each canonical simplex once.
    pub candidates: Vec<Candidate>,
    /// Proposals dropped because an identical simplex was already proposed.
    pub duplicates: usize,
}

impl CandidateBatch {
    /// Number of distinct candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if nothing was proposed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

// =============================================================================
// GENERATORS
// =============================================================================

/// Proposes the candidates of dimension `previous.dimension() + 1` from the
/// verified simplices of `previous`.
///
/// The first facet (in the level's sorted order) to propose a simplex becomes
/// its `base`, which keeps the output deterministic.
///
/// # Examples
///
/// ```rust
/// use gcech::ball;
/// use gcech::core::algorithms::candidates::extend_verified;
/// use gcech::core::neighbor_graph::NeighborGraph;
/// use gcech::core::simplex::Simplex;
///
/// let balls = vec![
///     ball!([0.0, 0.0], 1.0),
///     ball!([1.0, 0.0], 1.0),
///     ball!([0.5, 0.8], 1.0),
/// ];
/// let graph = NeighborGraph::build(&balls);
/// let batch = extend_verified(&graph.edge_level(), &graph);
///
/// // {0, 1, 2} is proposed by all three edges but kept once.
/// assert_eq!(batch.len(), 1);
/// assert_eq!(batch.duplicates, 2);
/// assert_eq!(batch.candidates[0].simplex(), &Simplex::new([0, 1, 2]));
/// ```
#[must_use]
pub fn extend_verified(previous: &Level, graph: &NeighborGraph) -> CandidateBatch {
    let mut seen: FastHashSet<Simplex> = fast_hash_set_with_capacity(previous.len());
    let mut batch = CandidateBatch::default();

    for base in previous {
        for apex in graph.common_neighbors(base) {
            let candidate = Candidate::new(base.clone(), apex);
            if seen.insert(candidate.simplex().clone()) {
                batch.candidates.push(candidate);
            } else {
                batch.duplicates += 1;
            }
        }
    }

    batch
}

/// Proposes every `(dimension + 1)`-vertex set `{i} ∪ C` where `C` is a subset
/// of the neighbors of `i` larger than `i`.
///
/// Each set is produced once (its smallest vertex is `i`). Sets are not
/// checked against lower levels, so the batch may contain candidates whose
/// facets were rejected; verification still decides them correctly because
/// it is exact.
///
/// The `base` of each candidate is the set without its largest vertex.
#[must_use]
pub fn enumerate_star_candidates(graph: &NeighborGraph, dimension: usize) -> CandidateBatch {
    let mut batch = CandidateBatch::default();
    if dimension == 0 {
        return batch;
    }

    for i in 0..graph.number_of_balls() {
        let neighbors = graph.neighbors(i);
        let upper = &neighbors[neighbors.partition_point(|&j| j < i)..];
        for tail in combinations(upper, dimension) {
            let Some((&apex, rest)) = tail.split_last() else {
                continue;
            };
            let base = Simplex::new(std::iter::once(i).chain(rest.iter().copied()));
            batch.candidates.push(Candidate::new(base, apex));
        }
    }

    batch
}

// =============================================================================
// TESTS
// =============================================================================
