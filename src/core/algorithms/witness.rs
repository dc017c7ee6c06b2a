//! Common-intersection certification for candidate simplices.
//!
//! A set of balls spans a simplex exactly when their closed discs share a
//! point. The verifier certifies this by producing a *witness* point that lies
//! in every disc, trying the cheapest arguments first:
//!
//! 1. **Containment**: if the smallest disc lies inside every other disc, its
//!    center is a witness.
//! 2. **Witness reuse**: the memoized witness of the candidate's base already
//!    lies in every base disc, so it is a witness for the candidate as soon as
//!    it lies in the apex disc. A base that is a bare edge has no memo entry;
//!    its two boundary crossings are tested against the apex instead.
//! 3. **Pairwise intersection**: if the common region is non-empty and no disc
//!    is contained in all others, one of its corners is a crossing point of two
//!    boundary circles. Every crossing point of every pair is tested against
//!    the remaining discs.
//!
//! Rejection is the normal outcome for most candidates and is not an error.

use crate::core::algorithms::candidates::Candidate;
use crate::core::collections::WitnessMap;
use crate::geometry::ball::Ball;
use crate::geometry::point::Point;
use crate::geometry::predicates::{ball_inside_ball, circle_intersections, disc_contains};
use crate::geometry::traits::coordinate::CoordinateScalar;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// OUTCOMES
// =============================================================================

/// Which argument certified a simplex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationMethod {
    /// The smallest disc is contained in all others.
    Containment,
    /// The base simplex's witness (or a crossing of a base edge) lies in the apex disc.
    WitnessReuse,
    /// A boundary crossing of two discs lies in all remaining discs.
    PairwiseIntersection,
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Containment => write!(f, "containment"),
            Self::WitnessReuse => write!(f, "witness reuse"),
            Self::PairwiseIntersection => write!(f, "pairwise intersection"),
        }
    }
}

/// Result of verifying one candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verification<T> {
    /// The discs share `witness`.
    Verified {
        /// A point inside every disc of the simplex.
        witness: Point<T>,
        /// The argument that produced the witness.
        method: VerificationMethod,
    },
    /// No common point exists.
    Rejected,
}

impl<T> Verification<T> {
    /// Returns `true` for [`Verification::Verified`].
    #[inline]
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        matches!(self, Self::Verified { .. })
    }

    /// The witness point, if verified.
    #[inline]
    #[must_use]
    pub const fn witness(&self) -> Option<&Point<T>> {
        match self {
            Self::Verified { witness, .. } => Some(witness),
            Self::Rejected => None,
        }
    }

    /// The certifying method, if verified.
    #[inline]
    #[must_use]
    pub const fn method(&self) -> Option<VerificationMethod> {
        match self {
            Self::Verified { method, .. } => Some(*method),
            Self::Rejected => None,
        }
    }
}

// =============================================================================
// VERIFIER
// =============================================================================

/// Read-only witness search over one ball configuration.
///
/// # Examples
///
/// ```rust
/// use gcech::ball;
/// use gcech::core::algorithms::witness::{VerificationMethod, WitnessVerifier};
/// use gcech::geometry::point::Point;
///
/// let balls = vec![
///     ball!([0.0, 0.0], 1.0),
///     ball!([0.0, 0.0], 2.0),
///     ball!([0.0, 0.0], 3.0),
/// ];
/// let verifier = WitnessVerifier::new(&balls);
/// let outcome = verifier.verify_from_scratch(&[0, 1, 2]);
/// assert_eq!(outcome.witness(), Some(&Point::new([0.0, 0.0])));
/// assert_eq!(outcome.method(), Some(VerificationMethod::Containment));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct WitnessVerifier<'a, T>
where
    T: CoordinateScalar,
{
    balls: &'a [Ball<T>],
}

impl<'a, T> WitnessVerifier<'a, T>
where
    T: CoordinateScalar,
{
    /// Creates a verifier over `balls`. Vertex indices passed to the verifier
    /// must be valid indices into `balls`.
    #[must_use]
    pub const fn new(balls: &'a [Ball<T>]) -> Self {
        Self { balls }
    }

    /// The vertex with the smallest radius (first one on ties).
    #[must_use]
    pub fn smallest_ball(&self, vertices: &[usize]) -> Option<usize> {
        vertices.iter().copied().reduce(|best, v| {
            if self.balls[v].radius() < self.balls[best].radius() {
                v
            } else {
                best
            }
        })
    }

    /// Returns `true` if `p` lies in the disc of every vertex.
    #[must_use]
    pub fn lies_in_all(&self, p: &Point<T>, vertices: &[usize]) -> bool {
        vertices.iter().all(|&v| disc_contains(&self.balls[v], p))
    }

    /// Containment shortcut: the center of the smallest disc, if that disc
    /// lies inside every other disc of the simplex.
    #[must_use]
    pub fn containment_witness(&self, vertices: &[usize]) -> Option<Point<T>> {
        let m = self.smallest_ball(vertices)?;
        let inner = &self.balls[m];
        vertices
            .iter()
            .all(|&c| c == m || ball_inside_ball(inner, &self.balls[c]))
            .then(|| *inner.center())
    }

    /// Witness-reuse shortcut for a candidate grown from `candidate.base()`.
    ///
    /// Uses the memoized witness of the base when present; for a base edge
    /// without a memo entry, tests the edge's boundary crossings instead.
    #[must_use]
    pub fn reuse_witness(&self, candidate: &Candidate, memo: &WitnessMap<T>) -> Option<Point<T>> {
        let apex = &self.balls[candidate.apex()];

        if let Some(witness) = memo.get(candidate.base()) {
            return disc_contains(apex, witness).then_some(*witness);
        }

        if let [a, b] = candidate.base().vertices() {
            let vertices = candidate.simplex().vertices();
            return circle_intersections(&self.balls[*a], &self.balls[*b])
                .points()
                .iter()
                .find(|p| self.lies_in_all(p, vertices))
                .copied();
        }

        None
    }

    /// Exhaustive search over boundary crossings of every vertex pair.
    ///
    /// Pairs involving `first` (typically the apex of a candidate) are tried
    /// before the rest. Each crossing is tested against every vertex,
    /// including the two that produced it, so the returned point passes
    /// [`disc_contains`] for the whole simplex. Pairs are always intersected
    /// with the lower ball index first, so the tested points do not depend on
    /// the order in which pairs are visited.
    #[must_use]
    pub fn pairwise_witness(&self, vertices: &[usize], first: Option<usize>) -> Option<Point<T>> {
        let first = first.filter(|f| vertices.contains(f));

        if let Some(f) = first {
            for &v in vertices {
                if v != f
                    && let Some(p) = self.crossing_in_all(vertices, f.min(v), f.max(v))
                {
                    return Some(p);
                }
            }
        }

        for (a, &i) in vertices.iter().enumerate() {
            for &j in &vertices[a + 1..] {
                if Some(i) == first || Some(j) == first {
                    continue;
                }
                if let Some(p) = self.crossing_in_all(vertices, i, j) {
                    return Some(p);
                }
            }
        }

        None
    }

    fn crossing_in_all(&self, vertices: &[usize], i: usize, j: usize) -> Option<Point<T>> {
        circle_intersections(&self.balls[i], &self.balls[j])
            .points()
            .iter()
            .find(|p| self.lies_in_all(p, vertices))
            .copied()
    }

    /// Verifies a candidate using the memo of previously verified simplices.
    #[must_use]
    pub fn verify_with_memo(&self, candidate: &Candidate, memo: &WitnessMap<T>) -> Verification<T> {
        let vertices = candidate.simplex().vertices();

        if let Some(witness) = self.containment_witness(vertices) {
            return Verification::Verified {
                witness,
                method: VerificationMethod::Containment,
            };
        }
        if let Some(witness) = self.reuse_witness(candidate, memo) {
            return Verification::Verified {
                witness,
                method: VerificationMethod::WitnessReuse,
            };
        }
        self.pairwise_witness(vertices, Some(candidate.apex()))
            .map_or(Verification::Rejected, |witness| Verification::Verified {
                witness,
                method: VerificationMethod::PairwiseIntersection,
            })
    }

    /// Verifies a vertex set without any memoized information.
    #[must_use]
    pub fn verify_from_scratch(&self, vertices: &[usize]) -> Verification<T> {
        if let Some(witness) = self.containment_witness(vertices) {
            return Verification::Verified {
                witness,
                method: VerificationMethod::Containment,
            };
        }
        self.pairwise_witness(vertices, None)
            .map_or(Verification::Rejected, |witness| Verification::Verified {
                witness,
                method: VerificationMethod::PairwiseIntersection,
            })
    }
}

// =============================================================================
// BATCH VERIFICATION
// =============================================================================

/// Applies `verify` to every candidate, in candidate order.
///
/// With the `parallel` feature and `parallel == true` the candidates are
/// verified on rayon's thread pool; the output order is unchanged.
pub(crate) fn verify_all<T, F>(
    candidates: &[Candidate],
    parallel: bool,
    verify: F,
) -> Vec<Verification<T>>
where
    T: CoordinateScalar,
    F: Fn(&Candidate) -> Verification<T> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if parallel {
            return candidates.par_iter().map(&verify).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    candidates.iter().map(verify).collect()
}

// =============================================================================
// TESTS
// =============================================================================
