//! Pairwise overlap graph of a ball configuration.
//!
//! Two balls are neighbors exactly when their closed discs overlap. The graph
//! is built once per construction run by testing every unordered pair, which
//! also yields the 1-simplices of the complex. Neighbor lists are kept sorted
//! so that common-neighbor queries are linear merges.

use crate::core::collections::VertexBuffer;
use crate::core::simplex::{Level, Simplex};
use crate::geometry::ball::Ball;
use crate::geometry::predicates::balls_overlap;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Symmetric overlap relation over ball indices `0..N`.
///
/// # Examples
///
/// ```rust
/// use gcech::ball;
/// use gcech::core::neighbor_graph::NeighborGraph;
///
/// let balls = vec![
///     ball!([0.0, 0.0], 1.0),
///     ball!([1.5, 0.0], 1.0),
///     ball!([5.0, 0.0], 1.0),
/// ];
/// let graph = NeighborGraph::build(&balls);
/// assert!(graph.are_neighbors(0, 1));
/// assert!(!graph.are_neighbors(1, 2));
/// assert_eq!(graph.neighbors(2), &[] as &[usize]);
/// assert_eq!(graph.edges().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborGraph {
    neighbors: Vec<Vec<usize>>,
    edges: Vec<Simplex>,
}

impl NeighborGraph {
    /// Tests every unordered pair `i < j` for overlap.
    ///
    /// # Complexity
    ///
    /// O(N²) overlap tests.
    #[must_use]
    pub fn build<T>(balls: &[Ball<T>]) -> Self
    where
        T: CoordinateScalar,
    {
        let n = balls.len();
        let mut neighbors = vec![Vec::new(); n];
        let mut edges = Vec::new();

        // Pushes happen in increasing order for every list, so lists stay sorted.
        for i in 0..n {
            for j in (i + 1)..n {
                if balls_overlap(&balls[i], &balls[j]) {
                    neighbors[i].push(j);
                    neighbors[j].push(i);
                    edges.push(Simplex::new([i, j]));
                }
            }
        }

        tracing::debug!(balls = n, edges = edges.len(), "built neighbor graph");

        Self { neighbors, edges }
    }

    /// Number of balls (graph vertices).
    #[inline]
    #[must_use]
    pub fn number_of_balls(&self) -> usize {
        self.neighbors.len()
    }

    /// Sorted neighbors of ball `i`; empty for an out-of-range index.
    #[must_use]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        self.neighbors.get(i).map_or(&[][..], Vec::as_slice)
    }

    /// Number of neighbors of ball `i`.
    #[must_use]
    pub fn degree(&self, i: usize) -> usize {
        self.neighbors(i).len()
    }

    /// Returns `true` if balls `i` and `j` overlap (`i != j`).
    #[must_use]
    pub fn are_neighbors(&self, i: usize, j: usize) -> bool {
        self.neighbors(i).binary_search(&j).is_ok()
    }

    /// All overlapping pairs, as sorted 1-simplices.
    #[must_use]
    pub fn edges(&self) -> &[Simplex] {
        &self.edges
    }

    /// The 1-simplex level.
    #[must_use]
    pub fn edge_level(&self) -> Level {
        Level::new(1, self.edges.clone())
    }

    /// Balls adjacent to every vertex of `simplex`, excluding its own vertices.
    ///
    /// These are exactly the balls that can extend `simplex` by one dimension
    /// without violating the pairwise-overlap requirement.
    #[must_use]
    pub fn common_neighbors(&self, simplex: &Simplex) -> VertexBuffer {
        let mut vertices = simplex.vertices().iter();
        let Some(&first) = vertices.next() else {
            return VertexBuffer::new();
        };

        let mut common: VertexBuffer = self.neighbors(first).iter().copied().collect();
        for &v in vertices {
            if common.is_empty() {
                break;
            }
            common = intersect_sorted(&common, self.neighbors(v));
        }
        common.retain(|c| !simplex.contains(*c));
        common
    }
}

/// Intersection of two sorted, duplicate-free slices.
fn intersect_sorted(a: &[usize], b: &[usize]) -> VertexBuffer {
    let mut out = VertexBuffer::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
