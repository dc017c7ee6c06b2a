//! Simplices and levels of a Čech complex.
//!
//! A [`Simplex`] is a non-empty set of ball indices. It is stored in canonical
//! (sorted, duplicate-free) form so that equality, hashing and ordering depend
//! only on the index set and never on discovery order. A [`Level`] collects all
//! simplices of one dimension in sorted order.

#![forbid(unsafe_code)]

use crate::core::collections::{MAX_PRACTICAL_SIMPLEX_SIZE, SmallBuffer, VertexBuffer};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors produced when building a simplex from an explicit vertex list.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SimplexError {
    /// A simplex needs at least one vertex.
    #[error("A simplex must have at least one vertex")]
    Empty,
    /// The same ball index appears more than once.
    #[error("Duplicate vertex {vertex} in simplex")]
    DuplicateVertex {
        /// The repeated ball index.
        vertex: usize,
    },
}

// =============================================================================
// SIMPLEX
// =============================================================================

/// A canonical set of ball indices.
///
/// # Examples
///
/// ```rust
/// use gcech::core::simplex::Simplex;
///
/// let s = Simplex::new([2, 0, 1]);
/// assert_eq!(s.vertices(), &[0, 1, 2]);
/// assert_eq!(s.dim(), 2);
/// assert_eq!(s, Simplex::new([1, 2, 0]));
/// assert_eq!(s.to_string(), "{0, 1, 2}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Simplex {
    vertices: VertexBuffer,
}

impl Simplex {
    /// Builds a simplex from vertices in any order. Repeated indices collapse.
    #[must_use]
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut vertices: VertexBuffer = vertices.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices }
    }

    /// The 0-simplex `{v}`.
    #[must_use]
    pub fn vertex(v: usize) -> Self {
        let mut vertices = VertexBuffer::new();
        vertices.push(v);
        Self { vertices }
    }

    /// Wraps an already sorted, duplicate-free buffer.
    pub(crate) fn from_sorted(vertices: VertexBuffer) -> Self {
        debug_assert!(vertices.windows(2).all(|w| w[0] < w[1]));
        Self { vertices }
    }

    /// The sorted vertex indices.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of vertices (`dim + 1`).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` only for the degenerate empty set.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Dimension of the simplex (`len - 1`).
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Returns `true` if `v` is a vertex of this simplex.
    #[inline]
    #[must_use]
    pub fn contains(&self, v: usize) -> bool {
        self.vertices.binary_search(&v).is_ok()
    }

    /// The simplex with `v` added.
    #[must_use]
    pub fn with_vertex(&self, v: usize) -> Self {
        let mut vertices = self.vertices.clone();
        if let Err(pos) = vertices.binary_search(&v) {
            vertices.insert(pos, v);
        }
        Self { vertices }
    }

    /// The simplex with `v` removed.
    #[must_use]
    pub fn without_vertex(&self, v: usize) -> Self {
        let vertices = self.vertices.iter().copied().filter(|&u| u != v).collect();
        Self { vertices }
    }

    /// The codimension-1 faces, one per removed vertex.
    ///
    /// A 0-simplex has no facets.
    pub fn facets(&self) -> impl Iterator<Item = Self> + '_ {
        let n = if self.len() > 1 { self.len() } else { 0 };
        (0..n).map(move |skip| {
            let vertices = self
                .vertices
                .iter()
                .enumerate()
                .filter_map(|(i, &v)| (i != skip).then_some(v))
                .collect();
            Self { vertices }
        })
    }

    /// All non-empty proper faces, smallest first.
    #[must_use]
    pub fn proper_faces(&self) -> Vec<Self> {
        (1..self.len())
            .flat_map(|size| combinations(&self.vertices, size).map(Self::from_sorted))
            .collect()
    }

    /// Applies a relabeling `v -> permutation[v]`.
    ///
    /// Returns `None` if some vertex has no image in `permutation`.
    #[must_use]
    pub fn relabel(&self, permutation: &[usize]) -> Option<Self> {
        let mapped: Option<VertexBuffer> = self
            .vertices
            .iter()
            .map(|&v| permutation.get(v).copied())
            .collect();
        mapped.map(Self::new)
    }
}

impl TryFrom<Vec<usize>> for Simplex {
    type Error = SimplexError;

    fn try_from(vertices: Vec<usize>) -> Result<Self, Self::Error> {
        if vertices.is_empty() {
            return Err(SimplexError::Empty);
        }
        let simplex = Self::new(vertices.iter().copied());
        if simplex.len() != vertices.len() {
            let mut seen = VertexBuffer::new();
            for v in vertices {
                if seen.contains(&v) {
                    return Err(SimplexError::DuplicateVertex { vertex: v });
                }
                seen.push(v);
            }
        }
        Ok(simplex)
    }
}

impl From<Simplex> for Vec<usize> {
    fn from(simplex: Simplex) -> Self {
        simplex.vertices.into_vec()
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "}}")
    }
}

// =============================================================================
// COMBINATIONS
// =============================================================================

/// Iterator over the `k`-element subsets of a slice, in lexicographic order of
/// positions.
///
/// # Examples
///
/// ```rust
/// use gcech::core::simplex::combinations;
///
/// let pairs: Vec<Vec<usize>> = combinations(&[3, 5, 7], 2).map(|c| c.to_vec()).collect();
/// assert_eq!(pairs, vec![vec![3, 5], vec![3, 7], vec![5, 7]]);
/// ```
pub fn combinations(items: &[usize], k: usize) -> Combinations<'_> {
    Combinations {
        items,
        positions: (0..k).collect(),
        done: k > items.len(),
    }
}

/// See [`combinations`].
#[derive(Clone, Debug)]
pub struct Combinations<'a> {
    items: &'a [usize],
    positions: SmallBuffer<usize, MAX_PRACTICAL_SIMPLEX_SIZE>,
    done: bool,
}

impl Iterator for Combinations<'_> {
    type Item = VertexBuffer;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.positions.iter().map(|&p| self.items[p]).collect();

        // Advance the rightmost position that still has room.
        let n = self.items.len();
        let k = self.positions.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.positions[i] < n - k + i {
                self.positions[i] += 1;
                for j in i + 1..k {
                    self.positions[j] = self.positions[j - 1] + 1;
                }
                break;
            }
        }
        Some(current)
    }
}

// =============================================================================
// LEVEL
// =============================================================================

/// All simplices of one dimension, sorted and duplicate-free.
///
/// # Examples
///
/// ```rust
/// use gcech::core::simplex::{Level, Simplex};
///
/// let level = Level::new(1, vec![Simplex::new([1, 2]), Simplex::new([0, 1]), Simplex::new([2, 1])]);
/// assert_eq!(level.len(), 2);
/// assert!(level.contains(&Simplex::new([0, 1])));
/// assert_eq!(level.simplices()[0], Simplex::new([0, 1]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    dimension: usize,
    simplices: Vec<Simplex>,
}

impl Level {
    /// Creates a level, sorting and deduplicating `simplices`.
    #[must_use]
    pub fn new(dimension: usize, mut simplices: Vec<Simplex>) -> Self {
        debug_assert!(simplices.iter().all(|s| s.dim() == dimension));
        simplices.sort_unstable();
        simplices.dedup();
        Self {
            dimension,
            simplices,
        }
    }

    /// The dimension shared by every simplex of the level.
    #[inline]
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of simplices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    /// Returns `true` if the level has no simplices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// The simplices in sorted order.
    #[inline]
    #[must_use]
    pub fn simplices(&self) -> &[Simplex] {
        &self.simplices
    }

    /// Iterator over the simplices.
    pub fn iter(&self) -> std::slice::Iter<'_, Simplex> {
        self.simplices.iter()
    }

    /// Membership test by index-set identity.
    #[must_use]
    pub fn contains(&self, simplex: &Simplex) -> bool {
        self.simplices.binary_search(simplex).is_ok()
    }

    /// Consumes the level, returning its simplices.
    #[must_use]
    pub fn into_simplices(self) -> Vec<Simplex> {
        self.simplices
    }
}

impl<'a> IntoIterator for &'a Level {
    type Item = &'a Simplex;
    type IntoIter = std::slice::Iter<'a, Simplex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
