use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet, FxHasher};
use smallvec::SmallVec;

use crate::geometry::point::Point;

use crate::core::simplex::Simplex;

// =============================================================================
// CORE OPTIMIZED TYPES
// =============================================================================

/// Optimized `HashMap` type for performance-critical operations.
/// Uses `FastHasher` (`rustc_hash::FxHasher`) for faster hashing in non-cryptographic contexts.
///
/// # Security Warning
///
/// ⚠️ **Not DoS-resistant**: Do not use with attacker-controlled keys.
///
/// # Examples
///
/// ```rust
/// use gcech::core::collections::FastHashMap;
///
/// let mut map: FastHashMap<u64, usize> = FastHashMap::default();
/// map.insert(123, 456);
/// ```
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// Fast non-cryptographic hasher alias for internal collections.
pub type FastHasher = FxHasher;

/// Build hasher that instantiates [`FastHasher`].
pub type FastBuildHasher = FxBuildHasher;

/// Re-export the Entry enum for `FastHashMap`, used for single check-and-insert
/// operations on the witness memo.
pub use std::collections::hash_map::Entry;

/// Optimized `HashSet` type for performance-critical operations.
/// Uses `FastHasher` (`rustc_hash::FxHasher`) for faster hashing in non-cryptographic contexts.
///
/// # Examples
///
/// ```rust
/// use gcech::core::collections::FastHashSet;
///
/// let mut set: FastHashSet<usize> = FastHashSet::default();
/// set.insert(7);
/// assert!(set.contains(&7));
/// ```
pub type FastHashSet<T> = FxHashSet<T>;

/// Small-optimized Vec that uses stack allocation for small collections.
///
/// # Size Guidelines
///
/// - **N=2**: Witness candidates of one circle pair
/// - **N=8**: Simplex vertex lists (simplices rarely exceed dimension 7)
/// - **N=16**: Per-ball neighbor scratch buffers
///
/// # Examples
///
/// ```rust
/// use gcech::core::collections::SmallBuffer;
///
/// let mut buffer: SmallBuffer<i32, 8> = SmallBuffer::new();
/// for i in 0..5 {
///     buffer.push(i);
/// }
/// assert!(!buffer.spilled());
/// ```
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

// =============================================================================
// SEMANTIC SIZE CONSTANTS AND TYPE ALIASES
// =============================================================================

/// Inline capacity for simplex vertex lists.
///
/// Planar Čech complexes of moderate density rarely produce simplices above
/// dimension 7, so 8 vertices fit on the stack in the common case.
pub const MAX_PRACTICAL_SIMPLEX_SIZE: usize = 8;

/// Stack-first buffer of ball indices forming one simplex.
pub type VertexBuffer = SmallBuffer<usize, MAX_PRACTICAL_SIMPLEX_SIZE>;

/// Memo table from a verified simplex to a point lying in all of its discs.
pub type WitnessMap<T> = FastHashMap<Simplex, Point<T>>;

/// Creates a [`FastHashMap`] with the given capacity.
#[inline]
#[must_use]
pub fn fast_hash_map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    FastHashMap::with_capacity_and_hasher(capacity, FastBuildHasher::default())
}

/// Creates a [`FastHashSet`] with the given capacity.
#[inline]
#[must_use]
pub fn fast_hash_set_with_capacity<T>(capacity: usize) -> FastHashSet<T> {
    FastHashSet::with_capacity_and_hasher(capacity, FastBuildHasher::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_collections_basic_operations() {
        let mut map: FastHashMap<u64, usize> = fast_hash_map_with_capacity(4);
        assert!(map.is_empty());
        map.insert(123, 456);
        assert_eq!(map.get(&123), Some(&456));

        let mut set: FastHashSet<u64> = fast_hash_set_with_capacity(4);
        set.insert(789);
        assert!(set.contains(&789));
        assert!(!set.contains(&999));
    }

    #[test]
    fn test_vertex_buffer_stack_allocation() {
        let mut buffer = VertexBuffer::new();
        for i in 0..MAX_PRACTICAL_SIMPLEX_SIZE {
            buffer.push(i);
        }
        assert!(!buffer.spilled());
        buffer.push(MAX_PRACTICAL_SIMPLEX_SIZE);
        assert!(buffer.spilled());
    }

    #[test]
    fn test_witness_map_keys_by_simplex() {
        let mut memo: WitnessMap<f64> = WitnessMap::default();
        memo.insert(Simplex::new([2, 0, 1]), Point::new([0.0, 0.0]));
        assert!(memo.contains_key(&Simplex::new([0, 1, 2])));
        assert!(matches!(
            memo.entry(Simplex::new([1, 2, 0])),
            Entry::Occupied(_)
        ));
    }
}
