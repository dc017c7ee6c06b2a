//! High-performance collection types for complex construction.
//!
//! Fast hashing (`rustc-hash`) for the simplex-keyed memo and deduplication
//! sets, and stack-first buffers (`smallvec`) for simplex vertex lists.

mod aliases;

pub use aliases::*;
