//! # gcech
//!
//! This is a library for computing the generalized
//! [Čech complex](https://en.wikipedia.org/wiki/%C4%8Cech_complex) of a set of
//! weighted points ("balls") in the plane. A set of balls spans a simplex
//! exactly when their closed discs share at least one point; unlike the
//! classical Čech complex, every ball may have its own radius.
//!
//! # Features
//!
//! - Level-by-level construction from an overlap graph
//! - Witness-point caching: supersets of a verified simplex are usually
//!   certified by a single disc test
//! - An exhaustive baseline strategy with identical output, for cross-checking
//! - Generic floating-point coordinates (`f32`, `f64`, see
//!   [`CoordinateScalar`](geometry::traits::coordinate::CoordinateScalar))
//! - Optional rayon-parallel verification within a level (`parallel` feature)
//! - Serialization/Deserialization with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use gcech::prelude::*;
//!
//! // Three unit discs at the corners of an equilateral triangle of side 1.8
//! // overlap pairwise but have no point in common.
//! let h = 1.8 * 3.0_f64.sqrt() / 2.0;
//! let positions = [[0.0, 0.0], [1.8, 0.0], [0.9, h]];
//! let radii = [1.0, 1.0, 1.0];
//!
//! let complex = construct(&positions, &radii, None).unwrap();
//! assert_eq!(complex.f_vector(), vec![3, 3]);
//! assert!(!complex.contains(&Simplex::new([0, 1, 2])));
//!
//! // Shrinking the triangle closes the hole.
//! let positions = [[0.0, 0.0], [1.0, 0.0], [0.5, 0.8]];
//! let complex = construct(&positions, &radii, None).unwrap();
//! assert_eq!(complex.f_vector(), vec![3, 3, 1]);
//! ```
//!
//! # Choosing a Strategy
//!
//! ```rust
//! use gcech::prelude::*;
//!
//! let balls = generate_random_balls_seeded::<f64>(30, (0.0, 5.0), (0.3, 0.9), 7).unwrap();
//! let (positions, radii) = split_balls(&balls);
//!
//! let fast = construct_with_options(&positions, &radii, ConstructionOptions::new()).unwrap();
//! let slow = construct_with_options(
//!     &positions,
//!     &radii,
//!     ConstructionOptions::new().with_strategy(StrategyKind::Baseline),
//! )
//! .unwrap();
//!
//! assert_eq!(fast.levels(), slow.levels());
//! assert!(fast.is_closed_under_faces());
//! ```
//!
//! # Scope
//!
//! The complex is produced as sets of simplices per dimension. Filtrations,
//! boundary matrices and homology are left to downstream code.

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module contains the combinatorial structures and the
/// construction algorithms: simplices, levels, the overlap graph, candidate
/// generation, witness verification and the assembled [`CechComplex`](core::complex::CechComplex).
pub mod core {
    /// Candidate generation, witness verification and construction strategies
    pub mod algorithms {
        /// Exhaustive strategy used as a reference
        pub mod baseline;
        pub mod candidates;
        pub mod witness;
        /// Strategy that reuses witnesses of verified simplices
        pub mod witness_caching;
    }
    /// High-performance collection types
    pub mod collections;
    pub mod complex;
    pub mod neighbor_graph;
    pub mod simplex;
    /// Traits for construction strategies.
    pub mod traits {
        pub mod construction_strategy;
        pub use construction_strategy::*;
    }
    // Re-export the `core` modules.
    pub use complex::*;
    pub use neighbor_graph::*;
    pub use simplex::*;
    pub use traits::*;
    // Note: collections module not re-exported here to avoid namespace pollution
}

/// Contains geometric types: points, balls, predicates and generators.
///
/// All geometry is generic over a scalar `T: CoordinateScalar` and lives in
/// the plane.
pub mod geometry {
    pub mod ball;
    pub mod point;
    pub mod predicates;
    /// Random configuration generators
    pub mod util;
    /// Traits module containing the coordinate scalar abstraction.
    pub mod traits {
        pub mod coordinate;
        pub use coordinate::*;
    }
    pub use ball::*;
    pub use point::*;
    pub use predicates::*;
    pub use traits::*;
    pub use util::*;
}

/// A prelude module that re-exports commonly used types and macros.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    // Re-export from core
    pub use crate::core::{
        algorithms::{
            baseline::BaselineConstruction,
            witness::{Verification, VerificationMethod, WitnessVerifier},
            witness_caching::WitnessCachingConstruction,
        },
        complex::*,
        neighbor_graph::NeighborGraph,
        simplex::{Level, Simplex},
        traits::construction_strategy::*,
    };

    pub use crate::core::collections::{
        FastHashMap, FastHashSet, SmallBuffer, WitnessMap, fast_hash_map_with_capacity,
        fast_hash_set_with_capacity,
    };

    // Re-export from geometry
    pub use crate::geometry::{
        ball::*, point::*, predicates::*, traits::coordinate::*, util::*,
    };

    // Convenience macros
    pub use crate::ball;
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
