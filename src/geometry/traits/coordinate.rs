//! Scalar abstraction for planar coordinates and radii.
//!
//! Every geometric quantity in this crate (point coordinates, ball radii,
//! distances) is expressed in a scalar type `T: CoordinateScalar`. The trait
//! bundles the floating-point arithmetic from [`num_traits::Float`] with the
//! serialization and thread-safety bounds the complex construction needs.

use num_traits::Float;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::{Debug, Display};

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during coordinate validation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoordinateValidationError {
    /// A coordinate value is invalid (NaN or infinite).
    #[error("Invalid coordinate at index {coordinate_index}: {coordinate_value}")]
    InvalidCoordinate {
        /// Index of the invalid coordinate (0 = x, 1 = y).
        coordinate_index: usize,
        /// Value of the invalid coordinate, as a string.
        coordinate_value: String,
    },
}

/// Default tolerance for f32 floating-point comparisons.
pub const DEFAULT_TOLERANCE_F32: f32 = 1e-6;

/// Default tolerance for f64 floating-point comparisons.
///
/// Used by tests that compare computed intersection points against circle
/// equations; the predicates themselves compare exactly.
pub const DEFAULT_TOLERANCE_F64: f64 = 1e-12;

// =============================================================================
// SUPPORTING TRAITS
// =============================================================================

/// Helper trait for checking finiteness of coordinates.
///
/// # Examples
///
/// ```
/// use gcech::geometry::traits::coordinate::FiniteCheck;
///
/// assert!(3.5f64.is_finite_generic());
/// assert!(!f64::NAN.is_finite_generic());
/// assert!(!f32::INFINITY.is_finite_generic());
/// ```
pub trait FiniteCheck {
    /// Returns true if the value is finite (not NaN or infinite).
    fn is_finite_generic(&self) -> bool;
}

macro_rules! impl_finite_check {
    (float: $($t:ty),*) => {
        $(
            impl FiniteCheck for $t {
                #[inline(always)]
                fn is_finite_generic(&self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_finite_check!(float: f32, f64);

/// Trait alias for the scalar type requirements of planar geometry.
///
/// # Required Traits
///
/// - `Float`: Floating-point arithmetic operations
/// - `FiniteCheck`: Validation of coordinate values
/// - `Default`, `Copy`, `Debug`, `Display`
/// - `Serialize` / `DeserializeOwned`: Serialization support
/// - `Send + Sync`: verification may run on worker threads
///
/// # Examples
///
/// ```rust
/// use gcech::geometry::traits::coordinate::CoordinateScalar;
///
/// fn close<T: CoordinateScalar>(a: T, b: T) -> bool {
///     (a - b).abs() < T::default_tolerance()
/// }
///
/// assert!(close(1.0_f64, 1.0 + 1e-14));
/// assert!(!close(1.0_f32, 1.1));
/// ```
pub trait CoordinateScalar:
    Float
    + FiniteCheck
    + Default
    + Debug
    + Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Returns the default comparison tolerance for this scalar type.
    ///
    /// - `f32`: `1e-6`
    /// - `f64`: `1e-12`
    fn default_tolerance() -> Self;
}

impl CoordinateScalar for f32 {
    #[inline]
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F32
    }
}

impl CoordinateScalar for f64 {
    #[inline]
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F64
    }
}
