//! Planar points.
//!
//! Points are immutable once created. Equality follows IEEE 754 semantics on
//! the coordinates; no hashing is provided because points are never used as
//! keys (simplices are keyed by their vertex indices instead).

#![forbid(unsafe_code)]

use crate::geometry::traits::coordinate::{CoordinateScalar, CoordinateValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// POINT STRUCT DEFINITION
// =============================================================================

/// A point in the plane with coordinates of scalar type `T`.
///
/// # Examples
///
/// ```rust
/// use gcech::geometry::point::Point;
///
/// let p = Point::new([1.0, 2.0]);
/// assert_eq!(p.coords(), &[1.0, 2.0]);
/// assert_eq!(p.x(), 1.0);
/// assert_eq!(p.y(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point<T> {
    coords: [T; 2],
}

// =============================================================================
// PUBLIC API
// =============================================================================

impl<T> Point<T>
where
    T: CoordinateScalar,
{
    /// Creates a point from its `[x, y]` coordinates.
    #[inline]
    #[must_use]
    pub const fn new(coords: [T; 2]) -> Self {
        Self { coords }
    }

    /// The origin `(0, 0)`.
    #[inline]
    #[must_use]
    pub fn origin() -> Self {
        Self::new([T::zero(), T::zero()])
    }

    /// Returns the coordinates as `[x, y]`.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> &[T; 2] {
        &self.coords
    }

    /// The x coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> T {
        self.coords[0]
    }

    /// The y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> T {
        self.coords[1]
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// Checks that both coordinates are finite.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateValidationError::InvalidCoordinate`] naming the first
    /// NaN or infinite coordinate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gcech::geometry::point::Point;
    ///
    /// assert!(Point::new([0.0, 1.0]).validate().is_ok());
    /// assert!(Point::new([0.0, f64::NAN]).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoordinateValidationError> {
        for (coordinate_index, c) in self.coords.iter().enumerate() {
            if !c.is_finite() {
                return Err(CoordinateValidationError::InvalidCoordinate {
                    coordinate_index,
                    coordinate_value: format!("{c:?}"),
                });
            }
        }
        Ok(())
    }
}

impl<T> From<[T; 2]> for Point<T>
where
    T: CoordinateScalar,
{
    fn from(coords: [T; 2]) -> Self {
        Self::new(coords)
    }
}

impl<T> From<(T, T)> for Point<T>
where
    T: CoordinateScalar,
{
    fn from((x, y): (T, T)) -> Self {
        Self::new([x, y])
    }
}

impl<T> fmt::Display for Point<T>
where
    T: CoordinateScalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.coords[0], self.coords[1])
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let p: Point<f64> = Point::new([3.0, -4.5]);
        assert_eq!(p.x(), 3.0);
        assert_eq!(p.y(), -4.5);
        assert_eq!(*p.coords(), [3.0, -4.5]);
        assert_eq!(Point::<f32>::origin(), Point::new([0.0, 0.0]));
    }

    #[test]
    fn test_point_conversions() {
        let a: Point<f64> = [1.0, 2.0].into();
        let b: Point<f64> = (1.0, 2.0).into();
        assert_eq!(a, b);
    }

    #[test]
    fn test_point_validation_reports_first_bad_coordinate() {
        let err = Point::new([f64::INFINITY, f64::NAN]).validate().unwrap_err();
        assert!(matches!(
            err,
            CoordinateValidationError::InvalidCoordinate {
                coordinate_index: 0,
                ..
            }
        ));
        assert!(!Point::new([0.0_f32, f32::NAN]).is_finite());
    }

    #[test]
    fn test_point_display_and_serde() {
        let p = Point::new([0.5_f64, -1.0]);
        assert_eq!(p.to_string(), "(0.5, -1)");

        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[0.5,-1.0]");
        let back: Point<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
