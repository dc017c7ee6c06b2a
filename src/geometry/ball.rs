//! Weighted points ("balls") in the plane.
//!
//! A [`Ball`] is a closed disc given by a center and a non-negative radius.
//! Balls are the vertices of a generalized Čech complex: a set of balls spans
//! a simplex exactly when their closed discs share a common point.
//!
//! # Key Features
//!
//! - **Validation**: centers must be finite, radii finite and `>= 0`
//! - **Builder Pattern**: `BallBuilder` plus the [`ball!`](crate::ball) macro
//! - **Serialization**: serde support for persisting configurations

#![forbid(unsafe_code)]

use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::{CoordinateScalar, CoordinateValidationError};
use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during ball validation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BallValidationError {
    /// The center has a NaN or infinite coordinate.
    #[error("Invalid ball center: {source}")]
    InvalidCenter {
        /// The underlying coordinate validation error.
        #[from]
        source: CoordinateValidationError,
    },
    /// The radius is NaN or infinite.
    #[error("Invalid ball radius: {radius} is not finite")]
    NonFiniteRadius {
        /// The offending radius, as a string.
        radius: String,
    },
    /// The radius is negative.
    #[error("Invalid ball radius: {radius} is negative")]
    NegativeRadius {
        /// The offending radius, as a string.
        radius: String,
    },
}

// =============================================================================
// CONVENIENCE MACROS
// =============================================================================

/// Convenience macro for creating balls with less boilerplate.
///
/// # Panics
///
/// Panics if the center is not finite or the radius is negative or not finite.
///
/// # Examples
///
/// ```rust
/// use gcech::ball;
/// use gcech::geometry::ball::Ball;
///
/// let b: Ball<f64> = ball!([1.0, 2.0], 0.5);
/// assert_eq!(b.radius(), 0.5);
/// ```
#[macro_export]
macro_rules! ball {
    ($coords:expr, $radius:expr) => {
        $crate::geometry::ball::BallBuilder::default()
            .center($crate::geometry::point::Point::new($coords))
            .radius($radius)
            .build()
            .expect("Failed to build ball: invalid center or radius")
    };
}

pub use crate::ball;

// =============================================================================
// BALL STRUCT DEFINITION
// =============================================================================

/// A closed disc in the plane.
///
/// # Examples
///
/// ```rust
/// use gcech::geometry::ball::{Ball, BallBuilder};
/// use gcech::geometry::point::Point;
///
/// let b = Ball::new(Point::new([0.0, 0.0]), 2.0).unwrap();
/// assert_eq!(b.center(), &Point::new([0.0, 0.0]));
///
/// let built: Ball<f64> = BallBuilder::default()
///     .center([1.0, 1.0])
///     .radius(0.25)
///     .build()
///     .unwrap();
/// assert_eq!(built.radius(), 0.25);
///
/// assert!(BallBuilder::default().center([0.0, 0.0]).radius(-1.0).build().is_err());
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: CoordinateScalar"))]
#[builder(build_fn(validate = "Self::validate"))]
pub struct Ball<T>
where
    T: CoordinateScalar,
{
    /// Center of the disc.
    #[builder(setter(into))]
    center: Point<T>,
    /// Radius of the disc.
    radius: T,
}

impl<T> BallBuilder<T>
where
    T: CoordinateScalar,
{
    fn validate(&self) -> Result<(), String> {
        if let Some(center) = &self.center {
            center.validate().map_err(|e| e.to_string())?;
        }
        if let Some(radius) = self.radius {
            validate_radius(radius).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

fn validate_radius<T: CoordinateScalar>(radius: T) -> Result<(), BallValidationError> {
    if !radius.is_finite() {
        return Err(BallValidationError::NonFiniteRadius {
            radius: format!("{radius:?}"),
        });
    }
    if radius < T::zero() {
        return Err(BallValidationError::NegativeRadius {
            radius: format!("{radius:?}"),
        });
    }
    Ok(())
}

impl<T> Ball<T>
where
    T: CoordinateScalar,
{
    /// Creates a validated ball.
    ///
    /// # Errors
    ///
    /// Returns [`BallValidationError`] if the center is not finite or the radius
    /// is negative or not finite. A zero radius is allowed (a bare point).
    pub fn new(center: Point<T>, radius: T) -> Result<Self, BallValidationError> {
        let ball = Self { center, radius };
        ball.validate()?;
        Ok(ball)
    }

    /// The center of the disc.
    #[inline]
    #[must_use]
    pub const fn center(&self) -> &Point<T> {
        &self.center
    }

    /// The radius of the disc.
    #[inline]
    #[must_use]
    pub const fn radius(&self) -> T {
        self.radius
    }

    /// Re-checks the ball invariants (used after deserialization).
    ///
    /// # Errors
    ///
    /// See [`Ball::new`].
    pub fn validate(&self) -> Result<(), BallValidationError> {
        self.center.validate()?;
        validate_radius(self.radius)
    }
}

// =============================================================================
// TESTS
// =============================================================================
