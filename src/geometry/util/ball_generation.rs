//! Random ball generation functions.
//!
//! Seeded generators for reproducible ball configurations, used by the
//! property tests, the benchmarks and the demo program.

use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::geometry::ball::Ball;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Errors from random ball generation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RandomBallGenerationError {
    /// The coordinate range is empty or not finite.
    #[error("Invalid coordinate range: minimum {min} must be less than maximum {max}")]
    InvalidRange {
        /// Lower bound, formatted.
        min: String,
        /// Upper bound, formatted.
        max: String,
    },
    /// The radius range is reversed, negative or not finite.
    #[error("Invalid radius range [{min}, {max}]: need 0 <= min <= max")]
    InvalidRadiusRange {
        /// Lower bound, formatted.
        min: String,
        /// Upper bound, formatted.
        max: String,
    },
}

/// Generate `n_balls` balls with a seeded RNG.
///
/// Center coordinates are drawn uniformly from `coord_range` (half-open) and
/// radii uniformly from `radius_range` (closed, so a degenerate range yields
/// equal radii).
///
/// # Errors
///
/// * `RandomBallGenerationError::InvalidRange` if the coordinate range is
///   empty or not finite
/// * `RandomBallGenerationError::InvalidRadiusRange` if the radius range is
///   reversed, negative or not finite
///
/// # Examples
///
/// ```
/// use gcech::geometry::util::generate_random_balls_seeded;
///
/// let a = generate_random_balls_seeded::<f64>(20, (-5.0, 5.0), (0.5, 1.5), 42).unwrap();
/// let b = generate_random_balls_seeded::<f64>(20, (-5.0, 5.0), (0.5, 1.5), 42).unwrap();
/// assert_eq!(a, b);
///
/// // Equal radii are allowed.
/// let unit = generate_random_balls_seeded::<f64>(5, (0.0, 1.0), (1.0, 1.0), 7).unwrap();
/// assert!(unit.iter().all(|ball| ball.radius() == 1.0));
///
/// assert!(generate_random_balls_seeded::<f64>(5, (1.0, 1.0), (0.5, 1.0), 7).is_err());
/// ```
pub fn generate_random_balls_seeded<T>(
    n_balls: usize,
    coord_range: (T, T),
    radius_range: (T, T),
    seed: u64,
) -> Result<Vec<Ball<T>>, RandomBallGenerationError>
where
    T: CoordinateScalar + SampleUniform,
{
    let (lo, hi) = coord_range;
    if !(lo.is_finite() && hi.is_finite() && lo < hi) {
        return Err(RandomBallGenerationError::InvalidRange {
            min: format!("{lo:?}"),
            max: format!("{hi:?}"),
        });
    }

    let (r_lo, r_hi) = radius_range;
    if !(r_lo.is_finite() && r_hi.is_finite() && T::zero() <= r_lo && r_lo <= r_hi) {
        return Err(RandomBallGenerationError::InvalidRadiusRange {
            min: format!("{r_lo:?}"),
            max: format!("{r_hi:?}"),
        });
    }

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut balls = Vec::with_capacity(n_balls);

    for _ in 0..n_balls {
        let center = Point::new([rng.random_range(lo..hi), rng.random_range(lo..hi)]);
        let radius = rng.random_range(r_lo..=r_hi);
        // Unreachable after the range checks above.
        let ball = Ball::new(center, radius).map_err(|_| {
            RandomBallGenerationError::InvalidRadiusRange {
                min: format!("{r_lo:?}"),
                max: format!("{r_hi:?}"),
            }
        })?;
        balls.push(ball);
    }

    Ok(balls)
}

/// Split balls into parallel position and radius vectors, the input shape of
/// [`construct`](crate::core::complex::construct).
#[must_use]
pub fn split_balls<T>(balls: &[Ball<T>]) -> (Vec<[T; 2]>, Vec<T>)
where
    T: CoordinateScalar,
{
    balls
        .iter()
        .map(|ball| (*ball.center().coords(), ball.radius()))
        .unzip()
}
