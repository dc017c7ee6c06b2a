//! Geometric predicates on points and balls.
//!
//! This module contains the planar primitives consumed by the complex
//! construction: distances, closed-disc containment, disc nesting, pairwise
//! overlap and the circle-circle intersection construction used to produce
//! witness candidates.
//!
//! All containment tests are closed (boundary points count as inside). Squared
//! quantities are formed in a frame scaled by the largest length involved, so
//! configurations far below or above unit size neither underflow to zero nor
//! overflow to infinity.

use crate::geometry::ball::Ball;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use std::fmt;

// =============================================================================
// DISTANCES
// =============================================================================

/// Squared Euclidean distance between two points.
///
/// Underflows or overflows for coordinates far from unit size; the
/// containment predicates below do not go through it.
///
/// # Examples
///
/// ```
/// use gcech::geometry::point::Point;
/// use gcech::geometry::predicates::squared_distance;
///
/// let d2 = squared_distance(&Point::new([0.0, 0.0]), &Point::new([3.0, 4.0]));
/// assert_eq!(d2, 25.0);
/// ```
#[inline]
#[must_use]
pub fn squared_distance<T>(a: &Point<T>, b: &Point<T>) -> T
where
    T: CoordinateScalar,
{
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    dx * dx + dy * dy
}

/// Euclidean distance between two points, computed with `hypot`.
///
/// # Examples
///
/// ```
/// use gcech::geometry::point::Point;
/// use gcech::geometry::predicates::distance;
///
/// assert_eq!(distance(&Point::new([1.0, 1.0]), &Point::new([4.0, 5.0])), 5.0);
/// ```
#[inline]
#[must_use]
pub fn distance<T>(a: &Point<T>, b: &Point<T>) -> T
where
    T: CoordinateScalar,
{
    (b.x() - a.x()).hypot(b.y() - a.y())
}

/// Distance between the centers of two balls.
#[inline]
#[must_use]
pub fn center_distance<T>(a: &Ball<T>, b: &Ball<T>) -> T
where
    T: CoordinateScalar,
{
    distance(a.center(), b.center())
}

// =============================================================================
// CONTAINMENT AND OVERLAP
// =============================================================================

/// Returns `true` if `p` lies in the closed disc of `ball`.
///
/// # Examples
///
/// ```
/// use gcech::ball;
/// use gcech::geometry::point::Point;
/// use gcech::geometry::predicates::disc_contains;
///
/// let b = ball!([0.0, 0.0], 1.0);
/// assert!(disc_contains(&b, &Point::new([1.0, 0.0]))); // boundary counts
/// assert!(!disc_contains(&b, &Point::new([1.0, 0.1])));
/// ```
#[inline]
#[must_use]
pub fn disc_contains<T>(ball: &Ball<T>, p: &Point<T>) -> bool
where
    T: CoordinateScalar,
{
    let dx = (p.x() - ball.center().x()).abs();
    let dy = (p.y() - ball.center().y()).abs();
    let r = ball.radius();
    let scale = dx.max(dy).max(r);
    if scale == T::zero() {
        return true;
    }
    let (dx, dy, r) = (dx / scale, dy / scale, r / scale);
    dx * dx + dy * dy <= r * r
}

/// Returns `true` if the disc of `inner` is contained in the disc of `outer`.
///
/// Tested as `distance(inner, outer) <= radius(outer) - radius(inner)`, which
/// can only hold when `outer` is at least as large as `inner`.
///
/// # Examples
///
/// ```
/// use gcech::ball;
/// use gcech::geometry::predicates::ball_inside_ball;
///
/// let small = ball!([0.5, 0.0], 1.0);
/// let big = ball!([0.0, 0.0], 2.0);
/// assert!(ball_inside_ball(&small, &big));
/// assert!(!ball_inside_ball(&big, &small));
/// ```
#[inline]
#[must_use]
pub fn ball_inside_ball<T>(inner: &Ball<T>, outer: &Ball<T>) -> bool
where
    T: CoordinateScalar,
{
    if outer.radius() < inner.radius() {
        return false;
    }
    center_distance(inner, outer) <= outer.radius() - inner.radius()
}

/// Returns `true` if the closed discs of `a` and `b` share at least one point.
#[inline]
#[must_use]
pub fn balls_overlap<T>(a: &Ball<T>, b: &Ball<T>) -> bool
where
    T: CoordinateScalar,
{
    center_distance(a, b) <= a.radius() + b.radius()
}

// =============================================================================
// CIRCLE-CIRCLE INTERSECTION
// =============================================================================

/// Outcome of intersecting the boundary circles of two balls.
///
/// Only [`Tangent`](Self::Tangent) and [`Crossing`](Self::Crossing) carry
/// points; every other variant names a configuration without a finite set of
/// boundary crossings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CircleIntersection<T> {
    /// The discs are disjoint (`d > r₀ + r₁`).
    Disjoint,
    /// One disc lies strictly inside the other (`d < |r₀ - r₁|`).
    Nested,
    /// Same center, same radius: infinitely many common boundary points.
    Coincident,
    /// Same center, different radii. Handled explicitly so the chord formula
    /// never divides by a zero center distance.
    Concentric,
    /// The circles touch in exactly one point.
    Tangent(Point<T>),
    /// The circles cross in two points.
    Crossing([Point<T>; 2]),
}

impl<T> CircleIntersection<T> {
    /// The boundary crossing points (empty, one, or two).
    #[must_use]
    pub fn points(&self) -> &[Point<T>] {
        match self {
            Self::Tangent(p) => std::slice::from_ref(p),
            Self::Crossing(ps) => ps,
            Self::Disjoint | Self::Nested | Self::Coincident | Self::Concentric => &[],
        }
    }

    /// Returns `true` if there is no finite crossing point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}

impl<T> fmt::Display for CircleIntersection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disjoint => write!(f, "DISJOINT"),
            Self::Nested => write!(f, "NESTED"),
            Self::Coincident => write!(f, "COINCIDENT"),
            Self::Concentric => write!(f, "CONCENTRIC"),
            Self::Tangent(_) => write!(f, "TANGENT"),
            Self::Crossing(_) => write!(f, "CROSSING"),
        }
    }
}

/// Number of times a crossing pair is pulled toward the chord midpoint before
/// giving up on rounding.
const NUDGE_STEPS: usize = 16;

/// Intersects the boundary circles of two balls.
///
/// Uses the chord construction: with `d` the center distance, the chord
/// midpoint lies at distance `a = (r₀² − r₁² + d²) / 2d` from the first center
/// along the center line, and the crossings are offset from it by
/// `h = sqrt(r₀² − a²)` perpendicular to that line. Lengths are divided by
/// `max(r₀, r₁, d)` before squaring and scaled back afterwards.
///
/// Rounding can leave a computed crossing a few ulps outside one of the two
/// discs. Crossings are therefore shortened toward the chord midpoint, which
/// lies inside both discs, until [`disc_contains`] accepts them for both balls.
///
/// Crossing points are always returned in the same order for the same
/// argument order: first the point to the right of the directed line from
/// `a`'s center to `b`'s center, then the point to its left.
///
/// # Examples
///
/// ```
/// use gcech::ball;
/// use gcech::geometry::point::Point;
/// use gcech::geometry::predicates::{CircleIntersection, circle_intersections};
///
/// let a = ball!([0.0, 0.0], 1.0);
/// let b = ball!([2.0, 0.0], 1.0);
/// assert_eq!(circle_intersections(&a, &b), CircleIntersection::Tangent(Point::new([1.0, 0.0])));
///
/// let c = ball!([0.0, 0.0], 3.0);
/// assert_eq!(circle_intersections(&a, &c), CircleIntersection::Concentric);
/// ```
#[must_use]
pub fn circle_intersections<T>(a: &Ball<T>, b: &Ball<T>) -> CircleIntersection<T>
where
    T: CoordinateScalar,
{
    let (r0, r1) = (a.radius(), b.radius());
    let d = center_distance(a, b);

    if d > r0 + r1 {
        return CircleIntersection::Disjoint;
    }
    if d == T::zero() {
        return if r0 == r1 {
            CircleIntersection::Coincident
        } else {
            CircleIntersection::Concentric
        };
    }
    if d < (r0 - r1).abs() {
        return CircleIntersection::Nested;
    }

    let two = T::one() + T::one();
    let (x0, y0) = (a.center().x(), a.center().y());
    let ux = (b.center().x() - x0) / d;
    let uy = (b.center().y() - y0) / d;

    let scale = d.max(r0).max(r1);
    let (s0, s1, sd) = (r0 / scale, r1 / scale, d / scale);

    let along = (s0 - s1) * (s0 + s1) / (two * sd) + sd / two;
    let mid = Point::new([x0 + along * scale * ux, y0 + along * scale * uy]);

    // Tangency lands here exactly or within rounding of zero.
    let h_sq = (s0 - along) * (s0 + along);
    if h_sq <= T::zero() {
        return CircleIntersection::Tangent(mid);
    }
    let h = h_sq.sqrt() * scale;

    let crossings = |h: T| {
        [
            Point::new([mid.x() + h * uy, mid.y() - h * ux]),
            Point::new([mid.x() - h * uy, mid.y() + h * ux]),
        ]
    };
    let in_both = |p: &Point<T>| disc_contains(a, p) && disc_contains(b, p);

    let four = two + two;
    let mut shrink = T::zero();
    let mut step = T::epsilon();
    for _ in 0..NUDGE_STEPS {
        let points = crossings(h * (T::one() - shrink));
        if points.iter().all(in_both) {
            return CircleIntersection::Crossing(points);
        }
        shrink = step;
        step = step * four;
    }

    CircleIntersection::Crossing(crossings(h))
}

// =============================================================================
// TESTS
// =============================================================================
