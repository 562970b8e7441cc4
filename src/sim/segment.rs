//! Directed line segments and the beam/segment intersection test
//!
//! A segment is stored as an origin plus a direction vector:
//! - begin = origin
//! - end = origin + direction
//!
//! Intersection treats both segments as infinite lines in slope form, then
//! accepts the crossing only if its x coordinate falls strictly inside both
//! segments' x spans.

use serde::{Deserialize, Serialize};

use crate::Vector2;

/// Smallest |direction.x| the slope form can handle
pub const MIN_DIRECTION_X: f64 = 0.01;

/// A directed line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub origin: Vector2,
    pub direction: Vector2,
}

impl Segment {
    pub const fn new(origin: Vector2, direction: Vector2) -> Self {
        Self { origin, direction }
    }

    /// Segment running from `begin` to `end`
    pub fn from_endpoints(begin: Vector2, end: Vector2) -> Self {
        Self {
            origin: begin,
            direction: end - begin,
        }
    }

    #[inline]
    pub fn begin(&self) -> Vector2 {
        self.origin
    }

    #[inline]
    pub fn end(&self) -> Vector2 {
        self.origin + self.direction
    }

    /// Same origin, direction passed through `effective_direction`
    fn working_copy(&self) -> Self {
        Self::new(self.origin, effective_direction(self.direction))
    }

    /// Open x interval covered by the segment
    fn contains_x(&self, x: f64) -> bool {
        let (b, e) = (self.begin().x, self.end().x);
        x > b.min(e) && x < b.max(e)
    }

    /// Slope dy/dx of the segment's line
    #[inline]
    fn slope(&self) -> f64 {
        self.direction.y / self.direction.x
    }

    /// Intersection with another segment, see [`intersect`]
    pub fn intersect(&self, other: &Segment) -> Option<Vector2> {
        intersect(self, other)
    }
}

/// Direction used for slope computation
///
/// Near-vertical directions (|x| < 0.01) get x replaced by 0.01 so the slope
/// stays finite. The nudge biases vertical walls slightly to the right.
#[inline]
pub fn effective_direction(direction: Vector2) -> Vector2 {
    if direction.x.abs() < MIN_DIRECTION_X {
        Vector2::new(MIN_DIRECTION_X, direction.y)
    } else {
        direction
    }
}

/// Intersect two segments
///
/// Returns the crossing point of the two infinite lines when its x coordinate
/// lies strictly inside the x span of both (nudged) segments. Parallel lines
/// produce a non-finite crossing and are reported as no hit.
///
/// Containment only looks at x. That is sufficient for the field geometry,
/// where no working segment has zero x extent, but it is not a general 2D
/// segment test.
pub fn intersect(s1: &Segment, s2: &Segment) -> Option<Vector2> {
    let r1 = s1.working_copy();
    let r2 = s2.working_copy();

    let t1 = r1.slope();
    let t2 = r2.slope();
    let (x1, y1) = (r1.origin.x, r1.origin.y);
    let (x2, y2) = (r2.origin.x, r2.origin.y);

    let sx = (t1 * x1 - t2 * x2 - y1 + y2) / (t1 - t2);
    let sy = t1 * (sx - x1) + y1;

    if !sx.is_finite() || !sy.is_finite() {
        return None;
    }

    if r1.contains_x(sx) && r2.contains_x(sx) {
        Some(Vector2::new(sx, sy))
    } else {
        None
    }
}
