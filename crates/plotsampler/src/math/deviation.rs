//! Deviation of a point from a segment chord.
//!
//! ## Purpose
//!
//! This module computes the refinement trigger: how far a candidate point lies
//! from the straight line joining a segment's endpoints, measured in
//! transformed-x / y space.
//!
//! ## Key concepts
//!
//! For endpoints `(x0, y0)` and `(x1, y1)` in transformed space:
//!
//! ```text
//! x_range  = x1 - x0
//! y_range  = y1 - y0
//! addendum = x1 * y0 - y1 * x0
//! divisor  = x_range² + y_range²
//!
//! deviation(x_t, y) = |y_range * x_t - x_range * y + addendum| / divisor
//! ```
//!
//! The numerator is the perpendicular distance times the chord length; dividing
//! by the squared length makes the measure relative to the segment size.
//!
//! ## Invariants
//!
//! * Deviation is zero for points on the chord, including both endpoints.
//! * NaN inputs yield NaN; callers decide how to rank it.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::segment::Knot;

// ============================================================================
// Chord
// ============================================================================

/// Precomputed line through two segment endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord<T> {
    x_range: T,
    y_range: T,
    addendum: T,
    divisor: T,
}

impl<T: Float> Chord<T> {
    /// Build the chord joining `start` and `end` in transformed space.
    pub fn through(start: &Knot<T>, end: &Knot<T>) -> Self {
        let x_range = end.x_t - start.x_t;
        let y_range = end.y - start.y;
        Self {
            x_range,
            y_range,
            addendum: end.x_t * start.y - end.y * start.x_t,
            divisor: x_range * x_range + y_range * y_range,
        }
    }

    /// Relative perpendicular distance of `(x_t, y)` from the chord.
    #[inline]
    pub fn deviation(&self, x_t: T, y: T) -> T {
        (self.y_range * x_t - self.x_range * y + self.addendum).abs() / self.divisor
    }
}
