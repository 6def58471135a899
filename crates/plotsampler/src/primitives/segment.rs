//! Value records shared by the refinement and assembly stages.
//!
//! ## Purpose
//!
//! This module defines the three small value types the sampler moves around:
//! an evaluated abscissa ([`Knot`]), a candidate sub-interval ([`Segment`]) and
//! an emitted output pair ([`SamplePoint`]).
//!
//! ## Design notes
//!
//! * **Plain data**: All types are `Copy`; segments are created and consumed within
//!   a single refinement step and never shared.
//! * **Two coordinates**: A knot carries both the raw `x` (where the function was
//!   evaluated) and the transformed `x_t` (where it is plotted).
//!
//! ## Invariants
//!
//! * A live segment satisfies `start.x < end.x`.
//! * A segment whose transformed endpoints coincide is degenerate and is discarded.

// External dependencies
use num_traits::Float;

// ============================================================================
// Knot
// ============================================================================

/// A raw abscissa together with its transformed coordinate and function value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot<T> {
    /// Raw domain value, the function argument.
    pub x: T,

    /// Transformed coordinate used for spacing decisions.
    pub x_t: T,

    /// Function value at the raw `x`.
    pub y: T,
}

impl<T: Float> Knot<T> {
    /// Create a knot from already computed coordinates.
    #[inline]
    pub fn new(x: T, x_t: T, y: T) -> Self {
        Self { x, x_t, y }
    }

    /// The output pair `(x_t, y)` for this knot.
    #[inline]
    pub fn to_point(self) -> SamplePoint<T> {
        SamplePoint {
            x: self.x_t,
            y: self.y,
        }
    }
}

// ============================================================================
// Segment
// ============================================================================

/// A candidate sub-interval awaiting a refinement decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T> {
    /// Left endpoint.
    pub start: Knot<T>,

    /// Right endpoint.
    pub end: Knot<T>,

    /// Deviations below this value mean the segment is flat enough.
    pub deviation_threshold: T,

    /// Minimum transformed distance a split point must keep from either endpoint.
    pub step_threshold: T,
}

impl<T: Float> Segment<T> {
    /// Whether the segment is empty in raw space or collapsed in transformed space.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.start.x < self.end.x) || self.start.x_t == self.end.x_t
    }

    /// Whether both endpoint values are finite (the chord is well defined).
    #[inline]
    pub fn has_finite_ends(&self) -> bool {
        self.start.y.is_finite() && self.end.y.is_finite()
    }

    /// Signed width in transformed space.
    #[inline]
    pub fn range_t(&self) -> T {
        self.end.x_t - self.start.x_t
    }

    /// Raw abscissa halfway between the endpoints.
    #[inline]
    pub fn midpoint_x(&self) -> T {
        midpoint(self.start.x, self.end.x)
    }
}

/// Halfway point of `a` and `b`, finite whenever both inputs are.
///
/// Halving before adding keeps the sum in range near `T::max_value()`; for
/// normal numbers the result equals `(a + b) / 2` rounded once.
#[inline]
pub fn midpoint<T: Float>(a: T, b: T) -> T {
    let half = T::from(0.5).unwrap();
    a * half + b * half
}

// ============================================================================
// Sample Point
// ============================================================================

/// One emitted `(x_transformed, y)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint<T> {
    /// Transformed abscissa.
    pub x: T,

    /// Function value at the untransformed abscissa.
    pub y: T,
}
