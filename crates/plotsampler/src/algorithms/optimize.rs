//! Maximum chord deviation inside a segment.
//!
//! ## Purpose
//!
//! This module finds the point of a segment that lies farthest from the chord
//! joining its endpoints. That point is both the refinement trigger (how far
//! from linear is the curve here?) and the preferred split location.
//!
//! ## Design notes
//!
//! * **Observed best**: The result is the best point seen across *all* objective
//!   evaluations, not the abscissa the maximizer reports; the maximizer may stop
//!   next to a point it already evaluated and found better.
//! * **NaN ranking**: An evaluation with NaN deviation never replaces the current best.
//! * **Failure containment**: If the maximizer fails, the result collapses to the
//!   segment start with deviation `-∞`, which the driver reads as "do not split".
//!
//! ## Invariants
//!
//! * The reported knot was evaluated with the segment's function and transform.
//! * The reported deviation is never NaN.
//!
//! ## Non-goals
//!
//! * This module does not decide whether to split (handled by `refine`).

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::math::deviation::Chord;
use crate::math::function::{knot_at, Transform, UnaryFunction};
use crate::math::optimizer::Maximizer;
use crate::primitives::segment::{Knot, Segment};

// ============================================================================
// Deviation Peak
// ============================================================================

/// The farthest-from-chord point found inside a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationPeak<T> {
    /// Relative perpendicular distance from the chord.
    pub deviation: T,

    /// The evaluated point achieving `deviation`.
    pub knot: Knot<T>,
}

impl<T: Float> DeviationPeak<T> {
    /// The "no improvement" result: segment start, deviation `-∞`.
    #[inline]
    pub fn none(segment: &Segment<T>) -> Self {
        Self {
            deviation: T::neg_infinity(),
            knot: segment.start,
        }
    }
}

// ============================================================================
// Optimizer
// ============================================================================

/// Locate the point of maximum chord deviation over `[segment.start.x, segment.end.x]`.
///
/// Both endpoint values are expected to be finite; the driver falls back to
/// bisection otherwise.
pub fn maximize_deviation<T, F, X, M>(
    function: &F,
    transform: &X,
    maximizer: &M,
    segment: &Segment<T>,
) -> DeviationPeak<T>
where
    T: Float,
    F: UnaryFunction<T> + ?Sized,
    X: Transform<T> + ?Sized,
    M: Maximizer<T> + ?Sized,
{
    let chord = Chord::through(&segment.start, &segment.end);
    let mut best = DeviationPeak::none(segment);

    let outcome = maximizer.maximize(
        |x| {
            let knot = knot_at(x, function, transform);
            let deviation = chord.deviation(knot.x_t, knot.y);
            // `>` is false for NaN, so NaN never displaces the best
            if deviation > best.deviation {
                best = DeviationPeak { deviation, knot };
            }
            deviation
        },
        segment.start.x,
        segment.end.x,
    );

    match outcome {
        Ok(_) => best,
        Err(err) => {
            trace!(
                "maximizer failed on [{}, {}]: {}",
                segment.start.x.to_f64().unwrap_or(f64::NAN),
                segment.end.x.to_f64().unwrap_or(f64::NAN),
                err
            );
            DeviationPeak::none(segment)
        }
    }
}
