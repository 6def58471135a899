//! Transformed-coordinate targeting by bisection.
//!
//! ## Purpose
//!
//! When a proposed split point lands too close to a segment end in transformed
//! space, the driver asks for a raw abscissa whose transformed coordinate sits
//! at a chosen target instead. The transform has no inverse available, so this
//! module searches for one.
//!
//! ## Design notes
//!
//! * **Sign bisection**: The trial point replaces the bracket end lying on the same side of
//!   the target as itself, so a monotone transform keeps the target bracketed. A NaN
//!   trial point replaces the end farther from the target instead.
//! * **Best tracking**: The closest point seen so far is returned, not the last trial point.
//! * **Bounded**: At most [`MAX_TRACE_STEPS`] trial points; stops early on an exact hit or
//!   when the midpoint no longer differs from a bracket end.
//!
//! ## Invariants
//!
//! * The returned abscissa lies in `[start_x, end_x]`.
//!
//! ## Non-goals
//!
//! * Correctness for transforms that are strongly non-monotonic over the bracket is
//!   not guaranteed; the search is local and heuristic.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::function::Transform;
use crate::primitives::segment::midpoint;

/// Upper bound on midpoint trials per search.
pub const MAX_TRACE_STEPS: usize = 1000;

/// Find the abscissa in `[start_x, end_x]` whose transformed value is closest to `target`.
///
/// Returns `(x, x_t)`. `start_t` and `end_t` must be the transformed bracket ends.
pub fn trace_toward<T, X>(
    start_x: T,
    start_t: T,
    end_x: T,
    end_t: T,
    target: T,
    transform: &X,
) -> (T, T)
where
    T: Float,
    X: Transform<T> + ?Sized,
{
    let mut lo = (start_x, start_t, (start_t - target).abs());
    let mut hi = (end_x, end_t, (end_t - target).abs());
    let mut best = if hi.2 < lo.2 { hi } else { lo };

    for _ in 0..MAX_TRACE_STEPS {
        if best.2 == T::zero() {
            break;
        }

        let mid_x = midpoint(lo.0, hi.0);
        if mid_x <= lo.0 || mid_x >= hi.0 {
            break;
        }

        let mid_t = transform.apply(mid_x);
        let mid = (mid_x, mid_t, (mid_t - target).abs());

        if mid.2 < best.2 {
            best = mid;
        }

        let replace_lo = if mid_t.is_nan() {
            lo.2.is_nan() || lo.2 > hi.2
        } else {
            (mid_t < target) == (lo.1 < target)
        };
        if replace_lo {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    (best.0, best.1)
}
