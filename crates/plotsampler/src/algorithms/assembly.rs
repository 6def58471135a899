//! Final point-set assembly.
//!
//! ## Purpose
//!
//! This module turns the endpoints of accepted segments into the sampler's
//! output: it adds a uniform baseline grid, orders everything by transformed x
//! and removes duplicates.
//!
//! ## Design notes
//!
//! * **Safety net**: The grid is added unconditionally so that features the
//!   refinement never looked at still get coarse coverage.
//! * **Exact ends**: Grid samples run over `k = 0..=grid_points`; the last one is
//!   pinned to `max` so rounding cannot create a near-duplicate of the right end.
//! * **Pool order**: Segment endpoints are pooled before grid samples; with a stable
//!   sort the segment point wins at a shared x.
//!
//! ## Invariants
//!
//! * Output x-values are strictly increasing and never NaN.
//! * `transform(min)` and `transform(max)` appear in the output whenever they are
//!   not NaN.
//!
//! ## Non-goals
//!
//! * This module does not refine anything; it only merges.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::function::{knot_at, Transform, UnaryFunction};
use crate::primitives::segment::SamplePoint;
use crate::primitives::sorting::{dedup_strictly_increasing, sort_by_x};

// ============================================================================
// Grid
// ============================================================================

/// Append `grid_points + 1` evenly spaced samples of `[min, max]` to `pool`.
pub fn extend_with_grid<T, F, X>(
    pool: &mut Vec<SamplePoint<T>>,
    function: &F,
    transform: &X,
    min: T,
    max: T,
    grid_points: usize,
) where
    T: Float,
    F: UnaryFunction<T> + ?Sized,
    X: Transform<T> + ?Sized,
{
    let n = T::from(grid_points).unwrap();
    let width = max - min;

    pool.reserve(grid_points + 1);
    for k in 0..=grid_points {
        let x = if k == grid_points {
            max
        } else {
            min + width * (T::from(k).unwrap() / n)
        };
        pool.push(knot_at(x, function, transform).to_point());
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Merge accepted endpoints with the baseline grid into the final sequence.
pub fn assemble<T, F, X>(
    endpoints: Vec<SamplePoint<T>>,
    function: &F,
    transform: &X,
    min: T,
    max: T,
    grid_points: usize,
) -> Vec<SamplePoint<T>>
where
    T: Float,
    F: UnaryFunction<T> + ?Sized,
    X: Transform<T> + ?Sized,
{
    let mut pool = endpoints;
    extend_with_grid(&mut pool, function, transform, min, max, grid_points);

    sort_by_x(&mut pool);
    dedup_strictly_increasing(pool)
}
