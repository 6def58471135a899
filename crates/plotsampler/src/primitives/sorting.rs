//! Total-order sorting and deduplication of sample points.
//!
//! ## Purpose
//!
//! This module orders the pooled sample points by transformed x and collapses
//! them into a strictly increasing sequence.
//!
//! ## Design notes
//!
//! * **Total order**: Floats are compared through [`nan_last_cmp`], which is a
//!   valid total order (NaN equals only NaN and sorts after every number), so the
//!   sort never sees an inconsistent comparator.
//! * **Stability**: Uses stable sorting; among equal x-values the point pooled
//!   first survives deduplication.
//! * **Compaction**: The output vector is shrunk to its exact length.
//!
//! ## Invariants
//!
//! * Output x-values are strictly increasing.
//! * Output never contains a NaN x-value.
//! * `y` values are carried untouched (they may be NaN or infinite).
//!
//! ## Non-goals
//!
//! * This module does not evaluate functions or generate points.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::segment::SamplePoint;

// ============================================================================
// Comparator
// ============================================================================

/// Three-way comparison that places NaN after every non-NaN value.
///
/// NaN compares equal only to NaN. Signed zeros compare equal.
#[inline]
pub fn nan_last_cmp<T: Float>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            if a < b {
                Ordering::Less
            } else if a > b {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Stable sort of points by transformed x, NaN x-values last.
#[inline]
pub fn sort_by_x<T: Float>(points: &mut [SamplePoint<T>]) {
    // Fast path: already ordered (the common case for pure grid pools)
    let is_sorted = points
        .windows(2)
        .all(|w| nan_last_cmp(w[0].x, w[1].x) != Ordering::Greater);
    if is_sorted {
        return;
    }

    points.sort_by(|a, b| nan_last_cmp(a.x, b.x));
}

/// Keep only points whose x is strictly greater than the previously kept one.
///
/// Expects input sorted by [`sort_by_x`]. The first point at each distinct x
/// wins; NaN x-values are dropped.
pub fn dedup_strictly_increasing<T: Float>(points: Vec<SamplePoint<T>>) -> Vec<SamplePoint<T>> {
    let mut kept: Vec<SamplePoint<T>> = Vec::with_capacity(points.len());

    for point in points {
        if point.x.is_nan() {
            continue;
        }
        match kept.last() {
            Some(prev) if point.x <= prev.x => {}
            _ => kept.push(point),
        }
    }

    kept.shrink_to_fit();
    kept
}
