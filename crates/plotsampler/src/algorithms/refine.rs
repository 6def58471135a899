//! Budgeted segment refinement.
//!
//! ## Purpose
//!
//! This module drives adaptive refinement: starting from one segment spanning
//! the whole domain, it repeatedly takes a pending segment and either accepts
//! it (its endpoints become samples), splits it in two, or discards it.
//!
//! ## Design notes
//!
//! * **Iterative**: Recursion is replaced by a [`WorkList`] processed breadth-first.
//! * **Budget**: The work list admits at most `max_segments` segments in total. Once a
//!   split is refused, every remaining segment is accepted as-is so coverage has no
//!   holes; the run is reported as exhausted rather than failed.
//! * **Non-finite endpoints**: When either endpoint value is NaN or infinite the chord
//!   is meaningless, so the optimizer is skipped and the segment is bisected.
//! * **Boundary clamp**: A split point closer than `step_threshold` to either end (in
//!   transformed space) is relocated by [`trace_toward`]; if it still violates the
//!   threshold the segment is accepted unsplit.
//!
//! ## Key concepts
//!
//! Child thresholds when splitting a parent `P` into a child `C`:
//!
//! ```text
//! C.deviation_threshold = decay  * P.deviation_threshold * |range_t(P)| / |range_t(C)|
//! C.step_threshold      = growth * P.step_threshold
//! ```
//!
//! Growing step thresholds make deeper splits progressively harder, bounding depth
//! independently of the budget.
//!
//! ## Invariants
//!
//! * Accepted segments satisfy `start.x < end.x` and distinct transformed endpoints.
//! * `stats.admitted <= max_segments`.
//!
//! ## Non-goals
//!
//! * This module does not add the baseline grid or order the output (see `assembly`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::optimize::maximize_deviation;
use crate::algorithms::trace::trace_toward;
use crate::math::function::{knot_at, Transform, UnaryFunction};
use crate::math::optimizer::Maximizer;
use crate::primitives::segment::{Knot, SamplePoint, Segment};
use crate::primitives::worklist::WorkList;

// ============================================================================
// Parameters
// ============================================================================

/// Tunables of the refinement driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefineParams<T> {
    /// Deviation threshold of the seed segment.
    pub deviation_threshold: T,

    /// Seed step threshold as a fraction of the transformed domain width.
    pub min_step_fraction: T,

    /// Scale applied to the inherited deviation threshold on every split.
    pub threshold_decay: T,

    /// Multiplier applied to the step threshold on every split.
    pub step_growth: T,

    /// How far past the step threshold a relocated split point is aimed.
    pub clamp_overshoot: T,

    /// Maximum number of segments ever admitted to the work list.
    pub max_segments: usize,
}

impl<T: Float> Default for RefineParams<T> {
    fn default() -> Self {
        Self {
            deviation_threshold: T::from(7e-5).unwrap(),
            min_step_fraction: T::from(1e-6).unwrap(),
            threshold_decay: T::from(0.9).unwrap(),
            step_growth: T::from(1.7).unwrap(),
            clamp_overshoot: T::from(1.1).unwrap(),
            max_segments: 3096,
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Counters describing one refinement run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefineStats {
    /// Segments whose endpoints were emitted.
    pub accepted: usize,

    /// Segments replaced by two children.
    pub split: usize,

    /// Degenerate segments dropped without output.
    pub discarded: usize,

    /// Segments admitted to the work list, seed included.
    pub admitted: usize,

    /// Whether the segment budget stopped further splitting.
    pub budget_exhausted: bool,
}

/// Endpoints of every accepted segment, plus run statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Refinement<T> {
    /// `(x_t, y)` endpoints of accepted segments, two per segment, unordered.
    pub endpoints: Vec<SamplePoint<T>>,

    /// Run statistics.
    pub stats: RefineStats,
}

// ============================================================================
// Driver
// ============================================================================

/// Refine `[min, max]` into accepted segments.
///
/// `min < max` and finite transformed bounds are expected (see the validator).
pub fn refine<T, F, X, M>(
    function: &F,
    transform: &X,
    maximizer: &M,
    min: T,
    max: T,
    params: &RefineParams<T>,
) -> Refinement<T>
where
    T: Float,
    F: UnaryFunction<T> + ?Sized,
    X: Transform<T> + ?Sized,
    M: Maximizer<T> + ?Sized,
{
    let start = knot_at(min, function, transform);
    let end = knot_at(max, function, transform);

    let seed = Segment {
        start,
        end,
        deviation_threshold: params.deviation_threshold,
        step_threshold: ((end.x_t - start.x_t) * params.min_step_fraction).abs(),
    };

    let mut work = WorkList::new(params.max_segments);
    let mut endpoints = Vec::new();
    let mut stats = RefineStats::default();

    work.try_push(seed);

    while let Some(segment) = work.pop() {
        if segment.is_degenerate() {
            trace!(
                "discarding degenerate segment [{}, {}]",
                segment.start.x.to_f64().unwrap_or(f64::NAN),
                segment.end.x.to_f64().unwrap_or(f64::NAN)
            );
            stats.discarded += 1;
            continue;
        }

        // Budget spent: drain the queue without further splitting
        if work.is_exhausted() {
            accept(&segment, &mut endpoints, &mut stats);
            continue;
        }

        let candidate = if segment.has_finite_ends() {
            let peak = maximize_deviation(function, transform, maximizer, &segment);
            if peak.deviation < segment.deviation_threshold {
                accept(&segment, &mut endpoints, &mut stats);
                continue;
            }
            peak.knot
        } else {
            knot_at(segment.midpoint_x(), function, transform)
        };

        let mid = match clamp_split(&segment, candidate, function, transform, params) {
            Some(mid) => mid,
            None => {
                accept(&segment, &mut endpoints, &mut stats);
                continue;
            }
        };

        let (left, right) = split(&segment, mid, params);
        if work.try_push_pair(left, right) {
            stats.split += 1;
        } else {
            trace!(
                "segment budget of {} spent, accepting {} pending segments unsplit",
                work.budget(),
                work.len() + 1
            );
            accept(&segment, &mut endpoints, &mut stats);
        }
    }

    debug_assert!(work.is_empty());
    stats.admitted = work.admitted();
    stats.budget_exhausted = work.is_exhausted();

    Refinement { endpoints, stats }
}

/// Emit both endpoints of an accepted segment.
#[inline]
fn accept<T: Float>(
    segment: &Segment<T>,
    endpoints: &mut Vec<SamplePoint<T>>,
    stats: &mut RefineStats,
) {
    endpoints.push(segment.start.to_point());
    endpoints.push(segment.end.to_point());
    stats.accepted += 1;
}

/// Keep `candidate` at least `step_threshold` away from both ends, or give up.
fn clamp_split<T, F, X>(
    segment: &Segment<T>,
    candidate: Knot<T>,
    function: &F,
    transform: &X,
    params: &RefineParams<T>,
) -> Option<Knot<T>>
where
    T: Float,
    F: UnaryFunction<T> + ?Sized,
    X: Transform<T> + ?Sized,
{
    let step = segment.step_threshold;
    let near_start = |k: &Knot<T>| (k.x_t - segment.start.x_t).abs() < step;
    let near_end = |k: &Knot<T>| (segment.end.x_t - k.x_t).abs() < step;

    if !near_start(&candidate) && !near_end(&candidate) {
        return Some(candidate);
    }

    // Aim just past the threshold, towards the segment interior
    let offset = step * params.clamp_overshoot * segment.range_t().signum();
    let target = if near_start(&candidate) {
        segment.start.x_t + offset
    } else {
        segment.end.x_t - offset
    };

    let (x, x_t) = trace_toward(
        segment.start.x,
        segment.start.x_t,
        segment.end.x,
        segment.end.x_t,
        target,
        transform,
    );
    let relocated = Knot::new(x, x_t, function.evaluate(x));

    trace!(
        "clamped split point {} -> {}",
        candidate.x.to_f64().unwrap_or(f64::NAN),
        x.to_f64().unwrap_or(f64::NAN)
    );

    if near_start(&relocated) || near_end(&relocated) {
        None
    } else {
        Some(relocated)
    }
}

/// Build the two children of `segment` split at `mid`.
fn split<T: Float>(
    segment: &Segment<T>,
    mid: Knot<T>,
    params: &RefineParams<T>,
) -> (Segment<T>, Segment<T>) {
    let parent_range = segment.range_t().abs();
    let step_threshold = segment.step_threshold * params.step_growth;

    let child = |start: Knot<T>, end: Knot<T>| Segment {
        start,
        end,
        deviation_threshold: params.threshold_decay * segment.deviation_threshold * parent_range
            / (end.x_t - start.x_t).abs(),
        step_threshold,
    };

    (child(segment.start, mid), child(mid, segment.end))
}
