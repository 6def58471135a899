//! Bounded work list of pending segments.
//!
//! ## Purpose
//!
//! This module replaces recursive interval splitting with an explicit FIFO queue
//! of [`Segment`] records and enforces the global adaptive point budget.
//!
//! ## Design notes
//!
//! * **Budgeted, not sized**: The budget counts every segment ever admitted (seed
//!   included), not the segments currently queued. Popping does not free budget,
//!   which bounds total work and output size.
//! * **All-or-nothing splits**: Children are admitted in pairs so a split is never
//!   half-recorded.
//! * **Sticky exhaustion**: Once a push is refused the list remembers it; the
//!   driver reports this as a best-effort result, not an error.
//!
//! ## Invariants
//!
//! * `admitted() <= budget()` at all times.
//! * Segments are popped in admission order (breadth-first refinement).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

// Internal dependencies
use crate::primitives::segment::Segment;

// ============================================================================
// Work List
// ============================================================================

/// FIFO queue of segments with a hard cap on total admissions.
#[derive(Debug, Clone)]
pub struct WorkList<T> {
    queue: VecDeque<Segment<T>>,
    budget: usize,
    admitted: usize,
    exhausted: bool,
}

impl<T> WorkList<T> {
    /// Create an empty work list that will admit at most `budget` segments.
    pub fn new(budget: usize) -> Self {
        Self {
            // Breadth-first refinement rarely holds more than half the budget at once
            queue: VecDeque::with_capacity(budget.min(1024)),
            budget,
            admitted: 0,
            exhausted: false,
        }
    }

    /// Admit one segment if the budget allows it.
    pub fn try_push(&mut self, segment: Segment<T>) -> bool {
        if self.admitted >= self.budget {
            self.exhausted = true;
            return false;
        }
        self.admitted += 1;
        self.queue.push_back(segment);
        true
    }

    /// Admit both children of a split, or neither.
    pub fn try_push_pair(&mut self, left: Segment<T>, right: Segment<T>) -> bool {
        if self.budget - self.admitted < 2 {
            self.exhausted = true;
            return false;
        }
        self.admitted += 2;
        self.queue.push_back(left);
        self.queue.push_back(right);
        true
    }

    /// Take the oldest pending segment.
    #[inline]
    pub fn pop(&mut self) -> Option<Segment<T>> {
        self.queue.pop_front()
    }

    /// Number of segments still pending.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no segment is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Total segments admitted so far.
    #[inline]
    pub fn admitted(&self) -> usize {
        self.admitted
    }

    /// Maximum number of admissions.
    #[inline]
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Whether a push has been refused for lack of budget.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
