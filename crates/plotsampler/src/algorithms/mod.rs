//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the adaptive sampling algorithm itself:
//! - Deviation optimizer: where inside a segment does the curve leave the chord most?
//! - Boundary clamp search: move a split point away from a segment end
//! - Segment refinement driver: accept, split or discard segments under a budget
//! - Point-set assembly: merge, sort and deduplicate the final samples
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Maximum chord deviation inside a segment.
pub mod optimize;

/// Transformed-coordinate targeting by bisection.
pub mod trace;

/// Budgeted segment refinement.
pub mod refine;

/// Final point-set assembly.
pub mod assembly;
