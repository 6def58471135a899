//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the value records, error types, ordering utilities and
//! the bounded work list used throughout the crate. It has zero internal
//! dependencies within the crate.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Knots, segments and sample points.
pub mod segment;

/// NaN-aware sorting and deduplication.
pub mod sorting;

/// Budgeted segment queue.
pub mod worklist;
