//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-processing of a finished sample set:
//! - Spacing and coverage diagnostics
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sample-set diagnostics.
pub mod diagnostics;
