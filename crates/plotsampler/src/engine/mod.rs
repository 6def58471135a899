//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a sampling run: it validates configuration and
//! domain, runs refinement followed by assembly, and packages the output.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Configuration and execution of one sampling run.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sampling runs.
pub mod output;
