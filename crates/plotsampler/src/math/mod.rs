//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks of the sampler:
//! - Capability traits for the sampled function and the x-axis transform
//! - The chord-deviation objective
//! - The univariate maximizer capability and its default Brent implementation
//!
//! These carry no refinement policy of their own.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Function and transform capabilities.
pub mod function;

/// Perpendicular deviation from a chord.
pub mod deviation;

/// Bounded univariate maximization.
pub mod optimizer;
