//! Error types for adaptive sampling.
//!
//! ## Purpose
//!
//! This module defines the error conditions a sampling call can report. All of
//! them are configuration errors: they are raised before the first function
//! evaluation and are never retried.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., both domain bounds).
//! * **Deferred**: Builder misuse (duplicate setters) is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Contained**: [`OptimizerError`] never crosses the public API; the deviation
//!   optimizer catches it and treats the segment as flat.
//!
//! ## Key concepts
//!
//! 1. **Domain validation**: `min < max`, both finite, finite under the transform.
//! 2. **Parameter validation**: Grid size, budget, thresholds, tolerances.
//! 3. **Optimizer failures**: Bad brackets or evaluation caps hit by a [`Maximizer`].
//!
//! Non-finite *function values* are data, not errors, and have no variant here.
//!
//! [`Maximizer`]: crate::math::optimizer::Maximizer

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Sampler Error
// ============================================================================

/// Error type for sampling operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplerError {
    /// The domain is empty or reversed; sampling requires `min < max`.
    InvalidDomain {
        /// Lower bound provided.
        min: f64,
        /// Upper bound provided.
        max: f64,
    },

    /// A domain bound is NaN or infinite.
    NonFiniteBound(String),

    /// The x-axis transform maps a domain bound to a non-finite value.
    InvalidTransform(String),

    /// At least one baseline grid interval is required.
    InvalidGridPoints(usize),

    /// The adaptive point budget must allow at least the seed segment.
    InvalidBudget(usize),

    /// Deviation and step thresholds must be positive and finite.
    InvalidThreshold(f64),

    /// Threshold decay must lie in (0, 1] and step growth must be >= 1.
    InvalidScaleFactor(f64),

    /// Maximizer tolerances must be positive and finite.
    InvalidTolerance(f64),

    /// The maximizer needs a non-zero evaluation cap.
    InvalidMaxEvaluations(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl Display for SamplerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidDomain { min, max } => {
                write!(f, "Invalid domain: [{min}, {max}] (must satisfy min < max)")
            }
            Self::NonFiniteBound(s) => write!(f, "Non-finite domain bound: {s}"),
            Self::InvalidTransform(s) => write!(f, "Invalid x-axis transform: {s}"),
            Self::InvalidGridPoints(n) => {
                write!(f, "Invalid grid_points: {n} (must be at least 1)")
            }
            Self::InvalidBudget(n) => {
                write!(f, "Invalid max_adaptive_points: {n} (must be at least 1)")
            }
            Self::InvalidThreshold(t) => {
                write!(f, "Invalid threshold: {t} (must be > 0 and finite)")
            }
            Self::InvalidScaleFactor(s) => write!(
                f,
                "Invalid scale factor: {s} (decay must be in (0, 1], growth must be >= 1)"
            ),
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidMaxEvaluations(n) => {
                write!(f, "Invalid max_evaluations: {n} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
            ),
        }
    }
}

#[cfg(feature = "std")]
impl Error for SamplerError {}

// ============================================================================
// Optimizer Error
// ============================================================================

/// Failure reported by a univariate maximizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptimizerError {
    /// The search interval is empty, reversed or not finite.
    InvalidBracket,

    /// The objective was evaluated `max` times without converging.
    TooManyEvaluations {
        /// The evaluation cap that was hit.
        max: usize,
    },
}

impl Display for OptimizerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidBracket => write!(f, "Invalid search interval"),
            Self::TooManyEvaluations { max } => {
                write!(f, "Maximizer exceeded {max} objective evaluations")
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for OptimizerError {}
