//! Input validation for sampler configuration and domains.
//!
//! ## Purpose
//!
//! This module checks every configuration parameter and the sampling domain
//! before any function evaluation happens. Violations are configuration errors:
//! reported immediately, never retried.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A validated domain has finite bounds with `min < max` and a finite width.
//! * A validated transform maps both bounds to finite values a finite distance apart.
//!
//! ## Non-goals
//!
//! * This module does not check function values; NaN and infinities are data.
//! * This module does not check transform monotonicity.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SamplerError;

/// Lossy conversion used only for error messages.
#[inline]
fn as_f64<T: Float>(val: T) -> f64 {
    val.to_f64().unwrap_or(f64::NAN)
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sampler configuration and domains.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Domain Validation
    // ========================================================================

    /// Validate the raw sampling domain.
    pub fn validate_domain<T: Float>(min: T, max: T) -> Result<(), SamplerError> {
        if !min.is_finite() {
            return Err(SamplerError::NonFiniteBound(format!("min={}", as_f64(min))));
        }
        if !max.is_finite() {
            return Err(SamplerError::NonFiniteBound(format!("max={}", as_f64(max))));
        }
        if max <= min {
            return Err(SamplerError::InvalidDomain {
                min: as_f64(min),
                max: as_f64(max),
            });
        }
        if !(max - min).is_finite() {
            return Err(SamplerError::NonFiniteBound(format!(
                "max - min={}",
                as_f64(max - min)
            )));
        }
        Ok(())
    }

    /// Validate the domain bounds after the x-axis transform.
    pub fn validate_transformed_domain<T: Float>(min_t: T, max_t: T) -> Result<(), SamplerError> {
        if !min_t.is_finite() {
            return Err(SamplerError::InvalidTransform(format!(
                "t(min)={}",
                as_f64(min_t)
            )));
        }
        if !max_t.is_finite() {
            return Err(SamplerError::InvalidTransform(format!(
                "t(max)={}",
                as_f64(max_t)
            )));
        }
        if !(max_t - min_t).is_finite() {
            return Err(SamplerError::InvalidTransform(format!(
                "t(max) - t(min)={}",
                as_f64(max_t - min_t)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of baseline grid intervals.
    pub fn validate_grid_points(grid_points: usize) -> Result<(), SamplerError> {
        if grid_points == 0 {
            return Err(SamplerError::InvalidGridPoints(grid_points));
        }
        Ok(())
    }

    /// Validate the adaptive segment budget.
    pub fn validate_budget(max_adaptive_points: usize) -> Result<(), SamplerError> {
        if max_adaptive_points == 0 {
            return Err(SamplerError::InvalidBudget(max_adaptive_points));
        }
        Ok(())
    }

    /// Validate a deviation threshold or step fraction.
    pub fn validate_threshold<T: Float>(threshold: T) -> Result<(), SamplerError> {
        if !threshold.is_finite() || threshold <= T::zero() {
            return Err(SamplerError::InvalidThreshold(as_f64(threshold)));
        }
        Ok(())
    }

    /// Validate the deviation threshold decay, which must lie in (0, 1].
    pub fn validate_decay<T: Float>(decay: T) -> Result<(), SamplerError> {
        if !decay.is_finite() || decay <= T::zero() || decay > T::one() {
            return Err(SamplerError::InvalidScaleFactor(as_f64(decay)));
        }
        Ok(())
    }

    /// Validate the step threshold growth, which must be finite and >= 1.
    pub fn validate_growth<T: Float>(growth: T) -> Result<(), SamplerError> {
        if !growth.is_finite() || growth < T::one() {
            return Err(SamplerError::InvalidScaleFactor(as_f64(growth)));
        }
        Ok(())
    }

    /// Validate a maximizer tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), SamplerError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(SamplerError::InvalidTolerance(as_f64(tol)));
        }
        Ok(())
    }

    /// Validate a relative maximizer tolerance, which must resolve at least one ulp.
    pub fn validate_relative_tolerance<T: Float>(tol: T) -> Result<(), SamplerError> {
        Self::validate_tolerance(tol)?;
        if tol < T::epsilon() {
            return Err(SamplerError::InvalidTolerance(as_f64(tol)));
        }
        Ok(())
    }

    /// Validate the maximizer evaluation cap.
    pub fn validate_max_evaluations(max_evaluations: usize) -> Result<(), SamplerError> {
        if max_evaluations == 0 {
            return Err(SamplerError::InvalidMaxEvaluations(max_evaluations));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SamplerError> {
        if let Some(param) = duplicate_param {
            return Err(SamplerError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
