//! High-level API for adaptive function sampling.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring the sampler, the configured [`AdaptiveSampler`] itself, and the
//! one-shot [`sample`] convenience function.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every parameter.
//! * **Validated**: Parameters are validated by `build()`, domains by every `sample` call.
//! * **Pluggable**: The univariate maximizer can be swapped with [`AdaptiveSampler::with_maximizer`].
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SamplerBuilder`] via `Sampler::new()`.
//! 2. Chain configuration methods (`.grid_points()`, `.axis()`, etc.).
//! 3. Call `.build()` to obtain an [`AdaptiveSampler`].
//! 4. Call `.sample(&f, min, max)` as often as needed; the sampler is immutable.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ExecutorOutput, SamplerConfig, SamplerExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::refine::RefineStats;
pub use crate::engine::output::SampleResult;
pub use crate::evaluation::diagnostics::SampleDiagnostics;
pub use crate::math::function::{AxisTransform, Transform, UnaryFunction};
pub use crate::math::optimizer::{Brent, Maximizer};
pub use crate::primitives::errors::{OptimizerError, SamplerError};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an adaptive sampler.
#[derive(Debug, Clone)]
pub struct SamplerBuilder<T> {
    /// Number of baseline grid intervals.
    pub grid_points: Option<usize>,

    /// Total number of segments refinement may admit.
    pub max_adaptive_points: Option<usize>,

    /// Deviation threshold of the seed segment.
    pub deviation_threshold: Option<T>,

    /// Seed step threshold as a fraction of the transformed domain width.
    pub min_step_fraction: Option<T>,

    /// Deviation threshold decay per split, in (0, 1].
    pub threshold_decay: Option<T>,

    /// Step threshold growth per split, >= 1.
    pub step_growth: Option<T>,

    /// Absolute tolerance of the Brent maximizer.
    pub absolute_tolerance: Option<T>,

    /// Relative tolerance of the Brent maximizer.
    pub relative_tolerance: Option<T>,

    /// Evaluation cap of the Brent maximizer.
    pub max_evaluations: Option<usize>,

    /// Built-in x-axis transform.
    pub axis: Option<AxisTransform>,

    /// Attach spacing diagnostics to results.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SamplerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SamplerBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            grid_points: None,
            max_adaptive_points: None,
            deviation_threshold: None,
            min_step_fraction: None,
            threshold_decay: None,
            step_growth: None,
            absolute_tolerance: None,
            relative_tolerance: None,
            max_evaluations: None,
            axis: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the number of baseline grid intervals (default 128).
    ///
    /// The grid always adds `grid_points + 1` samples, both ends included.
    pub fn grid_points(mut self, grid_points: usize) -> Self {
        if self.grid_points.is_some() {
            self.duplicate_param = Some("grid_points");
        }
        self.grid_points = Some(grid_points);
        self
    }

    /// Set the adaptive segment budget (default 3096).
    pub fn max_adaptive_points(mut self, budget: usize) -> Self {
        if self.max_adaptive_points.is_some() {
            self.duplicate_param = Some("max_adaptive_points");
        }
        self.max_adaptive_points = Some(budget);
        self
    }

    /// Set the deviation threshold of the seed segment (default 7e-5).
    pub fn deviation_threshold(mut self, threshold: T) -> Self {
        if self.deviation_threshold.is_some() {
            self.duplicate_param = Some("deviation_threshold");
        }
        self.deviation_threshold = Some(threshold);
        self
    }

    /// Set the seed step threshold as a fraction of the domain width (default 1e-6).
    pub fn min_step_fraction(mut self, fraction: T) -> Self {
        if self.min_step_fraction.is_some() {
            self.duplicate_param = Some("min_step_fraction");
        }
        self.min_step_fraction = Some(fraction);
        self
    }

    /// Set the deviation threshold decay applied on every split (default 0.9).
    pub fn threshold_decay(mut self, decay: T) -> Self {
        if self.threshold_decay.is_some() {
            self.duplicate_param = Some("threshold_decay");
        }
        self.threshold_decay = Some(decay);
        self
    }

    /// Set the step threshold growth applied on every split (default 1.7).
    pub fn step_growth(mut self, growth: T) -> Self {
        if self.step_growth.is_some() {
            self.duplicate_param = Some("step_growth");
        }
        self.step_growth = Some(growth);
        self
    }

    /// Set the absolute tolerance of the Brent maximizer (default 1e-10, at least `T::epsilon()`).
    pub fn absolute_tolerance(mut self, tol: T) -> Self {
        if self.absolute_tolerance.is_some() {
            self.duplicate_param = Some("absolute_tolerance");
        }
        self.absolute_tolerance = Some(tol);
        self
    }

    /// Set the relative tolerance of the Brent maximizer (default 1e-12, at least `64 * T::epsilon()`).
    ///
    /// Values below `T::epsilon()` are rejected by `build`.
    pub fn relative_tolerance(mut self, tol: T) -> Self {
        if self.relative_tolerance.is_some() {
            self.duplicate_param = Some("relative_tolerance");
        }
        self.relative_tolerance = Some(tol);
        self
    }

    /// Set the evaluation cap of the Brent maximizer (default 30000).
    pub fn max_evaluations(mut self, max_evaluations: usize) -> Self {
        if self.max_evaluations.is_some() {
            self.duplicate_param = Some("max_evaluations");
        }
        self.max_evaluations = Some(max_evaluations);
        self
    }

    /// Set the built-in x-axis transform used by [`AdaptiveSampler::sample`].
    pub fn axis(mut self, axis: AxisTransform) -> Self {
        if self.axis.is_some() {
            self.duplicate_param = Some("axis");
        }
        self.axis = Some(axis);
        self
    }

    /// Include spacing diagnostics in output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Resolve defaults into a configuration without validating it.
    pub fn to_config(&self) -> SamplerConfig<T> {
        let defaults = SamplerConfig::<T>::default();
        SamplerConfig {
            grid_points: self.grid_points.unwrap_or(defaults.grid_points),
            max_adaptive_points: self
                .max_adaptive_points
                .unwrap_or(defaults.max_adaptive_points),
            deviation_threshold: self
                .deviation_threshold
                .unwrap_or(defaults.deviation_threshold),
            min_step_fraction: self.min_step_fraction.unwrap_or(defaults.min_step_fraction),
            threshold_decay: self.threshold_decay.unwrap_or(defaults.threshold_decay),
            step_growth: self.step_growth.unwrap_or(defaults.step_growth),
            absolute_tolerance: self
                .absolute_tolerance
                .unwrap_or(defaults.absolute_tolerance),
            relative_tolerance: self
                .relative_tolerance
                .unwrap_or(defaults.relative_tolerance),
            max_evaluations: self.max_evaluations.unwrap_or(defaults.max_evaluations),
            axis: self.axis.unwrap_or(defaults.axis),
            return_diagnostics: self
                .return_diagnostics
                .unwrap_or(defaults.return_diagnostics),
        }
    }

    /// Validate the configuration and build the sampler.
    pub fn build(self) -> Result<AdaptiveSampler<T>, SamplerError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = self.to_config();
        Validator::validate_grid_points(config.grid_points)?;
        Validator::validate_budget(config.max_adaptive_points)?;
        Validator::validate_threshold(config.deviation_threshold)?;
        Validator::validate_threshold(config.min_step_fraction)?;
        Validator::validate_decay(config.threshold_decay)?;
        Validator::validate_growth(config.step_growth)?;
        Validator::validate_tolerance(config.absolute_tolerance)?;
        Validator::validate_relative_tolerance(config.relative_tolerance)?;
        Validator::validate_max_evaluations(config.max_evaluations)?;

        Ok(AdaptiveSampler {
            executor: SamplerExecutor::from_config(config),
        })
    }
}

// ============================================================================
// Sampler
// ============================================================================

/// A validated, reusable adaptive sampler.
#[derive(Debug, Clone)]
pub struct AdaptiveSampler<T, M = Brent<T>> {
    executor: SamplerExecutor<T, M>,
}

impl<T: Float, M: Maximizer<T>> AdaptiveSampler<T, M> {
    /// Replace the univariate maximizer used by the deviation optimizer.
    pub fn with_maximizer<N: Maximizer<T>>(self, maximizer: N) -> AdaptiveSampler<T, N> {
        AdaptiveSampler {
            executor: SamplerExecutor::with_maximizer(self.executor.config, maximizer),
        }
    }

    /// The validated configuration.
    pub fn config(&self) -> &SamplerConfig<T> {
        &self.executor.config
    }

    /// Sample `function` over `[min, max]` on the configured axis.
    pub fn sample<F>(&self, function: &F, min: T, max: T) -> Result<SampleResult<T>, SamplerError>
    where
        F: UnaryFunction<T> + ?Sized,
    {
        let axis = self.executor.config.axis;
        self.run(function, &axis, min, max, axis.name())
    }

    /// Sample `function` over `[min, max]` with a custom x-axis transform.
    ///
    /// The configured axis is ignored. Output x-values are `transform(x)`; y-values
    /// are always `function(x)` at the raw abscissa.
    pub fn sample_with_transform<F, X>(
        &self,
        function: &F,
        transform: &X,
        min: T,
        max: T,
    ) -> Result<SampleResult<T>, SamplerError>
    where
        F: UnaryFunction<T> + ?Sized,
        X: Transform<T> + ?Sized,
    {
        self.run(function, transform, min, max, "Custom")
    }

    fn run<F, X>(
        &self,
        function: &F,
        transform: &X,
        min: T,
        max: T,
        transform_name: &'static str,
    ) -> Result<SampleResult<T>, SamplerError>
    where
        F: UnaryFunction<T> + ?Sized,
        X: Transform<T> + ?Sized,
    {
        Validator::validate_domain(min, max)?;
        Validator::validate_transformed_domain(transform.apply(min), transform.apply(max))?;

        let ExecutorOutput { points, stats } = self.executor.run(function, transform, min, max);
        let (x, y): (Vec<T>, Vec<T>) = points.iter().map(|p| (p.x, p.y)).unzip();

        let config = &self.executor.config;
        let diagnostics = if config.return_diagnostics {
            Some(SampleDiagnostics::compute(&x, &y, config.grid_points))
        } else {
            None
        };

        Ok(SampleResult {
            x,
            y,
            domain: (min, max),
            transform: transform_name,
            grid_points: config.grid_points,
            stats,
            diagnostics,
        })
    }
}

// ============================================================================
// One-shot Entry Point
// ============================================================================

/// Sample `function` over `[min, max]` with default settings.
///
/// `transform` maps raw x to the plotted axis; `None` means a linear axis.
pub fn sample<T, F>(
    function: F,
    min: T,
    max: T,
    transform: Option<&dyn Fn(T) -> T>,
) -> Result<SampleResult<T>, SamplerError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let sampler = SamplerBuilder::new().build()?;
    match transform {
        Some(transform) => sampler.sample_with_transform(&function, &transform, min, max),
        None => sampler.sample(&function, min, max),
    }
}
