//! High-level API for sampling many functions in parallel.
//!
//! ## Purpose
//!
//! This module extends the `plotsampler` builder with a batch front-end:
//! [`ParallelSampler::sample_all`] samples a slice of functions over a shared
//! domain, one sequential sampler run per function.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Wraps the base `plotsampler` builder; every setter delegates.
//! * **Parallel-First**: Defaults to parallel execution when the `cpu` feature is on.
//! * **Fail-Fast**: The shared domain is validated once before any run starts.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelSamplerBuilder`] via `Sampler::new()`.
//! 2. Chain configuration methods (`.grid_points()`, `.parallel()`, etc.).
//! 3. Call `.build()` and then `.sample_all(&functions, min, max)`.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::sample_batch_parallel;

// External dependencies
use log::debug;
use num_traits::Float;

// Export dependencies from plotsampler crate
use plotsampler::internals::engine::executor::SamplerConfig;
use plotsampler::internals::engine::validator::Validator;

// Internal dependencies
use crate::engine::executor::sample_batch_sequential;

// Publicly re-exported types
pub use plotsampler::internals::api::{
    AdaptiveSampler, AxisTransform, Brent, Maximizer, SampleDiagnostics, SampleResult,
    SamplerBuilder, SamplerError, Transform, UnaryFunction,
};

// ============================================================================
// Extended Builder
// ============================================================================

/// Builder for a batch sampler with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelSamplerBuilder<T> {
    /// Base builder from the plotsampler crate
    pub base: SamplerBuilder<T>,

    /// Parallel execution hint
    pub parallel: Option<bool>,
}

impl<T: Float> Default for ParallelSamplerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelSamplerBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from plotsampler `SamplerBuilder`
    /// * parallel: true (requires the `cpu` feature)
    pub fn new() -> Self {
        Self {
            base: SamplerBuilder::new(),
            parallel: None,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the number of baseline grid intervals.
    pub fn grid_points(mut self, grid_points: usize) -> Self {
        self.base = self.base.grid_points(grid_points);
        self
    }

    /// Set the adaptive segment budget.
    pub fn max_adaptive_points(mut self, budget: usize) -> Self {
        self.base = self.base.max_adaptive_points(budget);
        self
    }

    /// Set the deviation threshold of the seed segment.
    pub fn deviation_threshold(mut self, threshold: T) -> Self {
        self.base = self.base.deviation_threshold(threshold);
        self
    }

    /// Set the seed step threshold as a fraction of the domain width.
    pub fn min_step_fraction(mut self, fraction: T) -> Self {
        self.base = self.base.min_step_fraction(fraction);
        self
    }

    /// Set the deviation threshold decay applied on every split.
    pub fn threshold_decay(mut self, decay: T) -> Self {
        self.base = self.base.threshold_decay(decay);
        self
    }

    /// Set the step threshold growth applied on every split.
    pub fn step_growth(mut self, growth: T) -> Self {
        self.base = self.base.step_growth(growth);
        self
    }

    /// Set the absolute tolerance of the Brent maximizer.
    pub fn absolute_tolerance(mut self, tol: T) -> Self {
        self.base = self.base.absolute_tolerance(tol);
        self
    }

    /// Set the relative tolerance of the Brent maximizer.
    pub fn relative_tolerance(mut self, tol: T) -> Self {
        self.base = self.base.relative_tolerance(tol);
        self
    }

    /// Set the evaluation cap of the Brent maximizer.
    pub fn max_evaluations(mut self, max_evaluations: usize) -> Self {
        self.base = self.base.max_evaluations(max_evaluations);
        self
    }

    /// Set the built-in x-axis transform.
    pub fn axis(mut self, axis: AxisTransform) -> Self {
        self.base = self.base.axis(axis);
        self
    }

    /// Include spacing diagnostics in every result.
    pub fn return_diagnostics(mut self) -> Self {
        self.base = self.base.return_diagnostics();
        self
    }

    /// Validate the configuration and build the batch sampler.
    pub fn build(self) -> Result<ParallelSampler<T>, SamplerError> {
        let parallel = self.parallel.unwrap_or(true);
        let base = self.base.build()?;
        Ok(ParallelSampler { base, parallel })
    }
}

// ============================================================================
// Batch Sampler
// ============================================================================

/// Samples batches of functions, one sequential run per function.
#[derive(Debug, Clone)]
pub struct ParallelSampler<T, M = Brent<T>> {
    base: AdaptiveSampler<T, M>,
    parallel: bool,
}

impl<T, M> ParallelSampler<T, M>
where
    T: Float + Send + Sync,
    M: Maximizer<T> + Sync,
{
    /// Replace the univariate maximizer used by every run.
    pub fn with_maximizer<N: Maximizer<T> + Sync>(self, maximizer: N) -> ParallelSampler<T, N> {
        ParallelSampler {
            base: self.base.with_maximizer(maximizer),
            parallel: self.parallel,
        }
    }

    /// The validated configuration shared by all runs.
    pub fn config(&self) -> &SamplerConfig<T> {
        self.base.config()
    }

    /// Whether batches are distributed over the rayon pool.
    pub fn is_parallel(&self) -> bool {
        self.parallel && cfg!(feature = "cpu")
    }

    /// The underlying single-function sampler.
    pub fn as_sampler(&self) -> &AdaptiveSampler<T, M> {
        &self.base
    }

    /// Sample a single function on the configured axis.
    pub fn sample<F>(&self, function: &F, min: T, max: T) -> Result<SampleResult<T>, SamplerError>
    where
        F: UnaryFunction<T> + ?Sized,
    {
        self.base.sample(function, min, max)
    }

    /// Sample every function over `[min, max]` on the configured axis.
    ///
    /// Results are returned in the order of `functions`.
    pub fn sample_all<F>(
        &self,
        functions: &[F],
        min: T,
        max: T,
    ) -> Result<Vec<SampleResult<T>>, SamplerError>
    where
        F: UnaryFunction<T> + Sync,
    {
        let axis = self.base.config().axis;
        self.validate(&axis, min, max)?;
        self.dispatch(functions, |f| self.base.sample(f, min, max))
    }

    /// Sample every function over `[min, max]` with a custom x-axis transform.
    pub fn sample_all_with_transform<F, X>(
        &self,
        functions: &[F],
        transform: &X,
        min: T,
        max: T,
    ) -> Result<Vec<SampleResult<T>>, SamplerError>
    where
        F: UnaryFunction<T> + Sync,
        X: Transform<T> + Sync + ?Sized,
    {
        self.validate(transform, min, max)?;
        self.dispatch(functions, |f| {
            self.base.sample_with_transform(f, transform, min, max)
        })
    }

    fn validate<X>(&self, transform: &X, min: T, max: T) -> Result<(), SamplerError>
    where
        X: Transform<T> + ?Sized,
    {
        Validator::validate_domain(min, max)?;
        Validator::validate_transformed_domain(transform.apply(min), transform.apply(max))
    }

    fn dispatch<F, G>(&self, functions: &[F], run: G) -> Result<Vec<SampleResult<T>>, SamplerError>
    where
        F: Sync,
        G: Fn(&F) -> Result<SampleResult<T>, SamplerError> + Sync + Send,
    {
        debug!(
            "sampling batch of {} functions ({})",
            functions.len(),
            if self.is_parallel() {
                "parallel"
            } else {
                "sequential"
            }
        );

        #[cfg(feature = "cpu")]
        {
            if self.parallel {
                return sample_batch_parallel(functions, run);
            }
        }

        sample_batch_sequential(functions, run)
    }
}
