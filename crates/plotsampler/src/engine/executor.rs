//! Execution engine for adaptive sampling runs.
//!
//! ## Purpose
//!
//! This module holds the complete configuration of a sampler and runs the two
//! algorithm stages in order: segment refinement, then point-set assembly.
//!
//! ## Design notes
//!
//! * **Single-threaded**: A run is synchronous and owns all of its buffers; run
//!   independent functions on separate threads for parallelism.
//! * **Deterministic**: Given a deterministic maximizer, identical inputs yield
//!   bit-identical output.
//! * **Separation**: The executor assumes validated input; validation lives in the
//!   API layer so that extension crates can reuse the raw run.
//!
//! ## Invariants
//!
//! * Output points are strictly increasing in transformed x.
//! * At most `max_adaptive_points` segments are admitted per run.
//!
//! ## Non-goals
//!
//! * This module does not validate the domain or parameters (handled by `validator`).
//! * This module does not format results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::assembly::assemble;
use crate::algorithms::refine::{refine, RefineParams, RefineStats};
use crate::math::function::{AxisTransform, Transform, UnaryFunction};
use crate::math::optimizer::{Brent, Maximizer};
use crate::primitives::segment::SamplePoint;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a sampling run.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig<T> {
    /// Number of baseline grid intervals (`grid_points + 1` samples).
    pub grid_points: usize,

    /// Maximum number of segments admitted during refinement.
    pub max_adaptive_points: usize,

    /// Deviation threshold of the seed segment.
    pub deviation_threshold: T,

    /// Seed step threshold as a fraction of the transformed domain width.
    pub min_step_fraction: T,

    /// Deviation threshold decay applied on every split.
    pub threshold_decay: T,

    /// Step threshold growth applied on every split.
    pub step_growth: T,

    /// Absolute tolerance of the default maximizer.
    pub absolute_tolerance: T,

    /// Relative tolerance of the default maximizer.
    pub relative_tolerance: T,

    /// Evaluation cap of the default maximizer.
    pub max_evaluations: usize,

    /// Built-in x-axis transform used when no custom transform is supplied.
    pub axis: AxisTransform,

    /// Attach diagnostics to the result.
    pub return_diagnostics: bool,
}

impl<T: Float> Default for SamplerConfig<T> {
    fn default() -> Self {
        let refine = RefineParams::<T>::default();
        let brent = Brent::<T>::default();
        Self {
            grid_points: 128,
            max_adaptive_points: refine.max_segments,
            deviation_threshold: refine.deviation_threshold,
            min_step_fraction: refine.min_step_fraction,
            threshold_decay: refine.threshold_decay,
            step_growth: refine.step_growth,
            absolute_tolerance: brent.absolute_tolerance,
            relative_tolerance: brent.relative_tolerance,
            max_evaluations: brent.max_evaluations,
            axis: AxisTransform::default(),
            return_diagnostics: false,
        }
    }
}

impl<T: Float> SamplerConfig<T> {
    /// Refinement parameters derived from this configuration.
    pub fn refine_params(&self) -> RefineParams<T> {
        RefineParams {
            deviation_threshold: self.deviation_threshold,
            min_step_fraction: self.min_step_fraction,
            threshold_decay: self.threshold_decay,
            step_growth: self.step_growth,
            max_segments: self.max_adaptive_points,
            ..RefineParams::default()
        }
    }

    /// The default Brent maximizer configured with this run's tolerances.
    pub fn brent(&self) -> Brent<T> {
        Brent::new(
            self.relative_tolerance,
            self.absolute_tolerance,
            self.max_evaluations,
        )
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Raw output of a sampling run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Final points, strictly increasing in transformed x.
    pub points: Vec<SamplePoint<T>>,

    /// Refinement statistics.
    pub stats: RefineStats,
}

/// Runs refinement and assembly with a fixed configuration and maximizer.
#[derive(Debug, Clone)]
pub struct SamplerExecutor<T, M = Brent<T>> {
    /// Run configuration.
    pub config: SamplerConfig<T>,

    /// Maximizer used by the deviation optimizer.
    pub maximizer: M,
}

impl<T: Float> SamplerExecutor<T, Brent<T>> {
    /// Create an executor using the Brent maximizer described by `config`.
    pub fn from_config(config: SamplerConfig<T>) -> Self {
        let maximizer = config.brent();
        Self { config, maximizer }
    }
}

impl<T: Float, M: Maximizer<T>> SamplerExecutor<T, M> {
    /// Create an executor with an explicit maximizer.
    pub fn with_maximizer(config: SamplerConfig<T>, maximizer: M) -> Self {
        Self { config, maximizer }
    }

    /// Sample `function` over `[min, max]` with the given x-axis transform.
    ///
    /// Expects a validated domain.
    pub fn run<F, X>(&self, function: &F, transform: &X, min: T, max: T) -> ExecutorOutput<T>
    where
        F: UnaryFunction<T> + ?Sized,
        X: Transform<T> + ?Sized,
    {
        let params = self.config.refine_params();
        let refinement = refine(function, transform, &self.maximizer, min, max, &params);
        let stats = refinement.stats;

        debug!(
            "refinement finished: {} accepted, {} split, {} discarded, {}/{} admitted{}",
            stats.accepted,
            stats.split,
            stats.discarded,
            stats.admitted,
            params.max_segments,
            if stats.budget_exhausted {
                " (budget exhausted)"
            } else {
                ""
            }
        );

        let points = assemble(
            refinement.endpoints,
            function,
            transform,
            min,
            max,
            self.config.grid_points,
        );

        ExecutorOutput { points, stats }
    }
}
