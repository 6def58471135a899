//! Tests for the public sampling API.
//!
//! These tests exercise the sampler exactly as users do, through the prelude:
//! - Builder configuration and validation
//! - Domain and transform validation at sample time
//! - Result contents, diagnostics and formatting
//! - Maximizer injection
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, setters and parameter errors
//! 2. **Domain Errors** - Invalid bounds and transforms
//! 3. **Results** - Metadata, diagnostics and display
//! 4. **Extensibility** - Custom maximizers and dynamic functions

use approx::assert_relative_eq;

use plotsampler::prelude::*;

// ============================================================================
// Builder Tests
// ============================================================================

/// Test that an unconfigured builder yields the reference defaults.
#[test]
fn test_builder_defaults() {
    let sampler = Sampler::<f64>::new().build().unwrap();
    let config = sampler.config();

    assert_eq!(config.grid_points, 128);
    assert_eq!(config.max_adaptive_points, 3096);
    assert_eq!(config.axis, Identity);
}

/// Test that setters reach the configuration.
#[test]
fn test_builder_setters() {
    let sampler = Sampler::<f64>::new()
        .grid_points(32)
        .max_adaptive_points(100)
        .deviation_threshold(1e-3)
        .min_step_fraction(1e-4)
        .threshold_decay(0.8)
        .step_growth(2.0)
        .absolute_tolerance(1e-8)
        .relative_tolerance(1e-10)
        .max_evaluations(500)
        .axis(Log2)
        .return_diagnostics()
        .build()
        .unwrap();
    let config = sampler.config();

    assert_eq!(config.grid_points, 32);
    assert_eq!(config.max_adaptive_points, 100);
    assert_eq!(config.deviation_threshold, 1e-3);
    assert_eq!(config.min_step_fraction, 1e-4);
    assert_eq!(config.threshold_decay, 0.8);
    assert_eq!(config.step_growth, 2.0);
    assert_eq!(config.absolute_tolerance, 1e-8);
    assert_eq!(config.relative_tolerance, 1e-10);
    assert_eq!(config.max_evaluations, 500);
    assert_eq!(config.axis, Log2);
    assert!(config.return_diagnostics);
}

/// Test that out-of-range parameters are rejected by `build`.
#[test]
fn test_builder_invalid_parameters() {
    assert_eq!(
        Sampler::<f64>::new().grid_points(0).build().unwrap_err(),
        SamplerError::InvalidGridPoints(0)
    );
    assert_eq!(
        Sampler::<f64>::new().max_adaptive_points(0).build().unwrap_err(),
        SamplerError::InvalidBudget(0)
    );
    assert_eq!(
        Sampler::<f64>::new().deviation_threshold(-1.0).build().unwrap_err(),
        SamplerError::InvalidThreshold(-1.0)
    );
    assert_eq!(
        Sampler::<f64>::new().min_step_fraction(0.0).build().unwrap_err(),
        SamplerError::InvalidThreshold(0.0)
    );
    assert_eq!(
        Sampler::<f64>::new().threshold_decay(1.5).build().unwrap_err(),
        SamplerError::InvalidScaleFactor(1.5)
    );
    assert_eq!(
        Sampler::<f64>::new().step_growth(0.5).build().unwrap_err(),
        SamplerError::InvalidScaleFactor(0.5)
    );
    assert_eq!(
        Sampler::<f64>::new().absolute_tolerance(0.0).build().unwrap_err(),
        SamplerError::InvalidTolerance(0.0)
    );
    assert_eq!(
        Sampler::<f64>::new().relative_tolerance(1e-17).build().unwrap_err(),
        SamplerError::InvalidTolerance(1e-17)
    );
    assert_eq!(
        Sampler::<f64>::new().max_evaluations(0).build().unwrap_err(),
        SamplerError::InvalidMaxEvaluations(0)
    );
}

/// Test that setting a parameter twice is an error.
#[test]
fn test_builder_duplicate_parameter() {
    let err = Sampler::<f64>::new()
        .grid_points(64)
        .grid_points(32)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        SamplerError::DuplicateParameter {
            parameter: "grid_points"
        }
    );
}

// ============================================================================
// Domain Error Tests
// ============================================================================

/// Test reversed and empty domains.
#[test]
fn test_sample_invalid_domain() {
    let f = |x: f64| x;
    assert_eq!(
        sample(f, 1.0, 0.0, None).unwrap_err(),
        SamplerError::InvalidDomain { min: 1.0, max: 0.0 }
    );
    assert_eq!(
        sample(f, 2.0, 2.0, None).unwrap_err(),
        SamplerError::InvalidDomain { min: 2.0, max: 2.0 }
    );
}

/// Test non-finite bounds.
#[test]
fn test_sample_non_finite_bounds() {
    let f = |x: f64| x;
    assert!(matches!(
        sample(f, f64::NAN, 1.0, None),
        Err(SamplerError::NonFiniteBound(_))
    ));
    assert!(matches!(
        sample(f, 0.0, f64::INFINITY, None),
        Err(SamplerError::NonFiniteBound(_))
    ));
}

/// Test that a log axis over non-positive bounds is rejected before sampling.
#[test]
fn test_sample_log_axis_requires_positive_domain() {
    let calls = std::cell::Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x
    };
    let sampler = Sampler::<f64>::new().axis(Ln).build().unwrap();

    assert!(matches!(
        sampler.sample(&f, 0.0, 10.0),
        Err(SamplerError::InvalidTransform(_))
    ));
    assert!(matches!(
        sampler.sample(&f, -5.0, 10.0),
        Err(SamplerError::InvalidTransform(_))
    ));
    assert_eq!(calls.get(), 0, "no evaluation before validation");
}

/// Test a custom transform mapping a bound to infinity.
#[test]
fn test_sample_custom_transform_non_finite() {
    let inverse: &dyn Fn(f64) -> f64 = &|x: f64| 1.0 / x;
    let result = sample(|x: f64| x, 0.0, 1.0, Some(inverse));
    assert!(matches!(result, Err(SamplerError::InvalidTransform(_))));
}

// ============================================================================
// Result Tests
// ============================================================================

/// Test result metadata.
#[test]
fn test_result_metadata() {
    let sampler = Sampler::<f64>::new().axis(Log10).build().unwrap();
    let result = sampler.sample(&|x: f64| x.ln(), 1.0, 100.0).unwrap();

    assert_eq!(result.domain, (1.0, 100.0));
    assert_eq!(result.transform, "Log10");
    assert_eq!(result.grid_points, 128);
    assert_eq!(result.x.len(), result.y.len());
    assert_eq!(result.len(), result.to_pairs().len());
    assert!(!result.is_empty());
    assert!(result.diagnostics.is_none());

    let custom = sampler
        .sample_with_transform(&|x: f64| x, &|x: f64| x * x, 1.0, 2.0)
        .unwrap();
    assert_eq!(custom.transform, "Custom");
}

/// Test that points pair x and y in order.
#[test]
fn test_result_points() {
    let result = sample(|x: f64| 3.0 * x, 0.0, 1.0, None).unwrap();

    for (i, (x, y)) in result.points().enumerate() {
        assert_eq!(x, result.x[i]);
        assert_eq!(y, result.y[i]);
        assert_relative_eq!(y, 3.0 * x, epsilon = 1e-15);
    }
}

/// Test that diagnostics are attached on request.
#[test]
fn test_result_diagnostics() {
    let sampler = Sampler::<f64>::new().return_diagnostics().build().unwrap();
    let result = sampler.sample(&|x: f64| (20.0 * x).sin(), 0.0, 1.0).unwrap();
    let diag = result.diagnostics.as_ref().unwrap();

    assert_eq!(diag.points, result.len());
    assert_eq!(diag.adaptive_points, result.len() - 129);
    assert!(diag.min_spacing < diag.max_spacing);
    assert!(diag.spacing_ratio() > 1.0);
}

/// Test the display format.
#[test]
fn test_result_display() {
    let sampler = Sampler::<f64>::new().return_diagnostics().build().unwrap();
    let result = sampler.sample(&|x: f64| x * x, -1.0, 1.0).unwrap();
    let text = format!("{}", result);

    assert!(text.starts_with("Summary:"));
    assert!(text.contains("Transform:   Identity"));
    assert!(text.contains("Sample Diagnostics:"));
    assert!(text.contains("Samples:"));
    // Long results are elided in the middle
    assert!(text.contains("..."));
}

/// Test that results are reusable across calls of one sampler.
#[test]
fn test_sampler_is_reusable() {
    let sampler = Sampler::<f64>::new().grid_points(8).build().unwrap();
    let a = sampler.sample(&|x: f64| x, 0.0, 1.0).unwrap();
    let b = sampler.sample(&|x: f64| -x, 0.0, 1.0).unwrap();

    assert_eq!(a.len(), 9);
    assert_eq!(b.len(), 9);
    assert_eq!(a.x, b.x);
}

// ============================================================================
// Extensibility Tests
// ============================================================================

/// Reports failure on every search.
struct Unavailable;

impl Maximizer<f64> for Unavailable {
    fn maximize<F>(&self, _objective: F, _lower: f64, _upper: f64) -> Result<f64, OptimizerError>
    where
        F: FnMut(f64) -> f64,
    {
        Err(OptimizerError::InvalidBracket)
    }
}

/// Test that maximizer failures degrade to the baseline grid.
#[test]
fn test_custom_maximizer_failure_falls_back_to_grid() {
    let sampler = Sampler::<f64>::new().build().unwrap().with_maximizer(Unavailable);
    let result = sampler
        .sample(&|x: f64| (50.0 * x).sin(), 0.0, core::f64::consts::TAU)
        .unwrap();

    assert_eq!(result.len(), 129);
    assert_eq!(result.stats.split, 0);
}

/// Test a differently tuned Brent maximizer.
#[test]
fn test_custom_brent() {
    let sampler = Sampler::<f64>::new()
        .build()
        .unwrap()
        .with_maximizer(Brent::new(1e-6, 1e-6, 200));
    let result = sampler.sample(&|x: f64| x.sin(), 0.0, 3.0).unwrap();

    assert!(result.len() > 129);
}

/// Test sampling through trait objects.
#[test]
fn test_dynamic_function() {
    let functions: Vec<Box<dyn Fn(f64) -> f64>> =
        vec![Box::new(|x: f64| x.exp()), Box::new(|x: f64| x.cos())];
    let sampler = Sampler::<f64>::new().build().unwrap();

    for f in &functions {
        let result = sampler.sample(f.as_ref(), 0.0, 2.0).unwrap();
        assert_eq!(result.x[0], 0.0);
        assert_eq!(result.x[result.len() - 1], 2.0);
    }
}

/// Test that single-precision sampling refines curved regions.
#[test]
fn test_f32_sampling() {
    let result = sample(|x: f32| (50.0 * x).sin(), 0.0f32, 6.28f32, None).unwrap();

    assert!(result.stats.split > 0);
    assert!(result.len() > 129);
    assert!(result.x.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(result.x[0], 0.0);
    assert_eq!(result.x[result.len() - 1], 6.28);
}
