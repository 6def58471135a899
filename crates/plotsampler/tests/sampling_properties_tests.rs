//! End-to-end properties of adaptive sampling.
//!
//! These tests check the guarantees every sample set must satisfy, using
//! functions whose behavior is known in closed form:
//! - Determinism and strict monotonicity of the output
//! - Inclusion of both domain ends
//! - Bounded output size
//! - Minimal output for linear functions
//! - Denser sampling where the curve bends
//! - Termination near poles
//! - Correct handling of a logarithmic axis
//!
//! ## Test Organization
//!
//! 1. **Structural Properties** - Determinism, ordering, endpoints, size
//! 2. **Adaptivity** - Linear, oscillating and singular functions
//! 3. **Transforms** - Logarithmic and decreasing axes

use approx::assert_relative_eq;
use core::f64::consts::TAU;

use plotsampler::prelude::*;

const GRID: usize = 128;
const BUDGET: usize = 3096;

fn oscillating(x: f64) -> f64 {
    (50.0 * x).sin()
}

fn assert_strictly_increasing(x: &[f64]) {
    for (i, w) in x.windows(2).enumerate() {
        assert!(w[0] < w[1], "x[{}] = {} >= x[{}] = {}", i, w[0], i + 1, w[1]);
    }
    assert!(x.iter().all(|v| !v.is_nan()));
}

// ============================================================================
// Structural Property Tests
// ============================================================================

/// Test that identical calls give bit-identical output.
#[test]
fn test_determinism() {
    let a = sample(oscillating, 0.0, TAU, None).unwrap();
    let b = sample(oscillating, 0.0, TAU, None).unwrap();

    assert_eq!(a.len(), b.len());
    for i in 0..a.len() {
        assert_eq!(a.x[i].to_bits(), b.x[i].to_bits());
        assert_eq!(a.y[i].to_bits(), b.y[i].to_bits());
    }
    assert_eq!(a.stats, b.stats);
}

/// Test strict monotonicity for a variety of functions.
#[test]
fn test_strict_monotonicity() {
    let functions: [fn(f64) -> f64; 5] = [
        oscillating,
        |x| x.abs().sqrt(),
        |x| 1.0 / x,
        |x| (1.0 / x).sin(),
        |x| if x < 0.0 { f64::NAN } else { x.ln() },
    ];

    for f in functions {
        let result = sample(f, -1.0, 1.0, None).unwrap();
        assert_strictly_increasing(&result.x);
    }
}

/// Test that both domain ends appear in the output.
#[test]
fn test_endpoint_inclusion() {
    let (min, max) = (-2.5, 7.25);
    let result = sample(|x: f64| x.sin() * x, min, max, None).unwrap();

    assert_eq!(result.x[0], min);
    assert_eq!(result.x[result.len() - 1], max);

    let log = Sampler::<f64>::new().axis(Ln).build().unwrap();
    let result = log.sample(&|x: f64| x.sqrt(), 0.5, 40.0).unwrap();
    assert_eq!(result.x[0], 0.5f64.ln());
    assert_eq!(result.x[result.len() - 1], 40f64.ln());
}

/// Test that output size is bounded by grid and segment budget.
#[test]
fn test_boundedness() {
    let result = sample(oscillating, 0.0, TAU, None).unwrap();

    assert!(result.stats.admitted <= BUDGET);
    // Accepted segments share endpoints, so they contribute at most one point each plus one
    assert!(result.len() <= GRID + 1 + BUDGET + 1);
}

/// Test boundedness with a small budget.
#[test]
fn test_boundedness_small_budget() {
    let sampler = Sampler::<f64>::new()
        .grid_points(16)
        .max_adaptive_points(31)
        .build()
        .unwrap();
    let result = sampler.sample(&oscillating, 0.0, TAU).unwrap();

    assert!(result.budget_exhausted());
    assert!(result.stats.admitted <= 31);
    assert!(result.len() <= 17 + 32);
}

// ============================================================================
// Adaptivity Tests
// ============================================================================

/// Test that a straight line produces exactly the baseline grid.
#[test]
fn test_linear_is_minimal() {
    let result = sample(|x: f64| 2.0 * x + 1.0, 0.0, 10.0, None).unwrap();

    assert_eq!(result.len(), GRID + 1);
    assert_eq!(result.stats.split, 0);
    assert!(!result.budget_exhausted());
    for (x, y) in result.points() {
        assert_relative_eq!(y, 2.0 * x + 1.0, epsilon = 1e-12);
    }
}

/// Test that points concentrate where the curve bends.
#[test]
fn test_curvature_sensitivity() {
    let result = sample(oscillating, 0.0, TAU, None).unwrap();
    let grid_spacing = TAU / GRID as f64;

    let (mut bent, mut bent_n, mut flat, mut flat_n) = (0.0, 0usize, 0.0, 0usize);
    for w in result.x.windows(2) {
        let dx = w[1] - w[0];
        let y_mid = oscillating(0.5 * (w[0] + w[1])).abs();
        if y_mid > 0.95 {
            bent += dx;
            bent_n += 1;
        } else if y_mid < 0.2 {
            flat += dx;
            flat_n += 1;
        }
    }

    assert!(bent_n > 0 && flat_n > 0);
    let (bent_mean, flat_mean) = (bent / bent_n as f64, flat / flat_n as f64);
    assert!(
        bent_mean < flat_mean,
        "mean spacing near extrema {} should be below mean spacing near zeros {}",
        bent_mean,
        flat_mean
    );

    let min_dx = result
        .x
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(f64::INFINITY, f64::min);
    assert!(min_dx < grid_spacing);
    assert!(result.len() > GRID + 1);
}

/// Test that a pole neither loops forever nor breaks ordering.
#[test]
fn test_pole_terminates() {
    let result = sample(|x: f64| 1.0 / x, -1.0, 1.0, None).unwrap();

    assert!(result.stats.admitted <= BUDGET);
    assert_strictly_increasing(&result.x);
    assert_eq!(result.x[0], -1.0);
    assert_eq!(result.x[result.len() - 1], 1.0);
    // Values on both sides of the pole are present
    assert!(result.y.iter().any(|&y| y.is_finite() && y < -100.0));
    assert!(result.y.iter().any(|&y| y.is_finite() && y > 100.0));
}

/// Test that bounds near the largest float never produce points outside the domain.
#[test]
fn test_huge_finite_bounds() {
    let (min, max) = (1.0e300, 1.7e308);
    let in_domain = |x: &f64| x.is_finite() && *x >= min && *x <= max;

    // Every value overflows, so refinement runs on bisection alone
    let overflowing = sample(|x: f64| x * x, min, max, None).unwrap();
    assert_eq!(overflowing.x[0], min);
    assert_eq!(overflowing.x[overflowing.len() - 1], max);
    assert!(overflowing.x.iter().all(in_domain));
    assert_strictly_increasing(&overflowing.x);

    let scaled = sample(|x: f64| x * 1e-300, min, max, None).unwrap();
    assert!(scaled.x.iter().all(in_domain));
    assert!(scaled.y.iter().all(|y| y.is_finite()));
    assert_strictly_increasing(&scaled.x);
}

/// Test that NaN function values are kept as data.
#[test]
fn test_nan_values_kept() {
    let result = sample(|x: f64| x.sqrt(), -1.0, 1.0, None).unwrap();

    assert!(result.y.iter().any(|y| y.is_nan()));
    assert_eq!(result.x[0], -1.0);
    assert_strictly_increasing(&result.x);
}

// ============================================================================
// Transform Tests
// ============================================================================

/// Test that y is computed from the raw abscissa on a log axis.
#[test]
fn test_log_axis_values() {
    let ln: &dyn Fn(f64) -> f64 = &|x: f64| x.ln();
    let result = sample(|x: f64| x, 1.0, 1000.0, Some(ln)).unwrap();

    for (x_t, y) in result.points() {
        assert_relative_eq!(y, x_t.exp(), max_relative = 1e-12);
    }
}

/// Test that the grid-derived samples sit at the logs of a uniform raw grid.
#[test]
fn test_log_axis_grid() {
    let ln: &dyn Fn(f64) -> f64 = &|x: f64| x.ln();
    let result = sample(|x: f64| x, 1.0, 1000.0, Some(ln)).unwrap();

    for k in 0..=GRID {
        let raw = if k == GRID {
            1000.0
        } else {
            1.0 + 999.0 * (k as f64 / GRID as f64)
        };
        let expected = raw.ln();
        assert!(
            result.x.iter().any(|&x| x == expected),
            "grid sample ln({}) missing",
            raw
        );
    }
}

/// Test that a built-in log axis matches the same custom transform.
#[test]
fn test_builtin_axis_matches_closure() {
    let builtin = Sampler::<f64>::new().axis(Ln).build().unwrap();
    let custom = Sampler::<f64>::new().build().unwrap();
    let f = |x: f64| x.sin() / x;

    let a = builtin.sample(&f, 0.1, 50.0).unwrap();
    let b = custom.sample_with_transform(&f, &|x: f64| x.ln(), 0.1, 50.0).unwrap();

    assert_eq!(a.x, b.x);
    assert_eq!(a.y, b.y);
}

/// Test a decreasing transform.
#[test]
fn test_decreasing_transform() {
    let reversed: &dyn Fn(f64) -> f64 = &|x: f64| -x;
    let result = sample(|x: f64| x * x * x, 0.0, 2.0, Some(reversed)).unwrap();

    assert_strictly_increasing(&result.x);
    assert_eq!(result.x[0], -2.0);
    assert_eq!(result.y[0], 8.0);
    assert_eq!(result.x[result.len() - 1], 0.0);
}
