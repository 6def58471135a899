#![cfg(feature = "dev")]
//! Tests for the transformed-coordinate bisection search.
//!
//! ## Test Organization
//!
//! 1. **Targets** - Interior, exact and endpoint targets
//! 2. **Transforms** - Non-identity and decreasing transforms
//! 3. **Edge Cases** - Unreachable targets and collapsed brackets

use std::cell::Cell;

use approx::assert_relative_eq;

use plotsampler::internals::algorithms::trace::trace_toward;
use plotsampler::internals::math::function::AxisTransform;

// ============================================================================
// Target Tests
// ============================================================================

/// Test an interior target on a linear axis.
#[test]
fn test_trace_identity_interior() {
    let identity = |x: f64| x;
    let (x, x_t) = trace_toward(0.0, 0.0, 1.0, 1.0, 0.3, &identity);

    assert_relative_eq!(x, 0.3, epsilon = 1e-12);
    assert_eq!(x, x_t);
}

/// Test that an exactly representable midpoint stops the search immediately.
#[test]
fn test_trace_exact_midpoint() {
    let calls = Cell::new(0);
    let counting = |x: f64| {
        calls.set(calls.get() + 1);
        x
    };

    let (x, _) = trace_toward(0.0, 0.0, 1.0, 1.0, 0.5, &counting);

    assert_eq!(x, 0.5);
    assert_eq!(calls.get(), 1);
}

/// Test that a target equal to an endpoint returns that endpoint.
#[test]
fn test_trace_endpoint_target() {
    let identity = |x: f64| x;
    assert_eq!(trace_toward(2.0, 2.0, 4.0, 4.0, 2.0, &identity), (2.0, 2.0));
    assert_eq!(trace_toward(2.0, 2.0, 4.0, 4.0, 4.0, &identity), (4.0, 4.0));
}

// ============================================================================
// Transform Tests
// ============================================================================

/// Test a logarithmic axis.
#[test]
fn test_trace_log_axis() {
    let (x, x_t) = trace_toward(1.0, 0.0, 100.0, 100f64.ln(), 3f64.ln(), &AxisTransform::Ln);

    assert_relative_eq!(x, 3.0, epsilon = 1e-9);
    assert_relative_eq!(x_t, 3f64.ln(), epsilon = 1e-12);
}

/// Test a decreasing transform.
#[test]
fn test_trace_decreasing_transform() {
    let negate = |x: f64| -x;
    let (x, x_t) = trace_toward(0.0, 0.0, 10.0, -10.0, -7.25, &negate);

    assert_relative_eq!(x, 7.25, epsilon = 1e-12);
    assert_relative_eq!(x_t, -7.25, epsilon = 1e-12);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that an unreachable target yields the closest bracket end.
#[test]
fn test_trace_target_outside_bracket() {
    let identity = |x: f64| x;
    let (x, _) = trace_toward(0.0, 0.0, 1.0, 1.0, 5.0, &identity);
    assert_relative_eq!(x, 1.0, epsilon = 1e-12);
}

/// Test a bracket with no representable midpoint.
#[test]
fn test_trace_collapsed_bracket() {
    let identity = |x: f64| x;
    let a = 1.0f64;
    let b = f64::from_bits(a.to_bits() + 1);
    let (x, _) = trace_toward(a, a, b, b, 0.5 * (a + b), &identity);
    assert!(x == a || x == b);
}

/// Test that a transform returning NaN does not derail the search.
#[test]
fn test_trace_nan_transform_region() {
    // NaN below 0.5, identity above
    let partial = |x: f64| if x < 0.5 { f64::NAN } else { x };
    let (x, x_t) = trace_toward(0.5, 0.5, 1.0, 1.0, 0.75, &partial);

    assert_relative_eq!(x, 0.75, epsilon = 1e-12);
    assert!(!x_t.is_nan());
}
