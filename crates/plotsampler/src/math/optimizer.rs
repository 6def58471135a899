//! Bounded univariate maximization.
//!
//! ## Purpose
//!
//! This module defines the [`Maximizer`] capability used to locate the point of
//! largest chord deviation inside a segment, and ships [`Brent`], a bounded
//! Brent search (golden-section steps safeguarding parabolic interpolation).
//!
//! ## Design notes
//!
//! * **Injected**: The sampler is generic over `Maximizer`; any bounded search that
//!   terminates on its own can replace [`Brent`].
//! * **NaN-safe**: A NaN objective value is ranked below every number, so it can
//!   never be reported as the optimum.
//! * **Bounded**: Every objective call counts against `max_evaluations`; hitting the
//!   cap is reported as [`OptimizerError::TooManyEvaluations`].
//! * **Deterministic**: The search starts at the bracket midpoint and uses no
//!   randomness, so identical objectives yield identical call sequences.
//!
//! ## Key concepts
//!
//! * **Tolerance**: Convergence when the bracket half-width around the current best
//!   falls below `2 * (relative_tolerance * |x| + absolute_tolerance)`. The step
//!   `x + tol` must differ from `x`, so the defaults never drop below the
//!   precision of `T`.
//!
//! ## Non-goals
//!
//! * This module does not search for global optima of multimodal objectives.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::OptimizerError;
use crate::primitives::segment::midpoint;

/// `(3 - sqrt(5)) / 2`, the golden-section step ratio.
const GOLDEN_SECTION: f64 = 0.381_966_011_250_105_1;

/// Default relative tolerance floor, in multiples of machine epsilon.
const RELATIVE_TOLERANCE_ULPS: f64 = 64.0;

// ============================================================================
// Maximizer Capability
// ============================================================================

/// A bounded search for the maximum of a scalar objective on an interval.
pub trait Maximizer<T: Float> {
    /// Return the abscissa of the best objective value found in `[lower, upper]`.
    fn maximize<F>(&self, objective: F, lower: T, upper: T) -> Result<T, OptimizerError>
    where
        F: FnMut(T) -> T;
}

// ============================================================================
// Brent Search
// ============================================================================

/// Brent's bounded scalar search, used as a maximizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brent<T> {
    /// Relative tolerance on the abscissa.
    pub relative_tolerance: T,

    /// Absolute tolerance on the abscissa.
    pub absolute_tolerance: T,

    /// Maximum number of objective evaluations.
    pub max_evaluations: usize,
}

impl<T: Float> Default for Brent<T> {
    /// Relative tolerance `1e-12` and absolute tolerance `1e-10`, raised to
    /// `64 * epsilon` and `epsilon` where the type cannot resolve them.
    fn default() -> Self {
        let eps = T::epsilon();
        Self {
            relative_tolerance: T::from(1e-12)
                .unwrap()
                .max(eps * T::from(RELATIVE_TOLERANCE_ULPS).unwrap()),
            absolute_tolerance: T::from(1e-10).unwrap().max(eps),
            max_evaluations: 30_000,
        }
    }
}

impl<T: Float> Brent<T> {
    /// Create a search with explicit tolerances and evaluation cap.
    pub fn new(relative_tolerance: T, absolute_tolerance: T, max_evaluations: usize) -> Self {
        Self {
            relative_tolerance,
            absolute_tolerance,
            max_evaluations,
        }
    }
}

impl<T: Float> Maximizer<T> for Brent<T> {
    fn maximize<F>(&self, mut objective: F, lower: T, upper: T) -> Result<T, OptimizerError>
    where
        F: FnMut(T) -> T,
    {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(OptimizerError::InvalidBracket);
        }

        let half = T::from(0.5).unwrap();
        let two = T::from(2.0).unwrap();
        let golden = T::from(GOLDEN_SECTION).unwrap();
        let max_evaluations = self.max_evaluations;

        // Minimize the negated objective; NaN ranks as the worst possible value.
        let mut evaluations = 0usize;
        let mut cost = |x: T| -> Result<T, OptimizerError> {
            if evaluations >= max_evaluations {
                return Err(OptimizerError::TooManyEvaluations {
                    max: max_evaluations,
                });
            }
            evaluations += 1;
            let value = objective(x);
            Ok(if value.is_nan() { T::infinity() } else { -value })
        };

        let mut a = lower;
        let mut b = upper;
        let mut x = midpoint(a, b);
        let mut w = x;
        let mut v = x;
        let mut d = T::zero();
        let mut e = T::zero();

        let mut fx = cost(x)?;
        let mut fw = fx;
        let mut fv = fx;

        loop {
            let m = midpoint(a, b);
            let tol1 = self.relative_tolerance * x.abs() + self.absolute_tolerance;
            let tol2 = two * tol1;

            if (x - m).abs() <= tol2 - half * (b - a) {
                return Ok(x);
            }

            let mut golden_step = true;
            if e.abs() > tol1 {
                // Fit a parabola through x, w, v
                let mut r = (x - w) * (fx - fv);
                let mut q = (x - v) * (fx - fw);
                let mut p = (x - v) * q - (x - w) * r;
                q = two * (q - r);

                if q > T::zero() {
                    p = -p;
                } else {
                    q = -q;
                }

                r = e;
                e = d;

                if p > q * (a - x) && p < q * (b - x) && p.abs() < (half * q * r).abs() {
                    d = p / q;
                    let u = x + d;
                    // Never evaluate too close to the bracket ends
                    if u - a < tol2 || b - u < tol2 {
                        d = if x <= m { tol1 } else { -tol1 };
                    }
                    golden_step = false;
                }
            }

            if golden_step {
                e = if x < m { b - x } else { a - x };
                d = golden * e;
            }

            let u = if d.abs() < tol1 {
                if d >= T::zero() {
                    x + tol1
                } else {
                    x - tol1
                }
            } else {
                x + d
            };

            let fu = cost(u)?;

            if fu <= fx {
                if u < x {
                    b = x;
                } else {
                    a = x;
                }
                v = w;
                fv = fw;
                w = x;
                fw = fx;
                x = u;
                fx = fu;
            } else {
                if u < x {
                    a = u;
                } else {
                    b = u;
                }
                if fu <= fw || w == x {
                    v = w;
                    fv = fw;
                    w = u;
                    fw = fu;
                } else if fu <= fv || v == x || v == w {
                    v = u;
                    fv = fu;
                }
            }
        }
    }
}
