//! Capabilities for the sampled function and the x-axis transform.
//!
//! ## Purpose
//!
//! This module abstracts the two opaque collaborators of the sampler: the
//! function `f(x)` being plotted and the optional transform `t(x)` of the
//! horizontal axis (e.g., a logarithmic axis).
//!
//! ## Design notes
//!
//! * **Closures first**: Every `Fn(T) -> T` is both a [`UnaryFunction`] and a
//!   [`Transform`]; no wrapper types are needed.
//! * **Built-ins**: [`AxisTransform`] covers the usual plot axes and can be stored
//!   in configuration.
//! * **Stateless**: Nothing here holds mutable state; capabilities are shared by
//!   reference.
//!
//! ## Key concepts
//!
//! * **Raw vs transformed**: `y` is always computed from the raw `x`; the transform
//!   only decides where the point lands on the axis.
//!
//! ## Invariants
//!
//! * Functions must not panic for finite input; NaN and infinities are legitimate output.
//! * Transforms are expected to be finite for finite input inside the domain.
//!
//! ## Non-goals
//!
//! * This module does not validate monotonicity of transforms.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::segment::Knot;

// ============================================================================
// Capability Traits
// ============================================================================

/// A real function of one real argument.
pub trait UnaryFunction<T> {
    /// Evaluate the function at `x`.
    fn evaluate(&self, x: T) -> T;
}

impl<T, F> UnaryFunction<T> for F
where
    F: Fn(T) -> T + ?Sized,
{
    #[inline]
    fn evaluate(&self, x: T) -> T {
        self(x)
    }
}

/// A transform of the horizontal axis.
pub trait Transform<T> {
    /// Map a raw domain value to its plotted coordinate.
    fn apply(&self, x: T) -> T;
}

impl<T, F> Transform<T> for F
where
    F: Fn(T) -> T + ?Sized,
{
    #[inline]
    fn apply(&self, x: T) -> T {
        self(x)
    }
}

// ============================================================================
// Built-in Axis Transforms
// ============================================================================

/// Common plot axis transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisTransform {
    /// Linear axis, `t(x) = x`.
    #[default]
    Identity,

    /// Natural logarithm axis.
    Ln,

    /// Decimal logarithm axis.
    Log10,

    /// Binary logarithm axis.
    Log2,

    /// Square-root axis.
    Sqrt,
}

impl AxisTransform {
    /// Get the name of the transform.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Ln => "Ln",
            Self::Log10 => "Log10",
            Self::Log2 => "Log2",
            Self::Sqrt => "Sqrt",
        }
    }

    /// Whether the transform is only defined for positive arguments.
    pub fn requires_positive_domain(&self) -> bool {
        matches!(self, Self::Ln | Self::Log10 | Self::Log2)
    }
}

impl<T: Float> Transform<T> for AxisTransform {
    #[inline]
    fn apply(&self, x: T) -> T {
        match self {
            Self::Identity => x,
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Log2 => x.log2(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

// ============================================================================
// Evaluation Helper
// ============================================================================

/// Evaluate the transform and the function at the raw abscissa `x`.
#[inline]
pub fn knot_at<T, F, X>(x: T, function: &F, transform: &X) -> Knot<T>
where
    T: Float,
    F: UnaryFunction<T> + ?Sized,
    X: Transform<T> + ?Sized,
{
    Knot::new(x, transform.apply(x), function.evaluate(x))
}
