//! # plotsampler: Adaptive Function Sampling for Plotting
//!
//! Turns a real function `f(x)` on a closed interval into an ordered sequence
//! of `(x, y)` points that is dense where the curve bends and sparse where it
//! is nearly straight, so that a polyline through the points looks like the
//! true curve.
//!
//! ## How it works
//!
//! 1. A single segment spanning `[min, max]` seeds a bounded work list.
//! 2. For each segment, a univariate maximizer (Brent's method by default)
//!    finds the interior point farthest from the chord between the endpoints.
//! 3. If that deviation exceeds the segment's threshold, the segment is split
//!    at that point; otherwise its endpoints are accepted as samples.
//! 4. Segments with NaN or infinite endpoint values are bisected instead.
//! 5. A uniform grid of `grid_points + 1` samples is always added, and the
//!    pool is sorted and deduplicated on the (possibly transformed) x-axis.
//!
//! The total number of segments is capped, so every call terminates with a
//! bounded number of points even for pathological functions.
//!
//! ## Quick Start
//!
//! ### One-shot sampling
//!
//! ```rust
//! use plotsampler::prelude::*;
//!
//! let result = sample(|x: f64| (50.0 * x).sin(), 0.0, core::f64::consts::TAU, None)?;
//!
//! assert!(result.len() > 129);
//! assert!(result.x.windows(2).all(|w| w[0] < w[1]));
//! # Result::<(), SamplerError>::Ok(())
//! ```
//!
//! ### Configured sampler
//!
//! ```rust
//! use plotsampler::prelude::*;
//!
//! let sampler = Sampler::<f64>::new()
//!     .grid_points(64)          // Coarser baseline grid
//!     .axis(Log10)              // Logarithmic x-axis
//!     .return_diagnostics()
//!     .build()?;
//!
//! let result = sampler.sample(&|x: f64| x.sqrt(), 1.0, 1.0e4)?;
//!
//! // x is plotted in log10 space, y is computed from the raw abscissa
//! let last = result.len() - 1;
//! assert_eq!(result.x[0], 0.0);
//! assert!((result.x[last] - 4.0).abs() < 1e-12);
//! assert_eq!(result.y[last], 100.0);
//!
//! println!("{}", result);
//! # Result::<(), SamplerError>::Ok(())
//! ```
//!
//! ### Custom transforms
//!
//! Any `Fn(T) -> T` can serve as the function or as the axis transform:
//!
//! ```rust
//! use plotsampler::prelude::*;
//!
//! let sampler = Sampler::<f64>::new().build()?;
//! let squash = |x: f64| x / (1.0 + x);
//! let result = sampler.sample_with_transform(&|x: f64| x.ln(), &squash, 0.5, 100.0)?;
//!
//! assert_eq!(result.transform, "Custom");
//! # Result::<(), SamplerError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! Only configuration problems are errors: reversed or non-finite domains, a
//! transform that maps a bound to a non-finite value, and out-of-range
//! parameters. NaN and infinite function values are treated as data, and a
//! spent point budget is reported through [`SampleResult::budget_exhausted`]
//! rather than as a failure.
//!
//! ## Logging
//!
//! Run summaries are emitted at `debug` level and per-segment events at `trace`
//! level through the `log` facade. No logger is installed by this crate.
//!
//! ## `no_std` support
//!
//! Disable default features to build without the standard library; `alloc`
//! is still required.
//!
//! ```toml
//! [dependencies]
//! plotsampler = { version = "0.1", default-features = false }
//! ```
//!
//! [`SampleResult::budget_exhausted`]: crate::prelude::SampleResult::budget_exhausted

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - capability traits, chord geometry and the maximizer.
mod math;

// Layer 3: Algorithms - refinement, clamp search and assembly.
mod algorithms;

// Layer 4: Evaluation - post-processing and diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for adaptive sampling.
mod api;

// Standard plotsampler prelude.
pub mod prelude {
    pub use crate::api::{
        sample, AdaptiveSampler,
        AxisTransform::{self, Identity, Ln, Log10, Log2, Sqrt},
        Brent, Maximizer, OptimizerError, RefineStats, SampleDiagnostics, SampleResult,
        SamplerBuilder as Sampler, SamplerError, Transform, UnaryFunction,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
