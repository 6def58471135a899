//! # fast-plotsampler: Parallel Adaptive Function Sampling
//!
//! Batch front-end for [`plotsampler`]. Dashboards and plot grids often need
//! dozens of curves over the same domain; each curve is an independent
//! sampling run, so the batch is spread across CPU cores with `rayon` while
//! every single run stays the deterministic sequential algorithm.
//!
//! ## Quick Start
//!
//! ```rust
//! use fast_plotsampler::prelude::*;
//!
//! let curves: [fn(f64) -> f64; 3] = [f64::sin, f64::cos, f64::tanh];
//!
//! let sampler = Sampler::<f64>::new()
//!     .grid_points(64)
//!     .parallel(true)     // Default when the `cpu` feature is enabled
//!     .build()?;
//!
//! let results = sampler.sample_all(&curves, -5.0, 5.0)?;
//!
//! assert_eq!(results.len(), 3);
//! for result in &results {
//!     assert_eq!(result.x[0], -5.0);
//!     assert_eq!(result.x[result.len() - 1], 5.0);
//! }
//! # Result::<(), SamplerError>::Ok(())
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): parallel batches on the rayon thread pool. Without it,
//!   batches run sequentially and `parallel(true)` has no effect.
//!
//! ## Determinism
//!
//! Parallel and sequential batches yield bit-identical results in input order.

// Layer 5: Engine - batch distribution.
mod engine;

// High-level fluent API for batch sampling.
mod api;

// Standard fast-plotsampler prelude.
pub mod prelude {
    pub use crate::api::{
        AdaptiveSampler,
        AxisTransform::{self, Identity, Ln, Log10, Log2, Sqrt},
        Brent, Maximizer, ParallelSampler, ParallelSamplerBuilder as Sampler, SampleDiagnostics,
        SampleResult, SamplerError, Transform, UnaryFunction,
    };
}
