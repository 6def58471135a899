//! Batch execution of independent sampling runs.
//!
//! ## Purpose
//!
//! This module maps one sampling run over each function of a batch. Runs share
//! nothing but the immutable sampler, so they can be distributed across CPU
//! cores without synchronization.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Ordering**: Results are collected in input order regardless of scheduling.
//! * **Determinism**: Each run is the sequential core algorithm, so parallel and
//!   sequential batches produce bit-identical results.
//!
//! ## Invariants
//!
//! * `output.len() == functions.len()` on success.
//! * `output[i]` is the result of `run(&functions[i])`.
//!
//! ## Non-goals
//!
//! * This module does not parallelize inside a single run.
//! * This module does not validate anything (handled by `plotsampler`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// ============================================================================
// Batch Runners
// ============================================================================

/// Run `run` on every function, distributing the work over the rayon pool.
#[cfg(feature = "cpu")]
pub fn sample_batch_parallel<F, R, E, G>(functions: &[F], run: G) -> Result<Vec<R>, E>
where
    F: Sync,
    R: Send,
    E: Send,
    G: Fn(&F) -> Result<R, E> + Sync + Send,
{
    functions.par_iter().map(run).collect()
}

/// Run `run` on every function in order on the calling thread.
pub fn sample_batch_sequential<F, R, E, G>(functions: &[F], run: G) -> Result<Vec<R>, E>
where
    G: Fn(&F) -> Result<R, E>,
{
    functions.iter().map(run).collect()
}
