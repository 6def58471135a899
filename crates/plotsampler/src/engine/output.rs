//! Output types for sampling runs.
//!
//! ## Purpose
//!
//! This module defines [`SampleResult`], the ordered point sequence handed to
//! plotting or table storage, together with the run statistics and optional
//! diagnostics.
//!
//! ## Design notes
//!
//! * **Columnar**: x and y are stored as parallel vectors, ready for plotting back-ends.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `x.len() == y.len()`.
//! * `x` is strictly increasing and NaN-free; `y` may hold NaN or infinities.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::refine::RefineStats;
use crate::evaluation::diagnostics::SampleDiagnostics;

// ============================================================================
// Result Structure
// ============================================================================

/// Adaptive sample of a function over a domain.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleResult<T> {
    /// Transformed x-values, strictly increasing.
    pub x: Vec<T>,

    /// Function values at the untransformed abscissae.
    pub y: Vec<T>,

    /// The raw sampling domain `(min, max)`.
    pub domain: (T, T),

    /// Name of the x-axis transform (`"Custom"` for user closures).
    pub transform: &'static str,

    /// Number of baseline grid intervals used.
    ///
    /// The grid contributes `grid_points + 1` samples, both domain ends
    /// included, so a straight line yields exactly `grid_points + 1` points.
    pub grid_points: usize,

    /// Refinement statistics.
    pub stats: RefineStats,

    /// Spacing diagnostics, when requested.
    pub diagnostics: Option<SampleDiagnostics<T>>,
}

impl<T: Float> SampleResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the result holds no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs in ascending x.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Collect the points into a vector of `(x, y)` pairs.
    pub fn to_pairs(&self) -> Vec<(T, T)> {
        self.points().collect()
    }

    /// Whether refinement stopped early because the segment budget ran out.
    pub fn budget_exhausted(&self) -> bool {
        self.stats.budget_exhausted
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for SampleResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Domain:      [{}, {}]", self.domain.0, self.domain.1)?;
        writeln!(f, "  Transform:   {}", self.transform)?;
        writeln!(f, "  Points:      {}", self.x.len())?;
        writeln!(f, "  Grid:        {}", self.grid_points)?;
        writeln!(
            f,
            "  Segments:    {} accepted, {} split, {} discarded",
            self.stats.accepted, self.stats.split, self.stats.discarded
        )?;
        if self.stats.budget_exhausted {
            writeln!(f, "  Budget:      exhausted")?;
        }
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
            writeln!(f)?;
        }

        writeln!(f, "Samples:")?;
        writeln!(f, "{:>14} {:>14}", "X", "Y")?;
        writeln!(f, "{:-<29}", "")?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.x.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>14}", "...")?;
            }
            prev_idx = idx;
            writeln!(f, "{:>14.6} {:>14.6}", self.x[idx], self.y[idx])?;
        }

        Ok(())
    }
}
