//! Diagnostics for a finished sample set.
//!
//! ## Purpose
//!
//! This module summarises how the sampler spent its points: how many came from
//! adaptive refinement beyond the baseline grid, how tightly they are packed,
//! and how many carry non-finite values.
//!
//! ## Design notes
//!
//! * **Post-hoc**: Computed from the output only; no algorithm state is needed.
//! * **Transformed space**: Spacing is measured along the plotted (transformed) axis.
//!
//! ## Key concepts
//!
//! * **Adaptive points**: Output points in excess of the `grid_points + 1` baseline.
//! * **Spacing**: Differences between consecutive output x-values.
//!
//! ## Invariants
//!
//! * `min_spacing <= mean_spacing <= max_spacing` whenever `points >= 2`.
//! * All spacings are zero when fewer than two points exist.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics
// ============================================================================

/// Summary statistics of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleDiagnostics<T> {
    /// Number of output points.
    pub points: usize,

    /// Points beyond the baseline grid.
    pub adaptive_points: usize,

    /// Points whose y-value is NaN or infinite.
    pub non_finite_values: usize,

    /// Smallest gap between consecutive x-values.
    pub min_spacing: T,

    /// Largest gap between consecutive x-values.
    pub max_spacing: T,

    /// Mean gap between consecutive x-values.
    pub mean_spacing: T,
}

impl<T: Float> SampleDiagnostics<T> {
    /// Compute diagnostics for sorted output coordinates.
    pub fn compute(x: &[T], y: &[T], grid_points: usize) -> Self {
        let n = x.len();
        let non_finite_values = y.iter().filter(|v| !v.is_finite()).count();

        if n < 2 {
            return Self {
                points: n,
                adaptive_points: 0,
                non_finite_values,
                min_spacing: T::zero(),
                max_spacing: T::zero(),
                mean_spacing: T::zero(),
            };
        }

        let (min_spacing, max_spacing) = x.windows(2).map(|w| w[1] - w[0]).fold(
            (T::infinity(), T::zero()),
            |(lo, hi), gap| (lo.min(gap), hi.max(gap)),
        );

        Self {
            points: n,
            adaptive_points: n.saturating_sub(grid_points + 1),
            non_finite_values,
            min_spacing,
            max_spacing,
            mean_spacing: (x[n - 1] - x[0]) / T::from(n - 1).unwrap(),
        }
    }

    /// Ratio of the largest to the smallest gap; large values mean strong adaptation.
    pub fn spacing_ratio(&self) -> T {
        if self.min_spacing > T::zero() {
            self.max_spacing / self.min_spacing
        } else {
            T::one()
        }
    }
}

impl<T: Float + Display> Display for SampleDiagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Sample Diagnostics:")?;
        writeln!(f, "  Points:          {}", self.points)?;
        writeln!(f, "  Adaptive points: {}", self.adaptive_points)?;
        writeln!(f, "  Non-finite y:    {}", self.non_finite_values)?;
        writeln!(f, "  Min spacing:     {}", self.min_spacing)?;
        writeln!(f, "  Max spacing:     {}", self.max_spacing)?;
        write!(f, "  Mean spacing:    {}", self.mean_spacing)
    }
}
