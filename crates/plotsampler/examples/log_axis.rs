//! plotsampler Axis Examples
//!
//! This example demonstrates:
//! - One-shot sampling on a linear axis
//! - Built-in logarithmic axes
//! - Custom axis transforms
//! - Diagnostics for judging how strongly the sampler adapted

use plotsampler::prelude::*;

fn main() -> Result<(), SamplerError> {
    println!("{}", "=".repeat(80));
    println!("plotsampler Axis Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_linear_axis()?;
    example_2_log_axis()?;
    example_3_custom_transform()?;

    Ok(())
}

/// Example 1: Linear Axis
/// A fast oscillation gets extra points near its peaks and troughs
fn example_1_linear_axis() -> Result<(), SamplerError> {
    println!("Example 1: Linear Axis");
    println!("{}", "-".repeat(80));

    let result = sample(|x: f64| (50.0 * x).sin(), 0.0, std::f64::consts::TAU, None)?;
    println!("{}", result);

    println!();
    Ok(())
}

/// Example 2: Logarithmic Axis
/// A frequency response spanning five decades, plotted on a log10 axis
fn example_2_log_axis() -> Result<(), SamplerError> {
    println!("Example 2: Logarithmic Axis");
    println!("{}", "-".repeat(80));

    // Magnitude of a second-order low-pass filter with a resonance at 1 kHz
    let f0 = 1000.0;
    let q = 8.0;
    let response = move |f: f64| {
        let r = f / f0;
        1.0 / ((1.0 - r * r).powi(2) + (r / q).powi(2)).sqrt()
    };

    let sampler = Sampler::<f64>::new().axis(Log10).return_diagnostics().build()?;
    let result = sampler.sample(&response, 10.0, 1.0e6)?;

    println!("{}", result);
    if let Some(diag) = &result.diagnostics {
        println!("Spacing ratio (max/min): {:.1}", diag.spacing_ratio());
    }

    println!();
    Ok(())
}

/// Example 3: Custom Transform
/// Any closure can map raw x onto the plotted axis
fn example_3_custom_transform() -> Result<(), SamplerError> {
    println!("Example 3: Custom Transform");
    println!("{}", "-".repeat(80));

    // Symmetric log axis: linear near zero, logarithmic further out
    let symlog = |x: f64| x.signum() * (1.0 + x.abs()).ln();

    let sampler = Sampler::<f64>::new().grid_points(64).build()?;
    let result = sampler.sample_with_transform(&|x: f64| x.tanh(), &symlog, -100.0, 100.0)?;

    println!("{}", result);
    println!("Budget exhausted: {}", result.budget_exhausted());

    println!();
    Ok(())
}
