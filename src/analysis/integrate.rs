//! Trapezoidal integration of time-activity curves
//!
//! ```text
//! ∫ a(t) dt ≈ Σ (t[k+1] - t[k]) × (a[k] + a[k+1]) / 2
//! ```
//!
//! Only the samples inside the window contribute; the window edges are not
//! interpolated.

use super::error::AnalysisError;
use crate::data::Tac;

/// Trapezoidal integral of `values` against `times`
///
/// Segments are accumulated in order of increasing index. Fewer than two
/// samples integrate to `0.0`.
///
/// # Panics
/// Panics if `times.len() != values.len()`.
///
/// # Example
/// ```rust
/// use siren::analysis::trapezoid;
///
/// let area = trapezoid(&[0.0, 1.0, 3.0], &[0.0, 2.0, 2.0]);
/// assert_eq!(area, 5.0); // 1 + 4
/// ```
pub fn trapezoid(times: &[f64], values: &[f64]) -> f64 {
    assert_eq!(
        times.len(),
        values.len(),
        "times and values must have equal length"
    );

    if times.len() < 2 {
        return 0.0;
    }

    times
        .windows(2)
        .zip(values.windows(2))
        .fold(0.0, |acc, (t, a)| acc + (t[1] - t[0]) * (a[0] + a[1]) / 2.0)
}

/// Integrate a curve over the closed window `[start, end]`
///
/// Samples with `start <= time <= end` are integrated with [`trapezoid`]. A
/// window holding zero or one sample (including `end < start`) gives `0.0`.
///
/// # Errors
/// [`AnalysisError::UnknownLabel`] if `label` is not a curve of `tac`.
///
/// # Example
/// ```rust
/// use siren::analysis::integrate;
/// use siren::data::Tac;
///
/// let tac = Tac::builder(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
///     .curve("kidney", vec![0.0, 1.0, 2.0, 3.0, 3.0, 2.0, 1.0])
///     .build()
///     .unwrap();
///
/// assert_eq!(integrate(&tac, "kidney", 2.0, 5.0).unwrap(), 8.0);
/// ```
pub fn integrate(tac: &Tac, label: &str, start: f64, end: f64) -> Result<f64, AnalysisError> {
    let values = tac
        .curve(label)
        .ok_or_else(|| AnalysisError::UnknownLabel(label.to_string()))?;
    let times = tac.times();

    let lo = times.partition_point(|&t| !(t >= start));
    let hi = times.partition_point(|&t| t <= end);

    if hi < lo + 2 {
        return Ok(0.0);
    }

    Ok(trapezoid(&times[lo..hi], &values[lo..hi]))
}
