//! Peak and half-max decay detection
//!
//! Both routines look at the samples of one curve whose time is at or after a
//! start bound. The peak is the first occurrence of the maximum value in that
//! window, so ties resolve to the earliest time.

use serde::{Deserialize, Serialize};

use super::error::AnalysisError;
use crate::data::Tac;

/// Returned by [`find_peak_half`] when the curve never decays to half its peak
pub const NO_HALF_MAX: f64 = -1.0;

/// Time and value of a curve maximum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// Time of the maximum (seconds)
    pub time: f64,
    /// Maximum value
    pub value: f64,
}

impl From<Peak> for (f64, f64) {
    fn from(peak: Peak) -> Self {
        (peak.time, peak.value)
    }
}

/// Look up a curve and cut both it and the time axis to `tacq >= start`
pub(crate) fn window_from<'a>(
    tac: &'a Tac,
    label: &str,
    start: f64,
) -> Result<(&'a [f64], &'a [f64]), AnalysisError> {
    let values = tac
        .curve(label)
        .ok_or_else(|| AnalysisError::UnknownLabel(label.to_string()))?;
    let times = tac.times();

    // Sorted axis: `t >= start` holds on a suffix. Written negated so a NaN
    // bound selects nothing.
    let first = times.partition_point(|&t| !(t >= start));
    Ok((&times[first..], &values[first..]))
}

/// Index of the first maximum, `None` for an empty slice
#[inline]
pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    let mut iter = values.iter().enumerate();
    let (mut max_i, mut max_v) = iter.next().map(|(i, &v)| (i, v))?;
    for (i, &v) in iter {
        if v > max_v {
            max_i = i;
            max_v = v;
        }
    }
    Some(max_i)
}

/// Find the maximum of a curve at or after `start`
///
/// # Errors
/// - [`AnalysisError::UnknownLabel`] if `label` is not a curve of `tac`
/// - [`AnalysisError::EmptySelection`] if no sample has `time >= start`
///
/// # Example
/// ```rust
/// use siren::analysis::find_peak;
/// use siren::data::Tac;
///
/// let tac = Tac::builder(vec![0.0, 1.0, 2.0, 3.0])
///     .curve("aorta", vec![0.0, 1e4, 450.0, 3900.0])
///     .build()
///     .unwrap();
///
/// let peak = find_peak(&tac, "aorta", 1.5).unwrap();
/// assert_eq!((peak.time, peak.value), (3.0, 3900.0));
/// ```
pub fn find_peak(tac: &Tac, label: &str, start: f64) -> Result<Peak, AnalysisError> {
    let (times, values) = window_from(tac, label, start)?;
    let idx = argmax(values).ok_or(AnalysisError::EmptySelection { start })?;

    Ok(Peak {
        time: times[idx],
        value: values[idx],
    })
}

/// Index into the `start` window of the first half-max sample after the peak
///
/// `None` when the window ends before the curve decays to half its peak.
fn half_max_index(values: &[f64], start: f64) -> Result<Option<usize>, AnalysisError> {
    let peak = argmax(values).ok_or(AnalysisError::EmptySelection { start })?;
    let half = 0.5 * values[peak];

    Ok(values[peak..]
        .iter()
        .position(|&v| v <= half)
        .map(|offset| peak + offset))
}

/// Find the first time after the peak at which a curve falls to half its peak
///
/// The peak is located as in [`find_peak`]. From there the samples are walked
/// forward; the first one with `value <= 0.5 * peak` gives the returned time.
/// If the window ends first (including when the peak is the last sample),
/// [`NO_HALF_MAX`] (`-1.0`) is returned. Use [`half_max_time`] when the time
/// axis may contain `-1.0` itself.
///
/// # Errors
/// Same as [`find_peak`].
pub fn find_peak_half(tac: &Tac, label: &str, start: f64) -> Result<f64, AnalysisError> {
    Ok(half_max_time(tac, label, start)?.unwrap_or(NO_HALF_MAX))
}

/// Like [`find_peak_half`], but `None` when the curve never decays to half
/// its peak
///
/// # Errors
/// Same as [`find_peak`].
pub fn half_max_time(tac: &Tac, label: &str, start: f64) -> Result<Option<f64>, AnalysisError> {
    let (times, values) = window_from(tac, label, start)?;
    Ok(half_max_index(values, start)?.map(|idx| times[idx]))
}
