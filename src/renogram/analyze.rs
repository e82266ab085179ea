//! Renogram analysis: composes the TAC routines into clinical metrics

use crate::analysis::{find_peak, half_max_time, integrate, AnalysisError, Peak};
use crate::data::Tac;

use super::types::{KidneyParams, RenogramLabels, RenogramOptions, RenogramResult, Side, Warning};

/// Derive renogram parameters for both kidneys
///
/// 1. The input peak is the maximum of the aorta curve.
/// 2. Each kidney's Tmax and T½ are searched from `input peak + uptake_delay`
///    and reported relative to the input peak.
/// 3. Split function compares the kidney integrals over the split window.
/// 4. Retention is the kidney activity at the first sample after
///    `input peak + retention_time`, as a percentage of the kidney peak.
///
/// # Errors
/// Fails if a label is missing from the TAC or if no sample exists at or
/// after the uptake start. Undefined secondary metrics are reported as
/// [`Warning`]s instead.
pub fn analyze(
    tac: &Tac,
    labels: &RenogramLabels,
    options: &RenogramOptions,
) -> Result<RenogramResult, AnalysisError> {
    let input_peak = find_peak(tac, &labels.aorta, 0.0)?;
    let t_peak = input_peak.time;
    tracing::debug!(t_peak, value = input_peak.value, "Found input peak");

    let uptake_start = t_peak + options.uptake_delay;
    let split_window = (
        t_peak + options.split_window.0,
        t_peak + options.split_window.1,
    );

    let mut warnings = Vec::new();

    let (retention_idx, retention_sample_time) =
        retention_sample(tac, t_peak + options.retention_time, &mut warnings);

    let mut left = kidney_params(
        tac,
        labels,
        Side::Left,
        t_peak,
        uptake_start,
        split_window,
        retention_idx,
        &mut warnings,
    )?;
    let mut right = kidney_params(
        tac,
        labels,
        Side::Right,
        t_peak,
        uptake_start,
        split_window,
        retention_idx,
        &mut warnings,
    )?;

    let total = left.uptake + right.uptake;
    if total != 0.0 {
        left.split_function = Some(100.0 * left.uptake / total);
        right.split_function = Some(100.0 * right.uptake / total);
    } else {
        warnings.push(Warning::NoUptakeInWindow);
    }

    for w in &warnings {
        tracing::warn!("{}", w);
    }

    Ok(RenogramResult {
        input_peak,
        uptake_start,
        split_window,
        retention_sample_time,
        left,
        right,
        options: options.clone(),
        warnings,
    })
}

/// Index and time of the first sample strictly after `target`
///
/// Falls back to the last sample when the study is too short.
fn retention_sample(tac: &Tac, target: f64, warnings: &mut Vec<Warning>) -> (usize, f64) {
    let times = tac.times();
    let mut idx = times.partition_point(|&t| t <= target);

    if idx == times.len() {
        idx = times.len().saturating_sub(1);
        let used = times.get(idx).copied().unwrap_or(0.0);
        warnings.push(Warning::RenogramEndedEarly {
            requested: target,
            used,
        });
    }

    (idx, times.get(idx).copied().unwrap_or(0.0))
}

#[allow(clippy::too_many_arguments)]
fn kidney_params(
    tac: &Tac,
    labels: &RenogramLabels,
    side: Side,
    t_peak: f64,
    uptake_start: f64,
    split_window: (f64, f64),
    retention_idx: usize,
    warnings: &mut Vec<Warning>,
) -> Result<KidneyParams, AnalysisError> {
    let label = labels.kidney(side);

    let peak: Peak = find_peak(tac, label, uptake_start)?;
    let uptake = integrate(tac, label, split_window.0, split_window.1)?;

    let half_max = half_max_time(tac, label, uptake_start)?;
    if half_max.is_none() {
        warnings.push(Warning::NoHalfMax { side });
    }

    let values = tac
        .curve(label)
        .ok_or_else(|| AnalysisError::UnknownLabel(label.to_string()))?;
    let retention = if peak.value != 0.0 {
        Some(100.0 * values[retention_idx] / peak.value)
    } else {
        warnings.push(Warning::ZeroPeak { side });
        None
    };

    tracing::debug!(
        %side,
        tmax = peak.time - t_peak,
        uptake,
        "Kidney parameters"
    );

    Ok(KidneyParams {
        peak,
        tmax: peak.time - t_peak,
        half_max_time: half_max,
        t_half: half_max.map(|t| t - t_peak),
        uptake,
        split_function: None,
        retention,
    })
}
