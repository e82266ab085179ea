//! Property checks over generated curves

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use siren::prelude::*;

/// Random non-decreasing time axis and non-negative curve
fn random_tac(rng: &mut StdRng, n: usize) -> Tac {
    let mut t = 0.0;
    let times: Vec<f64> = (0..n)
        .map(|_| {
            t += rng.random_range(0.5..5.0);
            t
        })
        .collect();
    let values: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..1000.0)).collect();
    Tac::builder(times).curve("roi", values).build().unwrap()
}

#[test]
fn test_peak_is_window_maximum() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.random_range(1..40);
        let tac = random_tac(&mut rng, n);
        let times = tac.times();
        let values = tac.curve("roi").unwrap();
        let start = rng.random_range(0.0..times[times.len() - 1]);

        let peak = find_peak(&tac, "roi", start).unwrap();

        let window: Vec<(f64, f64)> = times
            .iter()
            .zip(values)
            .filter(|&(&t, _)| t >= start)
            .map(|(&t, &v)| (t, v))
            .collect();
        let max = window.iter().map(|&(_, v)| v).fold(f64::NEG_INFINITY, f64::max);
        let first = window.iter().find(|&&(_, v)| v == max).unwrap();

        assert_eq!(peak.value, max);
        assert_eq!(peak.time, first.0);
    }
}

#[test]
fn test_start_past_end_always_errors() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let n = rng.random_range(1..20);
        let tac = random_tac(&mut rng, n);
        let last = tac.times()[tac.len() - 1];
        let start = last + rng.random_range(0.001..100.0);

        assert!(matches!(
            find_peak(&tac, "roi", start),
            Err(AnalysisError::EmptySelection { .. })
        ));
        assert!(matches!(
            find_peak_half(&tac, "roi", start),
            Err(AnalysisError::EmptySelection { .. })
        ));
    }
}

#[test]
fn test_half_max_sentinel_iff_no_decay() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..200 {
        let n = rng.random_range(1..30);
        let tac = random_tac(&mut rng, n);
        let times = tac.times();
        let values = tac.curve("roi").unwrap();

        let peak = find_peak(&tac, "roi", 0.0).unwrap();
        let peak_idx = times.iter().position(|&t| t == peak.time).unwrap();
        let decays = values[peak_idx..].iter().any(|&v| v <= 0.5 * peak.value);

        let t_half = find_peak_half(&tac, "roi", 0.0).unwrap();
        assert_eq!(t_half == NO_HALF_MAX, !decays);
        if decays {
            assert!(t_half >= peak.time);
        }
    }
}

#[test]
fn test_small_windows_integrate_to_zero() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..100 {
        let n = rng.random_range(2..30);
        let tac = random_tac(&mut rng, n);
        let times = tac.times();
        let i = rng.random_range(0..times.len());

        // Window around a single sample, narrower than the minimum spacing
        let area = integrate(&tac, "roi", times[i] - 0.1, times[i] + 0.1).unwrap();
        assert_eq!(area, 0.0);
    }
}

#[test]
fn test_integral_additive_at_sample_points() {
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..100 {
        let n = rng.random_range(3..40);
        let tac = random_tac(&mut rng, n);
        let times = tac.times();
        let a = times[0];
        let c = times[times.len() - 1];
        let b = times[rng.random_range(0..times.len())];

        let left = integrate(&tac, "roi", a, b).unwrap();
        let right = integrate(&tac, "roi", b, c).unwrap();
        let whole = integrate(&tac, "roi", a, c).unwrap();

        approx::assert_relative_eq!(left + right, whole, max_relative = 1e-12);
    }
}
