//! Tests for windowed trapezoidal integration

use approx::assert_relative_eq;
use siren::prelude::*;

#[test]
fn test_integrate_irregular_spacing() {
    let tac = Tac::builder(vec![0.0, 3.0, 6.3, 9.5])
        .curve("kidney", vec![0.0, 2.0, 4.0, 1.0])
        .build()
        .unwrap();

    // 3*(0+2)/2 + 3.3*(2+4)/2 + 3.2*(4+1)/2
    let expected = 3.0 + 3.3 * 3.0 + 3.2 * 2.5;
    assert_relative_eq!(
        integrate(&tac, "kidney", 0.0, 9.5).unwrap(),
        expected,
        epsilon = 1e-12
    );
}

#[test]
fn test_integrate_matches_trapezoid_on_full_range() {
    let times = vec![0.0, 1.0, 2.5, 4.0, 7.0];
    let values = vec![1.0, 3.0, 2.0, 5.0, 0.5];
    let tac = Tac::builder(times.clone())
        .curve("kidney", values.clone())
        .build()
        .unwrap();

    assert_eq!(
        integrate(&tac, "kidney", f64::NEG_INFINITY, f64::INFINITY).unwrap(),
        trapezoid(&times, &values)
    );
}

#[test]
fn test_integrate_window_edges_not_interpolated() {
    let tac = Tac::builder(vec![0.0, 10.0, 20.0])
        .curve("kidney", vec![0.0, 10.0, 0.0])
        .build()
        .unwrap();

    // Only t=10 and t=20 fall in [5, 25]
    assert_eq!(integrate(&tac, "kidney", 5.0, 25.0).unwrap(), 50.0);
}

#[test]
fn test_integrate_duplicate_sample_times() {
    let tac = Tac::builder(vec![0.0, 1.0, 1.0, 2.0])
        .curve("kidney", vec![0.0, 2.0, 6.0, 6.0])
        .build()
        .unwrap();

    assert_eq!(integrate(&tac, "kidney", 0.0, 2.0).unwrap(), 1.0 + 6.0);
}
