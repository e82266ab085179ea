//! Tests for peak and half-max detection through the public API

use siren::prelude::*;

fn aorta(values: Vec<f64>) -> Tac {
    let times = (0..values.len()).map(|i| i as f64).collect();
    Tac::builder(times).curve("aorta", values).build().unwrap()
}

#[test]
fn test_peak_on_irregular_axis() {
    let tac = Tac::builder(vec![0.0, 3.0, 6.3, 9.5, 12.8, 16.0, 19.3, 22.5, 25.8])
        .curve(
            "Segmentation.nrrd",
            vec![
                0.0, 188.081845, 301254.45, 2944728.5, 2954430.5, 312867.45, 3303.139, 183.26686,
                0.0,
            ],
        )
        .build()
        .unwrap();

    let peak = find_peak(&tac, "Segmentation.nrrd", 0.0).unwrap();
    assert_eq!(peak.time, 12.8);
    assert_eq!(peak.value, 2954430.5);

    assert_eq!(find_peak_half(&tac, "Segmentation.nrrd", 0.0).unwrap(), 16.0);
}

#[test]
fn test_peak_negative_start_selects_all() {
    let tac = aorta(vec![9.0, 1.0, 2.0]);
    let peak = find_peak(&tac, "aorta", -10.0).unwrap();
    assert_eq!((peak.time, peak.value), (0.0, 9.0));
}

#[test]
fn test_peak_single_sample_window() {
    let tac = aorta(vec![9.0, 1.0, 2.0]);
    let peak = find_peak(&tac, "aorta", 2.0).unwrap();
    assert_eq!((peak.time, peak.value), (2.0, 2.0));
    assert_eq!(find_peak_half(&tac, "aorta", 2.0).unwrap(), NO_HALF_MAX);
}

#[test]
fn test_empty_selection_message() {
    let tac = aorta(vec![0.0, 1.0]);
    let err = find_peak(&tac, "aorta", 3.0).unwrap_err();
    assert_eq!(err.to_string(), "No samples at or after start time 3");
}

#[test]
fn test_errors_convert_to_crate_error() {
    fn run(tac: &Tac) -> Result<f64, SirenError> {
        Ok(find_peak(tac, "aorta", 100.0)?.time)
    }
    let tac = aorta(vec![0.0, 1.0]);
    assert!(matches!(
        run(&tac),
        Err(SirenError::Analysis(AnalysisError::EmptySelection { .. }))
    ));
}

#[test]
fn test_half_max_with_plateau_after_peak() {
    let tac = aorta(vec![0.0, 8.0, 8.0, 4.0, 1.0]);
    // Tie resolves to t=1; the plateau at t=2 is still above half
    assert_eq!(find_peak_half(&tac, "aorta", 0.0).unwrap(), 3.0);
}
