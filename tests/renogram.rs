//! End-to-end renogram tests: frames -> TAC -> CSV -> report

use approx::assert_relative_eq;
use ndarray::arr1;
use siren::prelude::*;

const STAMPS: [&str; 8] = [
    "133000", "133020", "133120", "133150", "133250", "133500", "134000", "135140",
];
const AORTA: [f64; 8] = [0.0, 1000.0, 300.0, 200.0, 150.0, 100.0, 50.0, 20.0];
const LEFT: [f64; 8] = [0.0, 10.0, 40.0, 60.0, 80.0, 100.0, 40.0, 10.0];
const RIGHT: [f64; 8] = [0.0, 5.0, 20.0, 30.0, 40.0, 60.0, 50.0, 45.0];

/// One voxel per region, frames delivered in reverse acquisition order
fn frames() -> Vec<Frame> {
    (0..STAMPS.len())
        .rev()
        .map(|i| {
            let acquired = parse_acquisition_datetime("20231201", STAMPS[i]).unwrap();
            Frame::new(acquired, arr1(&[AORTA[i], LEFT[i], RIGHT[i]]).into_dyn())
        })
        .collect()
}

fn rois() -> Vec<RoiMask> {
    let labels = arr1(&[1u8, 2, 3]).into_dyn();
    vec![
        RoiMask::from_label_image("aorta", &labels, 1),
        RoiMask::from_label_image("left", &labels, 2),
        RoiMask::from_label_image("right", &labels, 3),
    ]
}

#[test]
fn test_extract_builds_sorted_tac() {
    let tac = extract_tac(&frames(), &rois(), RoiStatistic::Sum).unwrap();

    assert_eq!(
        tac.times(),
        &[0.0, 20.0, 80.0, 110.0, 170.0, 300.0, 600.0, 1300.0]
    );
    assert_eq!(tac.curve("aorta"), Some(&AORTA[..]));
    assert_eq!(tac.curve("left"), Some(&LEFT[..]));
    assert_eq!(tac.curve("right"), Some(&RIGHT[..]));
}

#[test]
fn test_report_survives_csv_round_trip() {
    let tac = extract_tac(&frames(), &rois(), RoiStatistic::Sum).unwrap();

    let mut buffer = Vec::new();
    write_tac_to_writer(&tac, &mut buffer).unwrap();
    let reloaded = read_tac_from_reader(buffer.as_slice()).unwrap();
    assert_eq!(reloaded, tac);

    let labels = RenogramLabels::new("aorta", "left", "right");
    let result = renogram::analyze(&reloaded, &labels, &RenogramOptions::default()).unwrap();

    assert_eq!(result.input_peak.time, 20.0);
    assert_eq!(result.left.tmax, 280.0);
    assert_eq!(result.left.t_half, Some(580.0));
    assert_relative_eq!(result.left.split_function.unwrap(), 200.0 / 3.0, epsilon = 1e-10);
    assert_relative_eq!(result.right.retention.unwrap(), 75.0, epsilon = 1e-10);
    assert_eq!(result.kidney(Side::Right).t_half, None);
}

#[test]
fn test_report_with_shorter_split_window() {
    let tac = extract_tac(&frames(), &rois(), RoiStatistic::Sum).unwrap();
    let labels = RenogramLabels::new("aorta", "left", "right");
    let options = RenogramOptions::default().with_split_window(60.0, 90.0);

    let result = renogram::analyze(&tac, &labels, &options).unwrap();

    // Window [80, 110]: left 30*(40+60)/2 = 1500, right 30*(20+30)/2 = 750
    assert_eq!(result.left.uptake, 1500.0);
    assert_eq!(result.right.uptake, 750.0);
    assert_relative_eq!(result.left.split_function.unwrap(), 200.0 / 3.0, epsilon = 1e-10);
}

#[test]
fn test_missing_frames_is_an_error() {
    let err: SirenError = extract_tac(&[], &rois(), RoiStatistic::Sum)
        .unwrap_err()
        .into();
    assert_eq!(err.to_string(), "Error while extracting curves: No frames to extract from");
}
