//! TAC extraction from dynamic frames and ROI masks
//!
//! Each [`Frame`] is one time point of a co-registered dynamic series. Each
//! [`RoiMask`] selects the voxels of one region. For every frame and every
//! region a single summary statistic is computed, giving one curve per region
//! on the elapsed-time axis derived from the frames' acquisition timestamps.
//!
//! Frames are reduced in parallel; the [`Tac`] is only assembled once every
//! frame has been processed.
//!
//! # Example
//! ```rust
//! use chrono::NaiveDate;
//! use ndarray::{arr2, ArrayD};
//! use siren::data::extract::{extract_tac, Frame, RoiMask, RoiStatistic};
//!
//! let day = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
//! let frames = vec![
//!     Frame::new(day.and_hms_opt(13, 30, 28).unwrap(), arr2(&[[1.0, 2.0], [3.0, 4.0]]).into_dyn()),
//!     Frame::new(day.and_hms_opt(13, 30, 31).unwrap(), arr2(&[[2.0, 4.0], [6.0, 8.0]]).into_dyn()),
//! ];
//! let mask: ArrayD<bool> = arr2(&[[true, false], [false, true]]).into_dyn();
//! let rois = vec![RoiMask::new("kidney", mask)];
//!
//! let tac = extract_tac(&frames, &rois, RoiStatistic::Sum).unwrap();
//! assert_eq!(tac.times(), &[0.0, 3.0]);
//! assert_eq!(tac.curve("kidney"), Some(&[5.0, 10.0][..]));
//! ```

use chrono::NaiveDateTime;
use ndarray::{ArrayD, Zip};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::acquisition::elapsed_seconds;
use crate::data::tac::Tac;
use crate::data::tac_error::TacError;

/// Errors raised during TAC extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// No frames were supplied
    #[error("No frames to extract from")]
    NoFrames,

    /// A frame does not have the same shape as the first frame
    #[error("Frame {index} has shape {found:?}, expected {expected:?}")]
    FrameShapeMismatch {
        /// Index of the frame in the input slice
        index: usize,
        /// Shape of the first frame
        expected: Vec<usize>,
        /// Shape of the offending frame
        found: Vec<usize>,
    },

    /// A mask does not have the frame shape
    #[error("Mask '{label}' has shape {found:?}, frames have {expected:?}")]
    MaskShapeMismatch {
        /// Label of the offending mask
        label: String,
        /// Frame shape
        expected: Vec<usize>,
        /// Mask shape
        found: Vec<usize>,
    },

    /// The extracted curves violate a TAC invariant
    #[error(transparent)]
    Tac(#[from] TacError),
}

/// One time point of a dynamic series
#[derive(Debug, Clone)]
pub struct Frame {
    /// Acquisition timestamp of the frame
    pub acquired: NaiveDateTime,
    /// Voxel intensities
    pub voxels: ArrayD<f64>,
}

impl Frame {
    pub fn new(acquired: NaiveDateTime, voxels: ArrayD<f64>) -> Self {
        Self { acquired, voxels }
    }
}

/// A labelled region of interest
#[derive(Debug, Clone)]
pub struct RoiMask {
    /// Label of the curve extracted for this region
    pub label: String,
    /// Voxels belonging to the region
    pub mask: ArrayD<bool>,
}

impl RoiMask {
    pub fn new(label: impl Into<String>, mask: ArrayD<bool>) -> Self {
        Self {
            label: label.into(),
            mask,
        }
    }

    /// Build a mask from a label image, selecting voxels equal to `value`
    ///
    /// Segmentation files usually mark the region with label `1`.
    pub fn from_label_image<T>(label: impl Into<String>, image: &ArrayD<T>, value: T) -> Self
    where
        T: PartialEq + Copy,
    {
        Self::new(label, image.mapv(|v| v == value))
    }

    /// Number of voxels in the region
    pub fn n_voxels(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }
}

/// Summary statistic computed over the voxels of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoiStatistic {
    /// Sum of voxel intensities
    #[default]
    Sum,
    /// Mean voxel intensity (0.0 for an empty region)
    Mean,
}

/// Compute a region statistic on a single frame
///
/// `voxels` and `mask` must have the same shape.
pub fn roi_statistic(voxels: &ArrayD<f64>, mask: &ArrayD<bool>, statistic: RoiStatistic) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    Zip::from(voxels).and(mask).for_each(|&v, &selected| {
        if selected {
            sum += v;
            n += 1;
        }
    });

    match statistic {
        RoiStatistic::Sum => sum,
        RoiStatistic::Mean if n == 0 => 0.0,
        RoiStatistic::Mean => sum / n as f64,
    }
}

/// Extract one curve per region from a dynamic series
///
/// Frames may be given in any order; they are sorted by acquisition time
/// (stable for equal timestamps) and the time axis is expressed in seconds
/// since the earliest frame. Curves appear in the order of `rois`.
///
/// # Errors
/// Returns an error if there are no frames, if shapes disagree, or if the
/// resulting curves do not form a valid [`Tac`] (e.g. duplicate labels or
/// non-finite statistics).
pub fn extract_tac(
    frames: &[Frame],
    rois: &[RoiMask],
    statistic: RoiStatistic,
) -> Result<Tac, ExtractError> {
    let first = frames.first().ok_or(ExtractError::NoFrames)?;
    let shape = first.voxels.shape();

    for (index, frame) in frames.iter().enumerate() {
        if frame.voxels.shape() != shape {
            return Err(ExtractError::FrameShapeMismatch {
                index,
                expected: shape.to_vec(),
                found: frame.voxels.shape().to_vec(),
            });
        }
    }
    for roi in rois {
        if roi.mask.shape() != shape {
            return Err(ExtractError::MaskShapeMismatch {
                label: roi.label.clone(),
                expected: shape.to_vec(),
                found: roi.mask.shape().to_vec(),
            });
        }
    }

    let mut order: Vec<usize> = (0..frames.len()).collect();
    order.sort_by_key(|&i| frames[i].acquired);

    let stamps: Vec<NaiveDateTime> = order.iter().map(|&i| frames[i].acquired).collect();
    let times = elapsed_seconds(&stamps);

    tracing::debug!(
        frames = frames.len(),
        rois = rois.len(),
        "Extracting TACs from dynamic series"
    );

    // rows[frame][roi]
    let rows: Vec<Vec<f64>> = order
        .par_iter()
        .map(|&i| {
            rois.iter()
                .map(|roi| roi_statistic(&frames[i].voxels, &roi.mask, statistic))
                .collect()
        })
        .collect();

    let builder = rois
        .iter()
        .enumerate()
        .fold(Tac::builder(times), |builder, (j, roi)| {
            builder.curve(roi.label.clone(), rows.iter().map(|row| row[j]).collect())
        });

    Ok(builder.build()?)
}
