//! # SIREN
//!
//! Time-activity curve (TAC) extraction and analysis for dynamic renal
//! scintigraphy.
//!
//! A dynamic series is reduced to one curve per region of interest on a
//! shared time axis ([`data::Tac`]). The [`analysis`] routines find curve
//! peaks, half-max decay times and trapezoidal integrals; the [`renogram`]
//! module combines them into Tmax, T½, split function and retention.
//!
//! ```rust
//! use siren::prelude::*;
//!
//! let tac = Tac::builder(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
//!     .curve("aorta", vec![0.0, 0.0, 10.5, 450.0, 3700.0, 3900.0, 120.0])
//!     .build()
//!     .unwrap();
//!
//! let peak = find_peak(&tac, "aorta", 0.0).unwrap();
//! assert_eq!((peak.time, peak.value), (5.0, 3900.0));
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod renogram;

pub use error::SirenError;

pub mod prelude {
    pub use crate::analysis::{
        find_peak, find_peak_half, half_max_time, integrate, trapezoid, AnalysisError, Peak,
        NO_HALF_MAX,
    };
    pub use crate::data::{
        extract_tac, parse_acquisition_datetime, read_tac, read_tac_from_reader, write_tac,
        write_tac_to_writer, Frame, RoiMask, RoiStatistic, Tac, TacBuilder, TacError,
        TIME_AXIS_LABEL,
    };
    pub use crate::renogram::{
        self, KidneyParams, RenogramLabels, RenogramOptions, RenogramResult, Side, Warning,
    };
    pub use crate::SirenError;
}
