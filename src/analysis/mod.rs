//! Time-activity curve analysis
//!
//! Three independent routines operate on a [`Tac`](crate::data::Tac):
//!
//! | Routine | Result |
//! |---------|--------|
//! | [`find_peak`] | Time and value of the maximum at or after a start time |
//! | [`find_peak_half`] | First time after the peak where the curve is at or below half the peak |
//! | [`integrate`] | Trapezoidal integral over a closed time window |
//!
//! All of them are pure functions of a borrowed TAC and may be called from
//! any number of threads.
//!
//! # Usage
//!
//! ```rust
//! use siren::analysis::{find_peak, find_peak_half, integrate, NO_HALF_MAX};
//! use siren::data::Tac;
//!
//! let tac = Tac::builder(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0])
//!     .curve("aorta", vec![0.0, 10.0, 150.0, 4500.0, 3700.0, 2900.0, 2100.0, 920.0])
//!     .build()
//!     .unwrap();
//!
//! let peak = find_peak(&tac, "aorta", 0.0).unwrap();
//! assert_eq!(peak.time, 3.0);
//!
//! let t_half = find_peak_half(&tac, "aorta", 0.0).unwrap();
//! assert_ne!(t_half, NO_HALF_MAX);
//! assert_eq!(t_half, 6.0);
//!
//! let area = integrate(&tac, "aorta", 0.0, 7.0).unwrap();
//! assert!(area > 0.0);
//! ```

mod error;
mod integrate;
mod peak;


pub use error::AnalysisError;
pub use integrate::{integrate, trapezoid};
pub use peak::{find_peak, find_peak_half, half_max_time, Peak, NO_HALF_MAX};
