//! Renogram metrics for dynamic renal scintigraphy
//!
//! Combines the [`analysis`](crate::analysis) routines on an aorta (input
//! function) curve and two kidney curves into the standard renogram report.
//!
//! # Key Parameters
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | Tmax | Kidney peak time, relative to the input peak |
//! | T½ | Time for the kidney curve to fall to half its peak, relative to the input peak |
//! | Split function | Kidney share of the combined uptake integral (%) |
//! | Retention | Kidney activity at 20 min as a share of its peak (%) |
//!
//! # Usage
//!
//! ```rust,ignore
//! use siren::prelude::*;
//!
//! let tac = read_tac("study/tac.csv")?;
//! let labels = RenogramLabels::new("aorta", "left", "right");
//! let result = renogram::analyze(&tac, &labels, &RenogramOptions::default())?;
//! println!("{}", result);
//! ```

mod analyze;
mod types;


pub use analyze::analyze;
pub use types::{KidneyParams, RenogramLabels, RenogramOptions, RenogramResult, Side, Warning};
