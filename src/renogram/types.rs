//! Renogram types: options, labels, results and warnings

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

use crate::analysis::Peak;

// ============================================================================
// Configuration Types
// ============================================================================

/// Renogram analysis configuration
///
/// All times are in seconds and relative to the input (aorta) peak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenogramOptions {
    /// Delay after the input peak before kidney uptake is evaluated (default: 60)
    ///
    /// Kidney Tmax and T½ only consider samples at or after
    /// `input peak + uptake_delay`.
    pub uptake_delay: f64,

    /// Window for the split function integrals (default: 60 to 150)
    pub split_window: (f64, f64),

    /// Time at which retention is evaluated (default: 1200, i.e. 20 min)
    pub retention_time: f64,
}

impl Default for RenogramOptions {
    fn default() -> Self {
        Self {
            uptake_delay: 60.0,
            split_window: (60.0, 150.0),
            retention_time: 20.0 * 60.0,
        }
    }
}

impl RenogramOptions {
    /// Set the delay between the input peak and the uptake phase
    pub fn with_uptake_delay(mut self, delay: f64) -> Self {
        self.uptake_delay = delay;
        self
    }

    /// Set the split function integration window
    pub fn with_split_window(mut self, start: f64, end: f64) -> Self {
        self.split_window = (start, end);
        self
    }

    /// Set the retention evaluation time
    pub fn with_retention_time(mut self, time: f64) -> Self {
        self.retention_time = time;
        self
    }
}

/// Curve labels of the three regions a renogram needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenogramLabels {
    /// Input function region
    pub aorta: String,
    /// Left kidney region
    pub left_kidney: String,
    /// Right kidney region
    pub right_kidney: String,
}

impl RenogramLabels {
    pub fn new(
        aorta: impl Into<String>,
        left_kidney: impl Into<String>,
        right_kidney: impl Into<String>,
    ) -> Self {
        Self {
            aorta: aorta.into(),
            left_kidney: left_kidney.into(),
            right_kidney: right_kidney.into(),
        }
    }

    /// Label of the given kidney
    pub fn kidney(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_kidney,
            Side::Right => &self.right_kidney,
        }
    }
}

/// Kidney side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Per-kidney renogram parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KidneyParams {
    /// Kidney maximum in the uptake phase (absolute time)
    pub peak: Peak,
    /// Time to maximum, relative to the input peak (s)
    pub tmax: f64,
    /// Absolute time of decay to half maximum (None if not reached)
    pub half_max_time: Option<f64>,
    /// Time to half maximum, relative to the input peak (s)
    pub t_half: Option<f64>,
    /// Integral over the split function window
    pub uptake: f64,
    /// Share of the combined uptake (%)
    pub split_function: Option<f64>,
    /// Activity at the retention time as a share of the peak (%)
    pub retention: Option<f64>,
}

/// Complete renogram result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenogramResult {
    /// Input function peak (absolute time)
    pub input_peak: Peak,
    /// Start of the uptake phase (absolute time)
    pub uptake_start: f64,
    /// Split function window (absolute times)
    pub split_window: (f64, f64),
    /// Time of the sample used for retention (absolute)
    pub retention_sample_time: f64,
    /// Left kidney parameters
    pub left: KidneyParams,
    /// Right kidney parameters
    pub right: KidneyParams,
    /// Options used for the analysis
    pub options: RenogramOptions,
    /// Conditions that left a parameter undefined or approximated
    pub warnings: Vec<Warning>,
}

impl RenogramResult {
    /// Parameters of the given kidney
    pub fn kidney(&self, side: Side) -> &KidneyParams {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Serialize the result to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Flatten result to parameter name-value pairs for export
    pub fn to_params(&self) -> HashMap<String, f64> {
        let mut p = HashMap::new();
        p.insert("input_peak_time".to_string(), self.input_peak.time);
        p.insert("input_peak_value".to_string(), self.input_peak.value);

        for side in [Side::Left, Side::Right] {
            let k = self.kidney(side);
            p.insert(format!("{side}_tmax"), k.tmax);
            p.insert(format!("{side}_peak_value"), k.peak.value);
            p.insert(format!("{side}_uptake"), k.uptake);
            if let Some(v) = k.t_half {
                p.insert(format!("{side}_t_half"), v);
            }
            if let Some(v) = k.split_function {
                p.insert(format!("{side}_split_function"), v);
            }
            if let Some(v) = k.retention {
                p.insert(format!("{side}_retention"), v);
            }
        }

        p
    }
}

fn minutes(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| "n/a".to_string(), |s| format!("{:.1}", s / 60.0))
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.1}", v))
}

fn table_row(f: &mut fmt::Formatter<'_>, name: &str, left: String, right: String) -> fmt::Result {
    writeln!(f, "║ {:<22}{:>7}{:>7} ║", name, left, right)
}

/// Truncate `text` to `width` characters, marking the cut with an ellipsis
fn fit_cell(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    text.chars()
        .take(width.saturating_sub(1))
        .chain(std::iter::once('…'))
        .collect()
}

impl fmt::Display for RenogramResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔══════════════════════════════════════╗")?;
        writeln!(f, "║           Renogram Results           ║")?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        writeln!(
            f,
            "║ Input peak: {:<24} ║",
            format!("{:.1} s", self.input_peak.time)
        )?;
        writeln!(
            f,
            "║ Split window: {:<22} ║",
            format!(
                "{:.1}-{:.1} min",
                self.split_window.0 / 60.0,
                self.split_window.1 / 60.0
            )
        )?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        table_row(f, "", "Left".to_string(), "Right".to_string())?;
        table_row(
            f,
            "Split function [%]",
            percent(self.left.split_function),
            percent(self.right.split_function),
        )?;
        table_row(
            f,
            "Tmax [min]",
            minutes(Some(self.left.tmax)),
            minutes(Some(self.right.tmax)),
        )?;
        table_row(
            f,
            "T½ [min]",
            minutes(self.left.t_half),
            minutes(self.right.t_half),
        )?;
        table_row(
            f,
            &format!("Retention @ {:.0} min [%]", self.options.retention_time / 60.0),
            percent(self.left.retention),
            percent(self.right.retention),
        )?;

        if !self.warnings.is_empty() {
            writeln!(f, "╠══════════════════════════════════════╣")?;
            writeln!(f, "║ WARNINGS                             ║")?;
            for w in &self.warnings {
                writeln!(f, "║   • {:<32} ║", fit_cell(&w.to_string(), 32))?;
            }
        }

        writeln!(f, "╚══════════════════════════════════════╝")?;
        Ok(())
    }
}

/// Renogram warnings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    /// The kidney curve never fell to half its peak
    NoHalfMax {
        /// Affected kidney
        side: Side,
    },
    /// The study ended before the retention time; the last sample was used
    RenogramEndedEarly {
        /// Requested retention time (absolute)
        requested: f64,
        /// Time of the sample used instead
        used: f64,
    },
    /// Both kidneys integrate to zero over the split window
    NoUptakeInWindow,
    /// The kidney peak is zero, so retention is undefined
    ZeroPeak {
        /// Affected kidney
        side: Side,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::NoHalfMax { side } => write!(f, "No T½ found for {} kidney", side),
            Warning::RenogramEndedEarly { requested, used } => write!(
                f,
                "Ended before {:.0} s, used {:.0} s",
                requested, used
            ),
            Warning::NoUptakeInWindow => write!(f, "No uptake in split window"),
            Warning::ZeroPeak { side } => write!(f, "Zero peak for {} kidney", side),
        }
    }
}
