//! Time-activity curve container
//!
//! A [`Tac`] holds one time axis (seconds since the first acquisition) and any
//! number of labelled activity curves sampled on that axis. Index `i` of every
//! curve corresponds to `times()[i]`.
//!
//! All invariants are checked when the container is built; afterwards it is
//! read-only, so analysis routines can borrow it freely (including across
//! threads).
//!
//! ```rust
//! use siren::data::Tac;
//!
//! let tac = Tac::builder(vec![0.0, 1.0, 2.0])
//!     .curve("aorta", vec![0.0, 10.0, 4.0])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(tac.len(), 3);
//! assert_eq!(tac.curve("aorta"), Some(&[0.0, 10.0, 4.0][..]));
//! ```

use crate::data::tac_error::TacError;

/// Label of the time axis in tabular representations
pub const TIME_AXIS_LABEL: &str = "tacq";

/// A single labelled activity curve
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    label: String,
    values: Vec<f64>,
}

impl Curve {
    /// Curve label (usually the ROI name)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Activity values, aligned with the time axis
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// A collection of time-activity curves sharing one time axis
#[derive(Debug, Clone, PartialEq)]
pub struct Tac {
    times: Vec<f64>,
    curves: Vec<Curve>,
}

impl Tac {
    /// Create a TAC with the given time axis and no curves
    ///
    /// # Errors
    /// Returns an error if the times are not finite or not non-decreasing
    pub fn new(times: Vec<f64>) -> Result<Self, TacError> {
        validate_times(&times)?;
        Ok(Self {
            times,
            curves: Vec::new(),
        })
    }

    /// Start building a TAC on the given time axis
    pub fn builder(times: Vec<f64>) -> TacBuilder {
        TacBuilder {
            times,
            curves: Vec::new(),
        }
    }

    /// Add a curve, returning the extended TAC
    ///
    /// # Errors
    /// Returns an error if the label is reserved or already present, if the
    /// curve length differs from the time axis, or if a value is not finite.
    pub fn with_curve(
        mut self,
        label: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, TacError> {
        let label = label.into();

        if label == TIME_AXIS_LABEL {
            return Err(TacError::ReservedLabel(label));
        }
        if self.curve(&label).is_some() {
            return Err(TacError::DuplicateLabel(label));
        }
        if values.len() != self.times.len() {
            return Err(TacError::LengthMismatch {
                label,
                expected: self.times.len(),
                found: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(TacError::NonFinite { label, index });
        }

        self.curves.push(Curve { label, values });
        Ok(self)
    }

    /// The time axis in seconds since the first acquisition
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Values of the curve with the given label
    ///
    /// The time axis is not a curve: `curve("tacq")` returns `None`.
    pub fn curve(&self, label: &str) -> Option<&[f64]> {
        self.curves
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.values.as_slice())
    }

    /// Curve labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().map(|c| c.label.as_str())
    }

    /// Iterate over all curves in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Curve> {
        self.curves.iter()
    }

    /// Number of time points
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the time axis is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of curves (the time axis is not counted)
    #[inline]
    pub fn n_curves(&self) -> usize {
        self.curves.len()
    }
}

impl<'a> IntoIterator for &'a Tac {
    type Item = &'a Curve;
    type IntoIter = std::slice::Iter<'a, Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Tac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tac ({} frames, {} curves)", self.len(), self.n_curves())?;
        writeln!(
            f,
            "  Time range: [{:.2}, {:.2}] s",
            self.times.first().copied().unwrap_or(0.0),
            self.times.last().copied().unwrap_or(0.0)
        )?;
        for curve in &self.curves {
            let max = curve
                .values
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            if max.is_finite() {
                writeln!(f, "  {}: max {:.4}", curve.label, max)?;
            } else {
                writeln!(f, "  {}", curve.label)?;
            }
        }
        Ok(())
    }
}

/// Builder for [`Tac`], deferring validation to [`TacBuilder::build`]
#[derive(Debug, Clone)]
pub struct TacBuilder {
    times: Vec<f64>,
    curves: Vec<(String, Vec<f64>)>,
}

impl TacBuilder {
    /// Add a labelled curve
    pub fn curve(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.curves.push((label.into(), values));
        self
    }

    /// Validate and assemble the TAC
    ///
    /// # Errors
    /// Returns the first invariant violation found
    pub fn build(self) -> Result<Tac, TacError> {
        self.curves
            .into_iter()
            .try_fold(Tac::new(self.times)?, |tac, (label, values)| {
                tac.with_curve(label, values)
            })
    }
}

fn validate_times(times: &[f64]) -> Result<(), TacError> {
    if let Some(index) = times.iter().position(|t| !t.is_finite()) {
        return Err(TacError::NonFinite {
            label: TIME_AXIS_LABEL.to_string(),
            index,
        });
    }
    for i in 1..times.len() {
        if times[i] < times[i - 1] {
            return Err(TacError::InvalidTimeSequence { index: i });
        }
    }
    Ok(())
}
