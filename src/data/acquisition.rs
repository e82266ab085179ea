//! Acquisition timestamps
//!
//! Dynamic series are ordered by the `AcquisitionDate` (0008,0022) and
//! `AcquisitionTime` (0008,0032) attributes of each frame. This module turns
//! the raw DA/TM strings into [`NaiveDateTime`] values and the sorted
//! timestamps into the elapsed-seconds time axis used by [`crate::data::Tac`].
//!
//! Reading the attributes out of a DICOM file is left to the caller.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Errors raised while parsing acquisition date/time strings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcquisitionError {
    /// The DA value is not a valid `YYYYMMDD` date
    #[error("Invalid acquisition date '{0}'")]
    InvalidDate(String),

    /// The TM value is not a valid `HHMMSS[.FFFFFF]` time
    #[error("Invalid acquisition time '{0}'")]
    InvalidTime(String),
}

/// Parse a DICOM DA (`YYYYMMDD`) and TM (`HHMMSS[.FFFFFF]`) pair
///
/// Trailing padding spaces are ignored. TM values may omit the minutes or
/// seconds (`HH`, `HHMM`), and the fractional part is read with microsecond
/// resolution. Colon separators from legacy writers are accepted.
///
/// # Example
/// ```rust
/// use siren::data::acquisition::parse_acquisition_datetime;
///
/// let dt = parse_acquisition_datetime("20231201", "133040.8").unwrap();
/// assert_eq!(dt.to_string(), "2023-12-01 13:30:40.800");
/// ```
pub fn parse_acquisition_datetime(
    date: &str,
    time: &str,
) -> Result<NaiveDateTime, AcquisitionError> {
    let date = parse_date(date)?;
    let time = parse_time(time)?;
    Ok(date.and_time(time))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AcquisitionError> {
    let value = raw.trim();
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AcquisitionError::InvalidDate(raw.to_string()));
    }
    let field = |range: std::ops::Range<usize>| value[range].parse::<u32>().unwrap_or(0);
    NaiveDate::from_ymd_opt(field(0..4) as i32, field(4..6), field(6..8))
        .ok_or_else(|| AcquisitionError::InvalidDate(raw.to_string()))
}

fn parse_time(raw: &str) -> Result<NaiveTime, AcquisitionError> {
    let invalid = || AcquisitionError::InvalidTime(raw.to_string());
    let value: String = raw.trim().chars().filter(|&c| c != ':').collect();

    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (value.as_str(), ""),
    };

    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) || !digits(fraction) || fraction.len() > 6 {
        return Err(invalid());
    }
    // Fractional seconds need a full HHMMSS
    if value.contains('.') && whole.len() != 6 {
        return Err(invalid());
    }

    let field = |range: std::ops::Range<usize>| -> Result<u32, AcquisitionError> {
        whole
            .get(range)
            .map_or(Ok(0), |s| s.parse::<u32>().map_err(|_| invalid()))
    };

    let (hour, minute, second) = match whole.len() {
        2 | 4 | 6 => (field(0..2)?, field(2..4)?, field(4..6)?),
        _ => return Err(invalid()),
    };

    let micro = if fraction.is_empty() {
        0
    } else {
        format!("{:0<6}", fraction).parse::<u32>().map_err(|_| invalid())?
    };

    NaiveTime::from_hms_micro_opt(hour, minute, second, micro).ok_or_else(invalid)
}

/// Seconds elapsed since the first timestamp
///
/// The first entry maps to `0.0`. Timestamps are expected in acquisition
/// order; an earlier timestamp later in the slice yields a negative value.
pub fn elapsed_seconds(timestamps: &[NaiveDateTime]) -> Vec<f64> {
    let Some(first) = timestamps.first() else {
        return Vec::new();
    };

    timestamps
        .iter()
        .map(|t| {
            let delta = t.signed_duration_since(*first);
            match delta.num_microseconds() {
                Some(us) => us as f64 / 1e6,
                None => delta.num_milliseconds() as f64 / 1e3,
            }
        })
        .collect()
}
