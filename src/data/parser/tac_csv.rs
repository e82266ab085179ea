//! CSV import and export of time-activity curves
//!
//! The layout is one row per frame: the first column holds the time axis
//! (header `tacq`), every further column holds one curve, named by its header.
//!
//! ```text
//! tacq,aorta,left,right
//! 0,0,0,0
//! 3,188.08,12.5,11.9
//! ```
//!
//! Lines starting with `#` are ignored. Headers are trimmed; the time column
//! header is matched case-insensitively.

use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use thiserror::Error;

use crate::data::tac::{Tac, TIME_AXIS_LABEL};
use crate::data::tac_error::TacError;

/// Errors raised while reading or writing TAC files
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Error encountered when reading or writing CSV data
    #[error("CSV error: {0}")]
    CSVError(String),
    /// The first column is not the time axis
    #[error("First column must be 'tacq', found '{found}'")]
    MissingTimeColumn { found: String },
    /// A cell could not be parsed as a number
    #[error("Invalid number '{value}' in column '{column}' at data row {row}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
    /// The parsed columns do not form a valid TAC
    #[error(transparent)]
    Tac(#[from] TacError),
}

impl From<csv::Error> for ParseError {
    fn from(e: csv::Error) -> Self {
        ParseError::CSVError(e.to_string())
    }
}

/// Read a TAC from a CSV file
///
/// # Example
///
/// ```rust,no_run
/// use siren::data::parser::read_tac;
///
/// let tac = read_tac("study/tac.csv").unwrap();
/// println!("{}", tac);
/// ```
pub fn read_tac(path: impl AsRef<Path>) -> Result<Tac, ParseError> {
    let reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;
    read_records(reader)
}

/// Read a TAC from any CSV source
pub fn read_tac_from_reader<R: Read>(reader: R) -> Result<Tac, ParseError> {
    let reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    read_records(reader)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Tac, ParseError> {
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    match headers.first() {
        Some(h) if h.eq_ignore_ascii_case(TIME_AXIS_LABEL) => {}
        other => {
            return Err(ParseError::MissingTimeColumn {
                found: other.cloned().unwrap_or_default(),
            })
        }
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    let mut record = StringRecord::new();
    let mut row = 0;
    while reader.read_record(&mut record)? {
        row += 1;
        for (j, cell) in record.iter().enumerate() {
            let value = cell.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                row,
                column: headers[j].clone(),
                value: cell.to_string(),
            })?;
            columns[j].push(value);
        }
    }

    let mut columns = columns.into_iter();
    let times = columns.next().unwrap_or_default();

    let builder = headers
        .into_iter()
        .skip(1)
        .zip(columns)
        .fold(Tac::builder(times), |builder, (label, values)| {
            builder.curve(label, values)
        });

    let tac = builder.build()?;
    tracing::debug!(frames = tac.len(), curves = tac.n_curves(), "Read TAC");
    Ok(tac)
}

/// Write a TAC to a CSV file
pub fn write_tac(tac: &Tac, path: impl AsRef<Path>) -> Result<(), ParseError> {
    let writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())?;
    write_records(tac, writer)
}

/// Write a TAC to any CSV sink
pub fn write_tac_to_writer<W: Write>(tac: &Tac, writer: W) -> Result<(), ParseError> {
    let writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    write_records(tac, writer)
}

fn write_records<W: Write>(tac: &Tac, mut writer: csv::Writer<W>) -> Result<(), ParseError> {
    let mut header = vec![TIME_AXIS_LABEL];
    header.extend(tac.labels());
    writer.write_record(&header)?;

    for (i, time) in tac.times().iter().enumerate() {
        let mut row = vec![time.to_string()];
        row.extend(tac.iter().map(|curve| curve.values()[i].to_string()));
        writer.write_record(&row)?;
    }

    writer
        .flush()
        .map_err(|e| ParseError::CSVError(e.to_string()))?;
    Ok(())
}
