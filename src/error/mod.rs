use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::data::{AcquisitionError, ExtractError, ParseError, TacError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SirenError {
    #[error("Error in the time-activity curve: {0}")]
    Tac(#[from] TacError),
    #[error("Error in the acquisition time: {0}")]
    Acquisition(#[from] AcquisitionError),
    #[error("Error while extracting curves: {0}")]
    Extract(#[from] ExtractError),
    #[error("Error while reading or writing curves: {0}")]
    Parse(#[from] ParseError),
    #[error("Error in the analysis: {0}")]
    Analysis(#[from] AnalysisError),
}
