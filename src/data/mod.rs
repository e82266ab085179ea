pub mod acquisition;
pub mod extract;
pub mod parser;
pub mod tac;
pub mod tac_error;

pub use acquisition::{elapsed_seconds, parse_acquisition_datetime, AcquisitionError};
pub use extract::{extract_tac, ExtractError, Frame, RoiMask, RoiStatistic};
pub use parser::{read_tac, read_tac_from_reader, write_tac, write_tac_to_writer, ParseError};
pub use tac::{Curve, Tac, TacBuilder, TIME_AXIS_LABEL};
pub use tac_error::TacError;
