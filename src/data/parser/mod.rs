pub mod tac_csv;

// Expose the ParseError type
pub use tac_csv::ParseError;
// Expose the main loading and saving functions
pub use tac_csv::{read_tac, read_tac_from_reader, write_tac, write_tac_to_writer};
