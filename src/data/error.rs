use thiserror::Error;

/// Schema and cell problems found while reading a launch dataset.
///
/// Row numbers are 1-based and count data rows only (the header is row 0).
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: launch site is empty")]
    EmptySite { row: usize },

    #[error("row {row}: class '{value}' is not 0 or 1")]
    InvalidClass { row: usize, value: String },

    #[error("row {row}: payload mass '{value}' is not a number")]
    InvalidPayload { row: usize, value: String },

    #[error("row {row}: expected a JSON object")]
    NotAnObject { row: usize },

    #[error("dataset contains no launch records")]
    Empty,
}
