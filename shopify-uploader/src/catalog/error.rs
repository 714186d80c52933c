//! Error types for reading the dataset and building product payloads

use thiserror::Error;

/// Failure to turn the uploaded file into a dataset.
///
/// Always fatal to the whole run: without a parsed dataset no product
/// group can be derived.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("file is not valid {encoding} text")]
    MalformedEncoding { encoding: String },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row} has {found} fields but the header has {expected}")]
    TooManyFields {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} has no value in the '{column}' column")]
    MissingIdentifier { row: usize, column: String },
}

/// Failure to build the payload for one product group.
///
/// Aborts only the affected group; the run continues with the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("required column '{column}' is missing")]
    MissingField { column: String },

    #[error("'{value}' in column '{column}' is not an integer")]
    Conversion { column: String, value: String },
}
