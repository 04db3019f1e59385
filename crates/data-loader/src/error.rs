//! Error types for the data-loader crate.
//!
//! Every failure here is fatal for a session: without the four tables
//! there is nothing to prepare, train, or evaluate.

use thiserror::Error;

/// Errors that can occur while loading the input tables
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The data directory itself does not exist
    #[error("Data directory not found: {path}")]
    DirectoryNotFound { path: String },

    /// One of the four table files could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A row (or the header) couldn't be deserialized
    ///
    /// `line` is the 1-based line in the file when the CSV reader knows it
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// A timestamp column held a value in none of the accepted formats
    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },
}

/// Instead of writing `Result<T, LoadError>` everywhere,
/// we can write `Result<T>`
pub type Result<T> = std::result::Result<T, LoadError>;

impl LoadError {
    /// Wrap a csv error with the name of the file being read
    pub(crate) fn from_csv(file: &str, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(io) => LoadError::IoError(io),
            kind => LoadError::ParseError {
                file: file.to_string(),
                line,
                reason: describe_csv_error(kind),
            },
        }
    }
}

fn describe_csv_error(kind: csv::ErrorKind) -> String {
    match kind {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("expected {} fields but found {}", expected_len, len)
        }
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {}", err),
        other => format!("{:?}", other),
    }
}
