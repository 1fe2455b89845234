//! Conversion failures.

use thiserror::Error;

/// Reasons a CSV input could not be turned into Markdown.
///
/// The converter never panics on bad input; every failure is returned as
/// one of these variants with a message suitable for showing to a user.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// Input has no header row (empty, or only blank lines).
    #[error("CSV file is empty or has no header row")]
    EmptyInput,

    /// CSV syntax could not be parsed, e.g. an unterminated quote.
    #[error("malformed CSV at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    /// Reading the CSV data failed.
    #[error("failed to read CSV data: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for ConversionError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            _ => Self::MalformedRow { line, message },
        }
    }
}
