use thiserror::Error;

/// Result type for emission operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while emitting source text.
///
/// Emission itself never fails on malformed indentation; every variant here
/// originates in the destination the text is appended to, or in parsing a
/// configuration value.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write to output")]
    Io(#[from] std::io::Error),

    #[error("failed to format output")]
    Fmt(#[from] std::fmt::Error),

    #[error("invalid indentation '{0}', expected 'tab' or a number of spaces (e.g. 'spaces4' or '4')")]
    InvalidIndent(String),

    #[error("invalid line ending '{0}', expected 'lf', 'crlf' or 'native'")]
    InvalidLineEnding(String),
}
