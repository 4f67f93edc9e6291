use std::result::Result as StdResult;

use thiserror::Error;

/// Errors emitted when constructing a currency input.
///
/// Keypress handling itself is infallible: unsupported keys are silently
/// ignored and validation failures are reported through the error observer,
/// never as an `Err`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The configured initial value is not a well-formed amount string of
    /// the shape `W.FF` or `W,WWW.FF`.
    #[error("invalid initial value: {0:?}")]
    InvalidInitialValue(String),
}

/// Result type for currency-numpad operations.
pub type Result<T> = StdResult<T, Error>;
