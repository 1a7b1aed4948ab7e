//! Parameter and body encoding errors.

/// Errors raised by the query-string and form-body encoding engine.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// An unrecognized style name was passed to the encoder. This is a
    /// programmer error, not a recoverable condition.
    #[error("query param style '{0}' is not supported")]
    UnknownStyle(String),

    /// Form-urlencoded bodies must be a map or a struct at the top level.
    #[error("x-www-form-urlencoded data must be a map or a struct at the top level")]
    UnsupportedBodyShape,

    /// The value could not be converted into a generic JSON representation.
    #[error("failed to serialize value for encoding: {0}")]
    Serialize(#[from] serde_json::Error),
}
