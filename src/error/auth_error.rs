//! Authentication and token-refresh errors.

use crate::error::EncodeError;

/// Errors raised while attaching credentials to a request.
///
/// Every refresh failure is fatal for the enclosing call; no retry is
/// attempted anywhere in the auth layer.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The token-refresh request could not be sent or completed.
    #[error("token refresh request failed: {0}")]
    RefreshRequest(#[source] reqwest::Error),

    /// The token endpoint answered with a non-success status.
    #[error("token refresh returned status {status}")]
    RefreshStatus { status: u16, body: String },

    /// The refresh response held no access token at the configured pointer.
    #[error("token refresh response has no access token at '{0}'")]
    TokenPointer(String),

    /// The refresh response held no numeric expiry at the configured pointer.
    #[error("token refresh response has no expiry duration at '{0}'")]
    ExpiresPointer(String),

    /// `set_value` was called on an OAuth2 provider. OAuth2 is a credential
    /// *source*; only its inner request mutator accepts a credential.
    #[error("an OAuth2 provider cannot be used as a request mutator")]
    InvalidMutator,

    /// Encoding the token-request body failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
