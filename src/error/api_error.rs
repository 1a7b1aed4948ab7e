//! Top-level error type for API operations.

use bytes::Bytes;
use url::Url;

use crate::error::{AuthError, EncodeError};
use crate::method::RestMethod;

/// The error type returned by every SDK operation.
///
/// The [`ApiError::Http`] variant carries the full context of a rejected
/// call (status, method, URL, raw body) so callers can branch on status
/// codes or inspect the server's error payload. Nothing is retried and
/// nothing is swallowed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a status code of 300 or above.
    #[error("unexpected status code {status} received from {method} {url}")]
    Http {
        status: u16,
        method: RestMethod,
        url: Url,
        body: Bytes,
    },

    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A URL could not be assembled from the base URL and path.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be deserialized into its typed form.
    #[error("failed to deserialize response body: {0}")]
    Json(#[from] serde_json::Error),

    /// A query parameter or request body could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Attaching credentials to the request failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The client was misconfigured (unknown service name, bad builder input).
    #[error("client configuration error: {0}")]
    Client(String),
}

impl ApiError {
    /// Builds the [`ApiError::Http`] variant from a rejected response,
    /// draining the body so diagnostics survive the drop of the response.
    pub(crate) async fn from_response(method: RestMethod, response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let url = response.url().clone();
        let body = response.bytes().await.unwrap_or_default();
        Self::Http {
            status,
            method,
            url,
            body,
        }
    }

    /// Returns the HTTP status code if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Request(source) => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
