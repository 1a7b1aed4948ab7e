//! Layered error types for the SDK.
//!
//! The hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for all API operations
//! - [`EncodeError`] - Parameter and body encoding errors
//! - [`AuthError`] - Authentication and token-refresh errors
//!
//! [`crate::NullableError`] lives with [`crate::Nullable`] itself, since it
//! is a property of that container rather than of the transport.

mod api_error;
mod auth_error;
mod encode_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use encode_error::EncodeError;
