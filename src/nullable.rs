//! Tri-state optional values for faithful JSON round-tripping.
//!
//! JSON APIs distinguish between a field that is *missing*, a field that is
//! explicitly `null`, and a field that carries a value. `Option<T>` collapses
//! the first two states, so optional Petstore fields use [`Nullable<T>`]
//! instead.
//!
//! Containing structs must cooperate for the `Absent` state to disappear from
//! output entirely:
//!
//! ```rust
//! use petstore::Nullable;
//!
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Example {
//!     #[serde(default, skip_serializing_if = "Nullable::is_absent")]
//!     id: Nullable<i64>,
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that is either absent, explicitly `null`, or present.
///
/// Exactly one state holds at a time. `Default` is [`Nullable::Absent`], which
/// pairs with serde's `default` field attribute so a missing JSON key
/// deserializes to `Absent`.
///
/// ## Examples
///
/// ```rust
/// use petstore::Nullable;
///
/// let present = Nullable::Present(10);
/// assert_eq!(present.value(), Ok(&10));
///
/// let absent: Nullable<i64> = Nullable::Absent;
/// assert!(absent.is_absent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nullable<T> {
    /// The field was not provided and should be omitted from output.
    #[default]
    Absent,
    /// The field was explicitly set to `null`.
    Null,
    /// The field carries a value.
    Present(T),
}

/// Error returned when reading the value of a [`Nullable`] that has none.
///
/// The two variants distinguish *why* no value was available, mirroring the
/// two empty states of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NullableError {
    #[error("value is null")]
    Null,
    #[error("value is absent")]
    Absent,
}

impl<T> Nullable<T> {
    /// Returns `true` if the field was explicitly set to `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the field was not provided at all.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the field carries a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrows the contained value.
    ///
    /// ## Errors
    ///
    /// [`NullableError::Null`] if the field was explicitly `null`,
    /// [`NullableError::Absent`] if it was never provided.
    pub fn value(&self) -> Result<&T, NullableError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Null => Err(NullableError::Null),
            Self::Absent => Err(NullableError::Absent),
        }
    }

    /// Consumes the container and returns the value.
    ///
    /// ## Errors
    ///
    /// Same as [`Nullable::value`].
    pub fn into_value(self) -> Result<T, NullableError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Null => Err(NullableError::Null),
            Self::Absent => Err(NullableError::Absent),
        }
    }

    /// Converts to an `Option`, folding `Null` and `Absent` into `None`.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    /// `Some` maps to `Present`, `None` to `Null`.
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Null,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    /// `Present` serializes as the inner value, `Null` as a null literal.
    ///
    /// `Absent` also serializes as null when forced; containing structs are
    /// expected to suppress it with `skip_serializing_if = "Nullable::is_absent"`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            Self::Null | Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    /// A null literal deserializes to `Null`, anything else to `Present`.
    ///
    /// A missing key never reaches this impl; the containing struct's
    /// `default` attribute produces `Absent` for it.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Present(value),
            None => Self::Null,
        })
    }
}
