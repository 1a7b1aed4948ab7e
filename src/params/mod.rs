//! Query-string and form-body encoding under OpenAPI style rules.
//!
//! Values of any `serde::Serialize` shape are first converted into a generic
//! [`serde_json::Value`], then flattened into `(name, value)` string pairs
//! according to the OpenAPI 3.0 `style` / `explode` matrix. Dispatching over
//! the closed `Value` shape set replaces the runtime reflection a dynamic
//! language would use here, and gives nested records, nullables, and custom
//! enums a single uniform representation before any style rule applies.
//!
//! All functions here are pure and reentrant; [`QueryParams`] is a plain
//! ordered multi-map built up by successive encode calls.
//!
//! ## Examples
//!
//! ```rust
//! use petstore::{add_query_param, QueryParams, QueryStyle};
//!
//! let mut params = QueryParams::new();
//! add_query_param(&mut params, "id", &[3, 4, 5], QueryStyle::Form, false).unwrap();
//! assert_eq!(params.pairs(), [("id".to_string(), "3,4,5".to_string())]);
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use strum::{Display, EnumString};
use url::Url;

use crate::error::EncodeError;

/// OpenAPI serialization styles for query parameters.
///
/// The camelCase wire names (`form`, `spaceDelimited`, `pipeDelimited`,
/// `deepObject`) round-trip through `Display` / `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum QueryStyle {
    /// The default style: comma-joined or repeated pairs.
    Form,
    /// Space-joined lists; everything else falls back to `form`.
    SpaceDelimited,
    /// Pipe-joined lists; everything else falls back to `form`.
    PipeDelimited,
    /// Bracketed key expansion for structured values.
    DeepObject,
}

impl QueryStyle {
    /// Parses a style from its OpenAPI name.
    ///
    /// ## Errors
    ///
    /// [`EncodeError::UnknownStyle`] for any unrecognized name. Passing an
    /// unknown style is a programmer error, not a recoverable condition.
    pub fn parse(name: &str) -> Result<Self, EncodeError> {
        name.parse()
            .map_err(|_| EncodeError::UnknownStyle(name.to_string()))
    }
}

/// An ordered multi-map of encoded query parameters.
///
/// Keys may appear more than once (exploded lists encode as repeated pairs).
/// Values are stored unescaped; percent-encoding happens in [`encode`] and
/// [`apply_to_url`], which delegate to the `url` crate.
///
/// [`encode`]: QueryParams::encode
/// [`apply_to_url`]: QueryParams::apply_to_url
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single pair, preserving insertion order.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Returns the accumulated pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns `true` if no pairs have been appended.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encodes the pairs into `application/x-www-form-urlencoded`
    /// text, suitable for a query string or a form body.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish()
    }

    /// Appends the pairs to a URL's query string.
    pub fn apply_to_url(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        let mut query = url.query_pairs_mut();
        for (name, value) in &self.pairs {
            query.append_pair(name, value);
        }
    }
}

/// Stringifies a single value for use in a path segment or query position.
///
/// Rules, in priority order: `null` renders as the literal `"null"`; integers
/// as plain decimal; floats as their shortest round-trippable decimal form;
/// strings pass through unmodified (this also strips the quotes from any type
/// whose serialization is a JSON string, such as enums); any remaining
/// structured form renders as its raw JSON text. A value that cannot be
/// serialized at all falls back to its debug representation.
///
/// ## Examples
///
/// ```rust
/// use petstore::fmt_string_param;
///
/// assert_eq!(fmt_string_param(&123), "123");
/// assert_eq!(fmt_string_param(&"abc"), "abc");
/// ```
pub fn fmt_string_param<T: Serialize + fmt::Debug>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(value) => fmt_scalar(&value),
        Err(_) => format!("{value:?}"),
    }
}

fn fmt_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        structured => structured.to_string(),
    }
}

/// Encodes a named value into `params` under the given style and explode flag.
///
/// The value is converted to a generic JSON representation first; a top-level
/// null (including an absent or null [`crate::Nullable`]) encodes nothing at
/// all. Empty sequences and maps likewise produce zero pairs.
///
/// ## Errors
///
/// [`EncodeError::Serialize`] if the value cannot be converted into a generic
/// JSON representation.
pub fn add_query_param<T: Serialize>(
    params: &mut QueryParams,
    name: &str,
    value: &T,
    style: QueryStyle,
    explode: bool,
) -> Result<(), EncodeError> {
    let value = serde_json::to_value(value)?;
    if value.is_null() {
        // absent and null optionals drop out before any style logic runs
        return Ok(());
    }
    add_value_param(params, name, &value, style, explode);
    Ok(())
}

fn add_value_param(params: &mut QueryParams, name: &str, value: &Value, style: QueryStyle, explode: bool) {
    match style {
        QueryStyle::Form => add_form_param(params, name, value, explode),
        QueryStyle::SpaceDelimited => add_delimited_param(params, name, value, explode, " "),
        QueryStyle::PipeDelimited => add_delimited_param(params, name, value, explode, "|"),
        QueryStyle::DeepObject => add_deep_object_param(params, name, value, explode),
    }
}

fn add_form_param(params: &mut QueryParams, name: &str, value: &Value, explode: bool) {
    match value {
        Value::Object(map) => {
            if explode {
                // exploded maps encode one pair per entry under the entry's
                // own key; the outer param name is discarded
                for (key, entry) in map {
                    params.append(key, fmt_scalar(entry));
                }
            } else if !map.is_empty() {
                // non-exploded maps flatten to name=k0,v0,k1,v1
                let joined = map
                    .iter()
                    .flat_map(|(key, entry)| [key.clone(), fmt_scalar(entry)])
                    .collect::<Vec<_>>()
                    .join(",");
                params.append(name, joined);
            }
        }
        Value::Array(items) => {
            if explode {
                // exploded lists encode as repeated name=v pairs
                for item in items {
                    params.append(name, fmt_scalar(item));
                }
            } else if !items.is_empty() {
                params.append(name, items.iter().map(fmt_scalar).collect::<Vec<_>>().join(","));
            }
        }
        scalar => params.append(name, fmt_scalar(scalar)),
    }
}

fn add_delimited_param(
    params: &mut QueryParams,
    name: &str,
    value: &Value,
    explode: bool,
    separator: &str,
) {
    match value {
        Value::Array(items) if !explode => {
            if !items.is_empty() {
                params.append(
                    name,
                    items.iter().map(fmt_scalar).collect::<Vec<_>>().join(separator),
                );
            }
        }
        // the delimited styles only define non-exploded lists; everything
        // else uses the form rules
        other => add_form_param(params, name, other, explode),
    }
}

fn add_deep_object_param(params: &mut QueryParams, name: &str, value: &Value, explode: bool) {
    match value {
        // deepObject ignores the explode flag and always expands brackets
        Value::Object(_) | Value::Array(_) => encode_deep_object_key(params, name, value),
        // deepObject is only defined for structured values; scalars use form
        scalar => add_form_param(params, name, scalar, explode),
    }
}

fn encode_deep_object_key(params: &mut QueryParams, key: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (field, entry) in map {
                encode_deep_object_key(params, &format!("{key}[{field}]"), entry);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                encode_deep_object_key(params, &format!("{key}[{index}]"), item);
            }
        }
        scalar => params.append(key, fmt_scalar(scalar)),
    }
}

/// Encodes a structured value into an `application/x-www-form-urlencoded`
/// body.
///
/// Every top-level field encodes as a standalone query parameter using the
/// style and explode flag registered for it in `style_map` / `explode_map`.
/// Unlisted fields default to `form` style, and default explode is `true`
/// exactly when the style is `form`.
///
/// ## Errors
///
/// [`EncodeError::UnsupportedBodyShape`] if the value is not a map or struct
/// at the top level, [`EncodeError::Serialize`] if it cannot be converted
/// into a generic JSON representation.
pub fn form_urlencoded_body<T: Serialize>(
    value: &T,
    style_map: &[(&str, QueryStyle)],
    explode_map: &[(&str, bool)],
) -> Result<String, EncodeError> {
    let value = serde_json::to_value(value)?;
    let Value::Object(fields) = value else {
        return Err(EncodeError::UnsupportedBodyShape);
    };

    let mut params = QueryParams::new();
    for (field, entry) in &fields {
        if entry.is_null() {
            continue;
        }
        let style = style_map
            .iter()
            .find(|(name, _)| *name == field.as_str())
            .map(|(_, style)| *style)
            .unwrap_or(QueryStyle::Form);
        let explode = explode_map
            .iter()
            .find(|(name, _)| *name == field.as_str())
            .map(|(_, explode)| *explode)
            .unwrap_or(style == QueryStyle::Form);
        add_value_param(&mut params, field, entry, style, explode);
    }

    Ok(params.encode())
}
