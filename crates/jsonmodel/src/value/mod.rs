mod serde_json;

use ::serde_json::{Map, Value};

use crate::JsonType;

/// Key-value mapping carried by [`JsonValue::Object`].
///
/// Values inside are kept as parsed and are not classified into [`JsonValue`].
pub type Object = Map<String, Value>;

/// A JSON fragment classified into one of five variants.
///
/// Booleans, floats, and integers outside the `i64` range have no variant of their own.
/// At the top level they become [`JsonValue::Null`], inside arrays they become absent elements.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// Elements are classified like top-level values, except that an element without a variant
    /// of its own (boolean, float, integer outside `i64`) is `None` instead of `Some(Null)`.
    /// An explicit `null` element is `Some(JsonValue::Null)`.
    Array(Box<[Option<JsonValue>]>),
    Object(Object),
    Null,
    Number(i64),
    String(Box<str>),
}

impl JsonValue {
    /// Type tag of the active variant.
    #[must_use]
    pub fn json_type(&self) -> JsonType {
        match self {
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
            JsonValue::Null => JsonType::Null,
            JsonValue::Number(_) => JsonType::Integer,
            JsonValue::String(_) => JsonType::String,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            JsonValue::Object(object) => Some(object),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Option<JsonValue>]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(string) => Some(string),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }
}
