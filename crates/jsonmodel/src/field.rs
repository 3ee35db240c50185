//! Type-checked lookups of object fields.
//!
//! A lookup succeeds only if the key is present and its value has the runtime type the caller
//! asks for. The expected type is chosen through [`FromField`]:
//!
//! ```rust
//! use jsonmodel::field;
//! use serde_json::json;
//!
//! let value = json!({"FirstName": "Tyler", "Age": 30});
//! let object = value.as_object().expect("Object");
//!
//! assert_eq!(field::get::<&str>(object, "FirstName"), Some("Tyler"));
//! assert_eq!(field::get::<i64>(object, "Age"), Some(30));
//! assert_eq!(field::get::<&str>(object, "Age"), None);
//! ```
use serde_json::{Map, Number, Value};
use url::Url;

use crate::{DecodeError, JsonType, Object};

/// Reason why a value could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The value has another runtime type.
    Type,
    /// The value has the expected runtime type, but cannot be converted.
    Value(String),
}

/// Extraction of a typed value from a raw JSON value.
pub trait FromField<'a>: Sized {
    /// Runtime type a value must have to be extracted.
    const EXPECTED: JsonType;

    /// Extract `value`, or report why it does not hold the expected type.
    ///
    /// # Errors
    ///
    /// Fails if the value has another runtime type or cannot be converted.
    fn from_field(value: &'a Value) -> Result<Self, Rejection>;
}

impl<'a> FromField<'a> for &'a str {
    const EXPECTED: JsonType = JsonType::String;

    fn from_field(value: &'a Value) -> Result<Self, Rejection> {
        value.as_str().ok_or(Rejection::Type)
    }
}

impl FromField<'_> for String {
    const EXPECTED: JsonType = JsonType::String;

    fn from_field(value: &Value) -> Result<Self, Rejection> {
        value.as_str().map(str::to_owned).ok_or(Rejection::Type)
    }
}

fn integer<T>(value: &Value, convert: impl FnOnce(&Number) -> Option<T>) -> Result<T, Rejection> {
    match value {
        Value::Number(number) if number.is_i64() || number.is_u64() => convert(number)
            .ok_or_else(|| {
                Rejection::Value(format!(
                    "{number} is out of range for {}",
                    core::any::type_name::<T>()
                ))
            }),
        _ => Err(Rejection::Type),
    }
}

impl FromField<'_> for i64 {
    const EXPECTED: JsonType = JsonType::Integer;

    fn from_field(value: &Value) -> Result<Self, Rejection> {
        integer(value, Number::as_i64)
    }
}

impl FromField<'_> for u64 {
    const EXPECTED: JsonType = JsonType::Integer;

    fn from_field(value: &Value) -> Result<Self, Rejection> {
        integer(value, Number::as_u64)
    }
}

impl FromField<'_> for f64 {
    const EXPECTED: JsonType = JsonType::Number;

    fn from_field(value: &Value) -> Result<Self, Rejection> {
        value.as_f64().ok_or(Rejection::Type)
    }
}

impl FromField<'_> for bool {
    const EXPECTED: JsonType = JsonType::Boolean;

    fn from_field(value: &Value) -> Result<Self, Rejection> {
        value.as_bool().ok_or(Rejection::Type)
    }
}

impl<'a> FromField<'a> for &'a Map<String, Value> {
    const EXPECTED: JsonType = JsonType::Object;

    fn from_field(value: &'a Value) -> Result<Self, Rejection> {
        value.as_object().ok_or(Rejection::Type)
    }
}

impl<'a> FromField<'a> for &'a [Value] {
    const EXPECTED: JsonType = JsonType::Array;

    fn from_field(value: &'a Value) -> Result<Self, Rejection> {
        value.as_array().map(Vec::as_slice).ok_or(Rejection::Type)
    }
}

/// A string holding an absolute URL.
impl FromField<'_> for Url {
    const EXPECTED: JsonType = JsonType::String;

    fn from_field(value: &Value) -> Result<Self, Rejection> {
        let raw = value.as_str().ok_or(Rejection::Type)?;
        Url::parse(raw).map_err(|error| Rejection::Value(error.to_string()))
    }
}

/// Look up `key` and extract it as `T`.
///
/// Returns `None` if the key is absent or its value cannot be extracted as `T`.
#[inline]
#[must_use]
pub fn get<'a, T: FromField<'a>>(object: &'a Object, key: &str) -> Option<T> {
    object.get(key).and_then(|value| T::from_field(value).ok())
}

/// Look up `key` and extract it as `T`, reporting why extraction failed.
///
/// # Errors
///
/// Fails with [`DecodeError::MissingField`] if the key is absent,
/// [`DecodeError::InvalidType`] if its value has another type, and
/// [`DecodeError::InvalidValue`] if its value has the right type but cannot be converted.
pub fn required<'a, T: FromField<'a>>(object: &'a Object, key: &str) -> Result<T, DecodeError> {
    let value = object
        .get(key)
        .ok_or_else(|| DecodeError::missing_field(key))?;
    T::from_field(value).map_err(|rejection| match rejection {
        Rejection::Type => DecodeError::invalid_type(key, T::EXPECTED, JsonType::of(value)),
        Rejection::Value(reason) => DecodeError::invalid_value(key, reason),
    })
}
