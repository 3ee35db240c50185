use serde_json::Value;

use crate::JsonValue;

/// A function turning raw bytes into a [`JsonValue`].
pub type Deserializer = fn(&[u8]) -> Option<JsonValue>;

/// Parse raw bytes into a [`JsonValue`].
///
/// Any top-level JSON fragment is accepted, including scalars.
/// Returns `None` if the bytes are not valid JSON.
///
/// ```rust
/// use jsonmodel::{deserialize, JsonValue};
///
/// assert_eq!(deserialize(b"42"), Some(JsonValue::Number(42)));
/// assert_eq!(deserialize(b"{\"FirstName\":"), None);
/// ```
#[must_use]
pub fn deserialize(bytes: &[u8]) -> Option<JsonValue> {
    match try_deserialize(bytes) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!(%error, "Input is not valid JSON");
            None
        }
    }
}

/// Parse raw bytes into a [`JsonValue`], reporting why parsing failed.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 encoded JSON.
pub fn try_deserialize(bytes: &[u8]) -> Result<JsonValue, serde_json::Error> {
    let value: Value = serde_json::from_slice(bytes)?;
    Ok(JsonValue::from(value))
}
