use crate::{deserialize, try_deserialize, DecodeError, Error, JsonValue};

/// A function turning an optional [`JsonValue`] into an optional model.
pub type Decoder<T> = fn(Option<&JsonValue>) -> Option<T>;

/// Construction of a model from a [`JsonValue`].
pub trait Decode: Sized {
    /// Decode `value`, reporting why it does not describe the model.
    ///
    /// # Errors
    ///
    /// Fails if the value has the wrong shape, or a required field is missing or mistyped.
    fn try_decode(value: &JsonValue) -> Result<Self, DecodeError>;

    /// Decode `value` if it is present and describes the model.
    #[must_use]
    fn decode(value: Option<&JsonValue>) -> Option<Self> {
        match Self::try_decode(value?) {
            Ok(model) => Some(model),
            Err(error) => {
                tracing::debug!(%error, "Failed to decode model");
                None
            }
        }
    }
}

/// Parse `bytes` and decode the result into `T`.
///
/// Returns `None` both for invalid JSON and for JSON that does not describe `T`.
#[must_use]
pub fn decode_bytes<T: Decode>(bytes: &[u8]) -> Option<T> {
    T::decode(deserialize(bytes).as_ref())
}

/// Parse `bytes` and decode the result into `T`, reporting why it failed.
///
/// # Errors
///
/// Returns [`Error::Parse`] for invalid JSON and [`Error::Decode`] for JSON that does not
/// describe `T`.
pub fn try_decode_bytes<T: Decode>(bytes: &[u8]) -> Result<T, Error> {
    let value = try_deserialize(bytes)?;
    Ok(T::try_decode(&value)?)
}
