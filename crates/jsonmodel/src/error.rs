use core::fmt;

use crate::JsonType;

/// Reason why a JSON value could not be decoded into a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The value is not a JSON object.
    NotAnObject { found: JsonType },
    /// A required key is absent.
    MissingField { field: String },
    /// A key is present, but holds a value of another type.
    InvalidType {
        field: String,
        expected: JsonType,
        found: JsonType,
    },
    /// A key holds a value of the expected type that cannot be converted.
    InvalidValue { field: String, reason: String },
}

impl DecodeError {
    pub(crate) fn missing_field(field: impl Into<String>) -> Self {
        DecodeError::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn invalid_type(field: impl Into<String>, expected: JsonType, found: JsonType) -> Self {
        DecodeError::InvalidType {
            field: field.into(),
            expected,
            found,
        }
    }

    pub(crate) fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DecodeError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NotAnObject { found } => {
                write!(f, "Expected an object, found {found}")
            }
            DecodeError::MissingField { field } => {
                write!(f, "Missing required field '{field}'")
            }
            DecodeError::InvalidType {
                field,
                expected,
                found,
            } => write!(f, "Field '{field}' is expected to be {expected}, found {found}"),
            DecodeError::InvalidValue { field, reason } => {
                write!(f, "Field '{field}' has an invalid value: {reason}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that can occur while decoding raw bytes into a model.
#[derive(Debug)]
pub enum Error {
    /// The input is not valid JSON.
    Parse(serde_json::Error),
    /// The input is valid JSON, but does not describe the model.
    Decode(DecodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(error) => write!(f, "Invalid JSON: {error}"),
            Error::Decode(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(error) => Some(error),
            Error::Decode(error) => Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Parse(error)
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Self {
        Error::Decode(error)
    }
}
