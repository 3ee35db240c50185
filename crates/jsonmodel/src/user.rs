use serde::Serialize;
use url::Url;

use crate::{field::required, Decode, DecodeError, JsonValue};

const FIRST_NAME: &str = "FirstName";
const AVATAR_URL: &str = "AvatarURL";

/// A user profile.
///
/// Serializes back into the same field names it is decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "AvatarURL", skip_serializing_if = "Option::is_none")]
    avatar_url: Option<Url>,
}

impl User {
    #[must_use]
    pub fn new(first_name: impl Into<String>, avatar_url: Option<Url>) -> User {
        User {
            first_name: first_name.into(),
            avatar_url,
        }
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Location of the user's avatar image, if it was given as a valid URL.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&Url> {
        self.avatar_url.as_ref()
    }
}

impl Decode for User {
    /// Requires an object with a string at `FirstName`.
    ///
    /// `AvatarURL` is kept only if it is a string holding a valid URL, otherwise it is dropped
    /// without failing the decoding.
    fn try_decode(value: &JsonValue) -> Result<Self, DecodeError> {
        let object = value.as_object().ok_or(DecodeError::NotAnObject {
            found: value.json_type(),
        })?;
        let first_name = required::<String>(object, FIRST_NAME)?;
        let avatar_url = match required::<Url>(object, AVATAR_URL) {
            Ok(url) => Some(url),
            Err(DecodeError::MissingField { .. }) => None,
            Err(error) => {
                tracing::debug!(%error, "Ignoring invalid `{AVATAR_URL}`");
                None
            }
        };
        Ok(User {
            first_name,
            avatar_url,
        })
    }
}
