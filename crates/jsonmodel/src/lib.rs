//! # jsonmodel
//!
//! Decode raw JSON bytes into typed application models.
//!
//! Decoding happens in two steps that compose into a pipeline:
//!
//! 1. [`deserialize`] turns bytes into a [`JsonValue`], a five-variant sum type.
//! 2. [`Decode::decode`] turns that value into a model such as [`User`].
//!
//! Both steps signal failure as `None`. The `try_*` counterparts report the reason instead.
//!
//! ```rust
//! use jsonmodel::{decode_bytes, User};
//!
//! let user: User = decode_bytes(br#"{"FirstName": "Tyler"}"#).expect("valid user");
//! assert_eq!(user.first_name(), "Tyler");
//! assert!(user.avatar_url().is_none());
//!
//! assert!(decode_bytes::<User>(b"[1, 2, 3]").is_none());
//! ```
mod decode;
mod deserialize;
mod error;
pub mod field;
mod types;
mod user;
mod value;

pub use decode::{decode_bytes, try_decode_bytes, Decode, Decoder};
pub use deserialize::{deserialize, try_deserialize, Deserializer};
pub use error::{DecodeError, Error};
pub use types::JsonType;
pub use url::Url;
pub use user::User;
pub use value::{JsonValue, Object};
