use jsonmodel::{
    decode_bytes, deserialize, try_decode_bytes, Decode, DecodeError, Error, JsonType, JsonValue,
    Url, User,
};
use serde_json::{json, Value};
use test_case::test_case;

fn bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).expect("Serializable")
}

#[test_case("Tyler")]
#[test_case("")]
#[test_case("Zoë ⚡")]
#[test_case("with \"quotes\" and \\ slashes")]
fn first_name_is_preserved(name: &str) {
    let input = bytes(&json!({"FirstName": name}));
    let user: User = decode_bytes(&input).expect("Valid user");
    assert_eq!(user.first_name(), name);
}

#[test_case(json!({}); "missing")]
#[test_case(json!({"FirstName": 1}); "integer")]
#[test_case(json!({"FirstName": 1.5}); "float")]
#[test_case(json!({"FirstName": false}); "boolean")]
#[test_case(json!({"FirstName": null}); "null")]
#[test_case(json!({"FirstName": ["Tyler"]}); "array")]
#[test_case(json!({"FirstName": {"value": "Tyler"}}); "object")]
fn first_name_is_required(value: Value) {
    assert_eq!(decode_bytes::<User>(&bytes(&value)), None);
}

#[test_case("https://example.com/avatar.png")]
#[test_case("http://localhost:8080/a?size=64#top")]
#[test_case("file:///tmp/avatar.png")]
#[test_case("data:image/png;base64,iVBORw0KGgo=")]
fn valid_avatar(url: &str) {
    let input = bytes(&json!({"FirstName": "Tyler", "AvatarURL": url}));
    let user: User = decode_bytes(&input).expect("Valid user");
    let expected = Url::parse(url).expect("Valid URL");
    assert_eq!(user.avatar_url(), Some(&expected));
}

#[test_case(json!({"FirstName": "Tyler"}); "missing")]
#[test_case(json!({"FirstName": "Tyler", "AvatarURL": 42}); "integer")]
#[test_case(json!({"FirstName": "Tyler", "AvatarURL": null}); "null")]
#[test_case(json!({"FirstName": "Tyler", "AvatarURL": ["https://example.com"]}); "array")]
#[test_case(json!({"FirstName": "Tyler", "AvatarURL": "avatar.png"}); "relative")]
#[test_case(json!({"FirstName": "Tyler", "AvatarURL": "http://[::1"}); "unclosed host")]
#[test_case(json!({"FirstName": "Tyler", "AvatarURL": ""}); "empty")]
fn absent_avatar(value: Value) {
    let user: User = decode_bytes(&bytes(&value)).expect("Valid user");
    assert_eq!(user.first_name(), "Tyler");
    assert_eq!(user.avatar_url(), None);
}

#[test_case(b"[{\"FirstName\": \"Tyler\"}]"; "array")]
#[test_case(b"\"Tyler\""; "string")]
#[test_case(b"42"; "number")]
#[test_case(b"null"; "null")]
#[test_case(b"true"; "boolean")]
fn non_object_top_level(input: &[u8]) {
    assert!(deserialize(input).is_some());
    assert_eq!(decode_bytes::<User>(input), None);
}

#[test]
fn round_trip() {
    let url = "https://example.com/users/tyler.png";
    let input = bytes(&json!({"FirstName": "Tyler", "AvatarURL": url}));
    let value = deserialize(&input);
    let user = User::decode(value.as_ref()).expect("Valid user");
    assert_eq!(
        user,
        User::new("Tyler", Some(Url::parse(url).expect("Valid URL")))
    );
}

#[test]
fn round_trip_through_model() {
    let user = User::new(
        "Tyler",
        Some(Url::parse("https://example.com/a.png").expect("Valid URL")),
    );
    let serialized = serde_json::to_vec(&user).expect("Serializable");
    assert_eq!(decode_bytes::<User>(&serialized), Some(user));
}

#[test_case(b"{\"FirstName\": \"Tyler\""; "truncated")]
#[test_case(b"{FirstName: \"Tyler\"}"; "unquoted key")]
#[test_case(b"{\"FirstName\": \"Ty\xffler\"}"; "invalid utf8")]
#[test_case(b""; "empty")]
fn malformed_input(input: &[u8]) {
    let value = deserialize(input);
    assert_eq!(value, None);
    assert_eq!(User::decode(value.as_ref()), None);
    assert!(matches!(
        try_decode_bytes::<User>(input),
        Err(Error::Parse(_))
    ));
}

#[test]
fn reasons_are_reported() {
    let error = try_decode_bytes::<User>(br#"{"FirstName": 1}"#).expect_err("Invalid user");
    assert!(matches!(
        error,
        Error::Decode(DecodeError::InvalidType {
            expected: JsonType::String,
            found: JsonType::Integer,
            ..
        })
    ));
    assert_eq!(
        error.to_string(),
        "Field 'FirstName' is expected to be string, found integer"
    );
}

#[test]
fn nested_values_in_objects_stay_raw() {
    let value = deserialize(br#"{"FirstName": "Tyler", "Tags": [true, 1.5]}"#).expect("Valid JSON");
    let object = value.as_object().expect("Object");
    assert_eq!(object.get("Tags"), Some(&json!([true, 1.5])));
}

#[test]
fn unclassified_array_elements_are_absent() {
    let value = deserialize(b"[null, true, 3, 4.5]").expect("Valid JSON");
    assert_eq!(
        value,
        JsonValue::Array(Box::new([
            Some(JsonValue::Null),
            None,
            Some(JsonValue::Number(3)),
            None,
        ]))
    );
}
