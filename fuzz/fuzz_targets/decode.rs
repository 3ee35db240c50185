#![no_main]
use jsonmodel::{decode_bytes, deserialize, try_decode_bytes, Decode, User};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let value = deserialize(data);
    let user = User::decode(value.as_ref());
    assert_eq!(user, decode_bytes::<User>(data));
    assert_eq!(user, try_decode_bytes::<User>(data).ok());
    if let Some(user) = user {
        let serialized = serde_json::to_vec(&user).expect("Failed to serialize user");
        let decoded = decode_bytes::<User>(&serialized).expect("Serialized user must decode");
        assert_eq!(decoded.first_name(), user.first_name());
    }
});
