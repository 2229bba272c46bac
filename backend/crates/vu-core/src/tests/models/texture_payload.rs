use crate::{CoreError, MojangProfile, TexturePayload};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const CAPE_URL: &str =
    "http://textures.minecraft.net/texture/953cac8b779fe41383e675ee2b86071a71658f2180f56fbce8aa315ea70e2ed6";

fn encode(json: serde_json::Value) -> String {
    STANDARD.encode(json.to_string())
}

#[test]
fn test_cape_id_is_last_url_segment() {
    let value = encode(serde_json::json!({
        "timestamp": 1700000000000i64,
        "profileId": "069a79f444e94726a5befca90e38aaf5",
        "profileName": "Notch",
        "textures": {
            "SKIN": { "url": "http://textures.minecraft.net/texture/abc" },
            "CAPE": { "url": CAPE_URL }
        }
    }));

    let payload = TexturePayload::decode(&value).unwrap();

    assert_eq!(payload.profile_name.as_deref(), Some("Notch"));
    assert_eq!(
        payload.cape_id().as_deref(),
        Some("953cac8b779fe41383e675ee2b86071a71658f2180f56fbce8aa315ea70e2ed6")
    );
}

#[test]
fn test_no_cape_yields_none() {
    let value = encode(serde_json::json!({
        "textures": { "SKIN": { "url": "http://textures.minecraft.net/texture/abc" } }
    }));

    let payload = TexturePayload::decode(&value).unwrap();
    assert!(payload.cape_id().is_none());
}

#[test]
fn test_cape_url_with_trailing_slash_yields_none() {
    let value = encode(serde_json::json!({
        "textures": { "CAPE": { "url": "http://textures.minecraft.net/texture/" } }
    }));

    assert!(TexturePayload::decode(&value).unwrap().cape_id().is_none());
}

#[test]
fn test_invalid_base64_is_decode_error() {
    let result = TexturePayload::decode("!!not base64!!");
    assert!(matches!(result, Err(CoreError::TextureDecode { .. })));
}

#[test]
fn test_invalid_json_is_decode_error() {
    let result = TexturePayload::decode(&STANDARD.encode("not json"));
    assert!(matches!(result, Err(CoreError::TextureDecode { .. })));
}

#[test]
fn test_profile_textures_value_finds_named_property() {
    let profile: MojangProfile = serde_json::from_value(serde_json::json!({
        "id": "069a79f444e94726a5befca90e38aaf5",
        "name": "Notch",
        "properties": [
            { "name": "other", "value": "x" },
            { "name": "textures", "value": "dGV4dHVyZXM=", "signature": "sig" }
        ]
    }))
    .unwrap();

    assert_eq!(profile.textures_value(), Some("dGV4dHVyZXM="));
}
