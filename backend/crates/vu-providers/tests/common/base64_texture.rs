use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Base64 `textures` property value as the session server would return it
pub fn textures_value(id: &str, name: &str, cape_url: Option<&str>) -> String {
    let mut textures = serde_json::json!({
        "SKIN": { "url": "http://textures.minecraft.net/texture/skinhash" }
    });
    if let Some(url) = cape_url {
        textures["CAPE"] = serde_json::json!({ "url": url });
    }
    let payload = serde_json::json!({
        "timestamp": 1_700_000_000_000_i64,
        "profileId": id,
        "profileName": name,
        "textures": textures,
    });
    STANDARD.encode(payload.to_string())
}
