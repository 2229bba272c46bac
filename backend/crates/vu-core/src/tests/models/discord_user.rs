use crate::DiscordUser;

fn user(username: &str, discriminator: &str) -> DiscordUser {
    serde_json::from_value(serde_json::json!({
        "id": "123456789012345678",
        "username": username,
        "discriminator": discriminator,
    }))
    .unwrap()
}

#[test]
fn test_tag_with_discriminator() {
    assert_eq!(user("Notch", "0001").tag(), "Notch#0001");
}

#[test]
fn test_tag_without_discriminator_uses_bare_username() {
    assert_eq!(user("notch", "0").tag(), "notch");
    assert_eq!(user("notch", "").tag(), "notch");
}

#[test]
fn test_deserialize_minimal_payload_fills_defaults() {
    let parsed = user("Notch", "0001");

    assert_eq!(parsed.avatar, None);
    assert!(!parsed.bot);
    assert_eq!(parsed.public_flags, 0);
    assert_eq!(parsed.accent_color, None);
    assert_eq!(parsed.created_at, 0);
}

#[test]
fn test_deserialize_full_payload() {
    let parsed: DiscordUser = serde_json::from_value(serde_json::json!({
        "id": "80351110224678912",
        "username": "Nelly",
        "discriminator": "1337",
        "global_name": null,
        "avatar": "8342729096ea3675442027381ff50dfe",
        "bot": false,
        "public_flags": 64,
        "banner": "06c16474723fe537c283b8efa61a30c8",
        "banner_color": "#ffffff",
        "accent_color": 16711680
    }))
    .unwrap();

    assert_eq!(parsed.tag(), "Nelly#1337");
    assert_eq!(parsed.public_flags, 64);
    assert_eq!(parsed.accent_color, Some(16_711_680));
    assert_eq!(parsed.banner_color.as_deref(), Some("#ffffff"));
}
