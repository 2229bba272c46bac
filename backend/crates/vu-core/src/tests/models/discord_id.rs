use crate::{CoreError, DISCORD_EPOCH_MS, DiscordId};

#[test]
fn test_parse_valid_snowflake() {
    let id = DiscordId::parse("123456789012345678").unwrap();
    assert_eq!(id.to_string(), "123456789012345678");
}

#[test]
fn test_parse_rejects_non_numeric() {
    for value in ["", "abc", "-1", "+12", "12 34", "99999999999999999999999"] {
        assert!(
            matches!(
                DiscordId::parse(value),
                Err(CoreError::InvalidDiscordId { .. })
            ),
            "expected {:?} to be rejected",
            value
        );
    }
}

#[test]
fn test_zero_snowflake_is_discord_epoch() {
    let id = DiscordId::parse("0").unwrap();
    assert_eq!(id.created_at_millis(), DISCORD_EPOCH_MS);
    assert_eq!(id.created_at_unix(), 1_420_070_400);
}

#[test]
fn test_created_at_decodes_timestamp_bits() {
    // 175928847299117063 is the example snowflake from the Discord docs:
    // 2016-04-30 11:18:25.796 UTC.
    let id = DiscordId::parse("175928847299117063").unwrap();

    assert_eq!(id.created_at_millis(), 1_462_015_105_796);
    assert_eq!(id.created_at_unix(), 1_462_015_105);
}

#[test]
fn test_serializes_as_string() {
    let id = DiscordId::parse("123456789012345678").unwrap();
    let json = serde_json::to_value(id).unwrap();
    assert_eq!(json, serde_json::json!("123456789012345678"));
}
