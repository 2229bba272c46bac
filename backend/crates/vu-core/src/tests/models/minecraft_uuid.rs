use crate::{CoreError, MinecraftUuid};

#[test]
fn test_hyphenated_and_bare_forms_normalize_identically() {
    let hyphenated = MinecraftUuid::parse("069a79f4-44e9-4726-a5be-fca90e38aaf5").unwrap();
    let bare = MinecraftUuid::parse("069a79f444e94726a5befca90e38aaf5").unwrap();

    assert_eq!(hyphenated, bare);
    assert_eq!(bare.as_str(), "069a79f444e94726a5befca90e38aaf5");
}

#[test]
fn test_uppercase_input_is_lowercased() {
    let uuid = MinecraftUuid::parse("069A79F444E94726A5BEFCA90E38AAF5").unwrap();
    assert_eq!(uuid.as_str(), "069a79f444e94726a5befca90e38aaf5");
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let uuid = MinecraftUuid::parse("  069a79f444e94726a5befca90e38aaf5\n").unwrap();
    assert_eq!(uuid.as_str(), "069a79f444e94726a5befca90e38aaf5");
}

#[test]
fn test_invalid_forms_are_rejected() {
    for value in [
        "",
        "notch",
        "069a79f444e94726a5befca90e38aaf",
        "069a79f444e94726a5befca90e38aaf5a",
        "069a79f4-44e9-4726-a5be-fca90e38aaz5",
        "{069a79f4-44e9-4726-a5be-fca90e38aaf5}",
        "urn:uuid:069a79f4-44e9-4726-a5be-fca90e38aaf5",
    ] {
        let result = MinecraftUuid::parse(value);
        assert!(
            matches!(result, Err(CoreError::InvalidUuid { .. })),
            "expected {:?} to be rejected",
            value
        );
    }
}

#[test]
fn test_serializes_as_plain_string() {
    let uuid = MinecraftUuid::parse("069a79f4-44e9-4726-a5be-fca90e38aaf5").unwrap();
    let json = serde_json::to_value(&uuid).unwrap();
    assert_eq!(json, serde_json::json!("069a79f444e94726a5befca90e38aaf5"));
}
