use vu_core::{CredentialRecord, DiscordId, MinecraftUuid};

pub fn uuid(value: &str) -> MinecraftUuid {
    MinecraftUuid::parse(value).expect("fixture uuid is valid")
}

pub fn discord_id(value: &str) -> DiscordId {
    DiscordId::parse(value).expect("fixture discord id is valid")
}

pub fn credential(id: &str, key: &str, permissions: &[&str]) -> CredentialRecord {
    CredentialRecord {
        id: id.to_string(),
        key: key.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}
