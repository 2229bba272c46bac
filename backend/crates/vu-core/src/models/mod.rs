pub mod canonical_identity;
pub mod credential_record;
pub mod discord_id;
pub mod discord_user;
pub mod mapping_record;
pub mod minecraft_uuid;
pub mod mojang_profile;
pub mod permission;
pub mod texture_payload;
