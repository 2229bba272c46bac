pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::canonical_identity::CanonicalIdentity;
pub use models::credential_record::CredentialRecord;
pub use models::discord_id::{DISCORD_EPOCH_MS, DiscordId};
pub use models::discord_user::DiscordUser;
pub use models::mapping_record::MappingRecord;
pub use models::minecraft_uuid::MinecraftUuid;
pub use models::mojang_profile::{MojangPlayer, MojangProfile, ProfileProperty};
pub use models::permission::Permission;
pub use models::texture_payload::{Texture, TexturePayload, Textures};
