use crate::{DiscordId, DiscordUser, MinecraftUuid};

use serde::Serialize;

/// Fully resolved identity, assembled on demand and never persisted.
///
/// `discord_tag` and `discord_user` are absent only when the resolver is
/// configured to tolerate a failed Discord enrichment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalIdentity {
    pub ign: String,
    pub uuid: MinecraftUuid,
    pub discord_id: DiscordId,
    pub discord_tag: Option<String>,
    pub discord_user: Option<DiscordUser>,
    #[serde(rename = "skin")]
    pub skin_texture_value: String,
    pub cape: Option<String>,
}
