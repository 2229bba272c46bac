use crate::{DiscordId, MinecraftUuid};

use serde::Serialize;

/// Verified link between one Discord account and one Minecraft account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRecord {
    pub uuid: MinecraftUuid,
    pub discord_id: DiscordId,
}

impl MappingRecord {
    pub fn new(uuid: MinecraftUuid, discord_id: DiscordId) -> Self {
        Self { uuid, discord_id }
    }
}
