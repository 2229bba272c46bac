use crate::{IdentityError, IdentityErrorResult};

use vu_core::{DiscordId, MinecraftUuid};

const NEITHER_MESSAGE: &str = "Neither UUID nor Discord ID found in your request.";
const BOTH_MESSAGE: &str =
    "Both UUID and Discord ID found in your request. Please request one at a time.";

/// Which side of a stored link a request addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKey {
    Uuid(MinecraftUuid),
    DiscordId(DiscordId),
}

impl LinkKey {
    /// Exactly one of `uuid` / `discord_id` must be given; empty strings
    /// count as absent. The UUID is normalized here.
    #[track_caller]
    pub fn from_query(uuid: Option<&str>, discord_id: Option<&str>) -> IdentityErrorResult<Self> {
        let uuid = uuid.filter(|value| !value.is_empty());
        let discord_id = discord_id.filter(|value| !value.is_empty());

        match (uuid, discord_id) {
            (None, None) => Err(IdentityError::bad_request(NEITHER_MESSAGE)),
            (Some(_), Some(_)) => Err(IdentityError::bad_request(BOTH_MESSAGE)),
            (Some(uuid), None) => Ok(Self::Uuid(MinecraftUuid::parse(uuid)?)),
            (None, Some(discord_id)) => Ok(Self::DiscordId(DiscordId::parse(discord_id)?)),
        }
    }
}
