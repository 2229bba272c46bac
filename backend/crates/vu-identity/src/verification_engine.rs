//! Accepts a claimed UUID <-> Discord ID link only when Hypixel's recorded
//! Discord tag for the UUID equals Discord's live tag for the ID.

use crate::{IdentityError, IdentityErrorResult};

use vu_core::{DiscordId, MappingRecord, MinecraftUuid};
use vu_db::LinkRepository;
use vu_providers::Providers;

use log::info;

const MISSING_FIELD_MESSAGE: &str = "Missing UUID or Discord ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Tags matched and the link was stored
    Linked(MappingRecord),
    /// Both sides answered but disagree; nothing was stored
    Rejected {
        hypixel_tag: String,
        discord_tag: String,
    },
}

#[derive(Clone)]
pub struct VerificationEngine {
    providers: Providers,
    links: LinkRepository,
}

impl VerificationEngine {
    pub fn new(providers: Providers, links: LinkRepository) -> Self {
        Self { providers, links }
    }

    /// Any provider failure, an unknown Discord user included, aborts as
    /// [`IdentityError::Upstream`] before any write. A store failure after a
    /// confirmed match is reported as [`IdentityError::Persistence`].
    pub async fn verify_and_link(
        &self,
        claimed_uuid: &str,
        claimed_discord_id: &str,
    ) -> IdentityErrorResult<VerificationOutcome> {
        if claimed_uuid.trim().is_empty() || claimed_discord_id.trim().is_empty() {
            return Err(IdentityError::bad_request(MISSING_FIELD_MESSAGE));
        }

        let uuid = MinecraftUuid::parse(claimed_uuid)?;
        let discord_id = DiscordId::parse(claimed_discord_id)?;

        // Closures keep this call site as the error location
        #[allow(clippy::redundant_closure)]
        let (hypixel_tag, discord_user) = tokio::try_join!(
            async {
                self.providers
                    .hypixel
                    .discord_tag(&uuid)
                    .await
                    .map_err(|e| IdentityError::upstream(e))
            },
            async {
                self.providers
                    .discord
                    .user(discord_id)
                    .await
                    .map_err(|e| IdentityError::upstream(e))
            },
        )?;
        let discord_tag = discord_user.tag();

        if hypixel_tag.is_empty() || hypixel_tag != discord_tag {
            info!(
                "Verification rejected for {} <-> {}: hypixel '{}' vs discord '{}'",
                uuid, discord_id, hypixel_tag, discord_tag
            );
            return Ok(VerificationOutcome::Rejected {
                hypixel_tag,
                discord_tag,
            });
        }

        let record = MappingRecord::new(uuid, discord_id);
        self.links.upsert(&record).await?;
        info!("Linked {} <-> {}", record.uuid, record.discord_id);

        Ok(VerificationOutcome::Linked(record))
    }
}
