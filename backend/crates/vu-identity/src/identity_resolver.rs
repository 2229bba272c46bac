//! Reconstructs a [`CanonicalIdentity`] from any one of IGN, UUID or
//! Discord ID. Each entry point performs one store read and never writes.

use crate::{IdentityError, IdentityErrorResult, cape_variant};

use vu_config::ResolverConfig;
use vu_core::{CanonicalIdentity, DiscordId, MappingRecord, MinecraftUuid, MojangProfile};
use vu_db::LinkRepository;
use vu_providers::{Provider, ProviderError, Providers};

use log::{debug, warn};

#[derive(Clone)]
pub struct IdentityResolver {
    providers: Providers,
    links: LinkRepository,
    allow_partial_discord: bool,
}

impl IdentityResolver {
    pub fn new(providers: Providers, links: LinkRepository, config: &ResolverConfig) -> Self {
        Self {
            providers,
            links,
            allow_partial_discord: config.allow_partial_discord,
        }
    }

    /// Mojang name -> profile -> stored link -> Discord user
    pub async fn resolve_by_ign(&self, ign: &str) -> IdentityErrorResult<CanonicalIdentity> {
        let ign = ign.trim();
        if ign.is_empty() {
            return Err(IdentityError::bad_request("Missing IGN"));
        }

        let player = self.providers.mojang.player_by_name(ign).await?;
        let uuid = MinecraftUuid::parse(&player.id).map_err(|e| {
            IdentityError::upstream(ProviderError::decode(Provider::Mojang, e))
        })?;
        let profile = self.providers.mojang.profile(&uuid).await?;
        let record = self.linked_by_uuid(&uuid).await?;

        self.assemble(profile, record).await
    }

    /// Profile -> stored link -> Discord user; hyphenated input is accepted
    pub async fn resolve_by_uuid(&self, uuid: &str) -> IdentityErrorResult<CanonicalIdentity> {
        let uuid = MinecraftUuid::parse(uuid)?;

        let profile = self.providers.mojang.profile(&uuid).await?;
        let record = self.linked_by_uuid(&uuid).await?;

        self.assemble(profile, record).await
    }

    /// Stored link -> profile -> Discord user
    pub async fn resolve_by_discord_id(
        &self,
        discord_id: &str,
    ) -> IdentityErrorResult<CanonicalIdentity> {
        let discord_id = DiscordId::parse(discord_id)?;

        let record = self
            .links
            .find_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| IdentityError::not_linked(discord_id))?;
        let profile = self.providers.mojang.profile(&record.uuid).await?;

        self.assemble(profile, record).await
    }

    async fn linked_by_uuid(&self, uuid: &MinecraftUuid) -> IdentityErrorResult<MappingRecord> {
        self.links
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| IdentityError::not_linked(uuid))
    }

    async fn assemble(
        &self,
        profile: MojangProfile,
        record: MappingRecord,
    ) -> IdentityErrorResult<CanonicalIdentity> {
        let skin_texture_value = profile
            .textures_value()
            .map(str::to_string)
            .ok_or_else(|| {
                IdentityError::upstream(ProviderError::decode(
                    Provider::Mojang,
                    "profile has no textures property",
                ))
            })?;

        let discord_user = match self.providers.discord.user(record.discord_id).await {
            Ok(user) => Some(user),
            Err(e) if self.allow_partial_discord => {
                warn!(
                    "Discord enrichment failed for {}, returning partial identity: {}",
                    record.discord_id, e
                );
                None
            }
            Err(e) => return Err(IdentityError::upstream(e)),
        };

        let cape = cape_variant(&skin_texture_value);
        debug!(
            "Resolved {} <-> {} (cape: {:?})",
            record.uuid, record.discord_id, cape
        );

        Ok(CanonicalIdentity {
            ign: profile.name,
            uuid: record.uuid,
            discord_id: record.discord_id,
            discord_tag: discord_user.as_ref().map(|user| user.tag()),
            discord_user,
            skin_texture_value,
            cape,
        })
    }
}
