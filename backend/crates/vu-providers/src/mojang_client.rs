use crate::endpoint::endpoint;
use crate::{Provider, ProviderError, ProviderResult};

use vu_core::{MinecraftUuid, MojangPlayer, MojangProfile};

use log::debug;
use reqwest::{Client, StatusCode};

const NOT_FOUND_MESSAGE: &str = "user not found";

/// Mojang account API (name -> UUID) and session server (UUID -> profile).
#[derive(Debug, Clone)]
pub struct MojangClient {
    http: Client,
    api_url: String,
    session_url: String,
}

impl MojangClient {
    pub fn new(http: Client, api_url: &str, session_url: &str) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            session_url: session_url.to_string(),
        }
    }

    /// Case-insensitive name lookup. Any non-200 answer means no such player.
    pub async fn player_by_name(&self, ign: &str) -> ProviderResult<MojangPlayer> {
        let url = endpoint(
            Provider::Mojang,
            &self.api_url,
            &["users", "profiles", "minecraft", ign],
        )?;
        debug!("Mojang name lookup: {}", ign);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::http(Provider::Mojang, e))?;

        if response.status() != StatusCode::OK {
            return Err(ProviderError::not_found(Provider::Mojang, NOT_FOUND_MESSAGE));
        }

        response
            .json::<MojangPlayer>()
            .await
            .map_err(|e| ProviderError::decode(Provider::Mojang, e))
    }

    /// Session-server profile, including the `textures` property.
    pub async fn profile(&self, uuid: &MinecraftUuid) -> ProviderResult<MojangProfile> {
        let url = endpoint(
            Provider::Mojang,
            &self.session_url,
            &["session", "minecraft", "profile", uuid.as_str()],
        )?;
        debug!("Mojang profile lookup: {}", uuid);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::http(Provider::Mojang, e))?;

        if response.status() != StatusCode::OK {
            return Err(ProviderError::not_found(Provider::Mojang, NOT_FOUND_MESSAGE));
        }

        let profile = response
            .json::<MojangProfile>()
            .await
            .map_err(|e| ProviderError::decode(Provider::Mojang, e))?;

        if profile.textures_value().is_none() {
            return Err(ProviderError::decode(
                Provider::Mojang,
                format!("profile {} has no textures property", profile.id),
            ));
        }

        Ok(profile)
    }
}
