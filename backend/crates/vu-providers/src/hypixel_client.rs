use crate::endpoint::endpoint;
use crate::{Provider, ProviderError, ProviderResult};

use vu_core::MinecraftUuid;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

const API_KEY_HEADER: &str = "API-Key";

/// Hypixel public API, used only for the Discord tag a player has linked
/// in their in-game social media settings.
#[derive(Clone)]
pub struct HypixelClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl std::fmt::Debug for HypixelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HypixelClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PlayerResponse {
    success: bool,
    cause: Option<String>,
    player: Option<Player>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Player {
    social_media: Option<SocialMedia>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SocialMedia {
    links: Option<Links>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Links {
    #[serde(rename = "DISCORD")]
    discord: Option<String>,
}

impl HypixelClient {
    pub fn new(http: Client, api_url: &str, api_key: &str) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// The `player.socialMedia.links.DISCORD` value, or an empty string
    /// when the player is unknown or has not linked a Discord account.
    pub async fn discord_tag(&self, uuid: &MinecraftUuid) -> ProviderResult<String> {
        let url = endpoint(Provider::Hypixel, &self.api_url, &["player"])?;
        debug!("Hypixel player lookup: {}", uuid);

        let response = self
            .http
            .get(url)
            .query(&[("uuid", uuid.as_str())])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::http(Provider::Hypixel, e))?;

        let status = response.status();
        let body = match response.json::<PlayerResponse>().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(ProviderError::status(Provider::Hypixel, status.as_u16()));
            }
            Err(e) => return Err(ProviderError::decode(Provider::Hypixel, e)),
        };

        if !body.success {
            let cause = body
                .cause
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(ProviderError::rejected(Provider::Hypixel, cause));
        }

        Ok(body
            .player
            .and_then(|player| player.social_media)
            .and_then(|social| social.links)
            .and_then(|links| links.discord)
            .unwrap_or_default())
    }
}
