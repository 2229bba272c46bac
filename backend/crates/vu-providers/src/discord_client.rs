use crate::endpoint::endpoint;
use crate::{Provider, ProviderError, ProviderResult};

use vu_core::{DiscordId, DiscordUser};

use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};

/// Discord REST API, authenticated as a bot.
#[derive(Clone)]
pub struct DiscordClient {
    http: Client,
    api_url: String,
    bot_token: String,
}

impl std::fmt::Debug for DiscordClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl DiscordClient {
    pub fn new(http: Client, api_url: &str, bot_token: &str) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            bot_token: bot_token.to_string(),
        }
    }

    /// Live user profile. `created_at` is filled in from the snowflake.
    pub async fn user(&self, id: DiscordId) -> ProviderResult<DiscordUser> {
        let id_string = id.to_string();
        let url = endpoint(Provider::Discord, &self.api_url, &["users", &id_string])?;
        debug!("Discord user lookup: {}", id);

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bot {}", self.bot_token))
            .send()
            .await
            .map_err(|e| ProviderError::http(Provider::Discord, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::not_found(Provider::Discord, "user not found"));
        }
        if !status.is_success() {
            return Err(ProviderError::status(Provider::Discord, status.as_u16()));
        }

        let mut user = response
            .json::<DiscordUser>()
            .await
            .map_err(|e| ProviderError::decode(Provider::Discord, e))?;

        let snowflake =
            DiscordId::parse(&user.id).map_err(|e| ProviderError::decode(Provider::Discord, e))?;
        user.created_at = snowflake.created_at_unix();

        Ok(user)
    }
}
