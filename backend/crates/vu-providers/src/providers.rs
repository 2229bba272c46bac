use crate::{
    DiscordClient, HypixelClient, MojangClient, Provider, ProviderError, ProviderResult,
    TurnstileClient, USER_AGENT,
};

use vu_config::{BotChallengeConfig, ProvidersConfig};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::Client;

/// Shared HTTP client; `None` keeps reqwest's default (no overall timeout).
#[track_caller]
pub fn http_client(timeout: Option<Duration>) -> ProviderResult<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(|e| ProviderError::Client {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
        source: e,
    })
}

/// The three identity providers, sharing one connection pool.
#[derive(Debug, Clone)]
pub struct Providers {
    pub mojang: MojangClient,
    pub discord: DiscordClient,
    pub hypixel: HypixelClient,
    http: Client,
}

impl Providers {
    pub fn from_config(config: &ProvidersConfig) -> ProviderResult<Self> {
        let discord_bot_token = required(Provider::Discord, &config.discord_bot_token)?;
        let hypixel_api_key = required(Provider::Hypixel, &config.hypixel_api_key)?;

        let http = http_client(config.timeout())?;

        Ok(Self {
            mojang: MojangClient::new(
                http.clone(),
                &config.mojang_api_url,
                &config.mojang_session_url,
            ),
            discord: DiscordClient::new(http.clone(), &config.discord_api_url, discord_bot_token),
            hypixel: HypixelClient::new(http.clone(), &config.hypixel_api_url, hypixel_api_key),
            http,
        })
    }

    /// Challenge verifier on the same connection pool
    pub fn turnstile(&self, config: &BotChallengeConfig) -> ProviderResult<TurnstileClient> {
        let secret = required(Provider::Turnstile, &config.secret)?;
        TurnstileClient::new(self.http.clone(), &config.verify_url, secret)
    }
}

#[track_caller]
fn required(provider: Provider, value: &Option<String>) -> ProviderResult<&str> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ProviderError::MissingCredential {
            provider,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
