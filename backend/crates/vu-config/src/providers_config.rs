use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DISCORD_API_URL, DEFAULT_HYPIXEL_API_URL,
    DEFAULT_MOJANG_API_URL, DEFAULT_MOJANG_SESSION_URL, DEFAULT_PROVIDER_TIMEOUT_SECS,
    MAX_PROVIDER_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Upstream identity provider endpoints and credentials.
///
/// Base URLs are overridable so the adapters can be pointed at a mock
/// server. The two secrets have no default and are normally supplied
/// through the environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub mojang_api_url: String,
    pub mojang_session_url: String,
    pub discord_api_url: String,
    pub hypixel_api_url: String,
    /// Bot token sent as `Authorization: Bot <token>`
    pub discord_bot_token: Option<String>,
    pub hypixel_api_key: Option<String>,
    /// Per-request timeout; 0 keeps the HTTP client default
    pub timeout_secs: u64,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            mojang_api_url: String::from(DEFAULT_MOJANG_API_URL),
            mojang_session_url: String::from(DEFAULT_MOJANG_SESSION_URL),
            discord_api_url: String::from(DEFAULT_DISCORD_API_URL),
            hypixel_api_url: String::from(DEFAULT_HYPIXEL_API_URL),
            discord_bot_token: None,
            hypixel_api_key: None,
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl ProvidersConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, url) in [
            ("providers.mojang_api_url", &self.mojang_api_url),
            ("providers.mojang_session_url", &self.mojang_session_url),
            ("providers.discord_api_url", &self.discord_api_url),
            ("providers.hypixel_api_url", &self.hypixel_api_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::providers(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        if self.discord_bot_token.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::missing(
                "providers.discord_bot_token",
                "VU_DISCORD_BOT_TOKEN",
            ));
        }

        if self.hypixel_api_key.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::missing(
                "providers.hypixel_api_key",
                "VU_HYPIXEL_API_KEY",
            ));
        }

        if self.timeout_secs > MAX_PROVIDER_TIMEOUT_SECS {
            return Err(ConfigError::providers(format!(
                "providers.timeout_secs must be 0-{}, got {}",
                MAX_PROVIDER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
