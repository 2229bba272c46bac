use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BOT_CHALLENGE_ENABLED,
    DEFAULT_BOT_CHALLENGE_VERIFY_URL,
};

use serde::Deserialize;

/// Human-verification gate in front of the public lookup routes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotChallengeConfig {
    pub enabled: bool,
    pub secret: Option<String>,
    pub verify_url: String,
}

impl Default for BotChallengeConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_BOT_CHALLENGE_ENABLED,
            secret: None,
            verify_url: String::from(DEFAULT_BOT_CHALLENGE_VERIFY_URL),
        }
    }
}

impl BotChallengeConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if self.secret.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::missing(
                "bot_challenge.secret",
                "VU_BOT_CHALLENGE_SECRET",
            ));
        }

        if !(self.verify_url.starts_with("https://") || self.verify_url.starts_with("http://")) {
            return Err(ConfigError::bot_challenge(format!(
                "bot_challenge.verify_url must be an http(s) URL, got '{}'",
                self.verify_url
            )));
        }

        Ok(())
    }
}
