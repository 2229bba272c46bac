use crate::Metrics;
use crate::error::Result as ServerErrorResult;

use vu_auth::{BotChallengeGate, CredentialGate};
use vu_config::{ApiConfig, Config};
use vu_db::Database;
use vu_identity::{IdentityResolver, VerificationEngine};
use vu_providers::Providers;

use log::{info, warn};

/// Shared state for every handler and middleware. Cheap to clone; the
/// store handle is owned by `main` and only borrowed here.
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub resolver: IdentityResolver,
    pub engine: VerificationEngine,
    pub credential_gate: CredentialGate,
    /// `None` when the bot challenge is disabled
    pub bot_challenge: Option<BotChallengeGate>,
    pub api_config: ApiConfig,
    pub metrics: Metrics,
}

impl AppState {
    pub fn from_config(config: &Config, database: Database) -> ServerErrorResult<Self> {
        let providers = Providers::from_config(&config.providers)?;

        let bot_challenge = if config.bot_challenge.enabled {
            info!("Bot challenge enabled for lookup routes");
            Some(BotChallengeGate::new(
                providers.turnstile(&config.bot_challenge)?,
            ))
        } else {
            warn!("Bot challenge DISABLED - lookup routes are open");
            None
        };

        Ok(Self {
            resolver: IdentityResolver::new(
                providers.clone(),
                database.links(),
                &config.resolver,
            ),
            engine: VerificationEngine::new(providers, database.links()),
            credential_gate: CredentialGate::new(database.api_keys()),
            bot_challenge,
            api_config: config.api.clone(),
            metrics: Metrics::new(),
            database,
        })
    }
}
