use crate::{AuthError, AuthErrorResult};

use vu_providers::TurnstileClient;

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, warn};
use serde::Deserialize;

/// JSON body field carrying the widget token
pub const CHALLENGE_TOKEN_FIELD: &str = "cf-turnstile-response";

#[derive(Debug, Deserialize)]
struct ChallengeBody {
    #[serde(rename = "cf-turnstile-response")]
    token: String,
}

/// Human-verification check for the public lookup routes.
#[derive(Debug, Clone)]
pub struct BotChallengeGate {
    turnstile: TurnstileClient,
}

impl BotChallengeGate {
    pub fn new(turnstile: TurnstileClient) -> Self {
        Self { turnstile }
    }

    /// Validate the token found in `body` for the caller at `client_ip`.
    pub async fn check(&self, body: &[u8], client_ip: Option<&str>) -> AuthErrorResult<()> {
        let ChallengeBody { token } =
            serde_json::from_slice(body).map_err(|e| AuthError::ChallengeTokenMissing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if token.is_empty() {
            return Err(AuthError::ChallengeTokenMissing {
                message: format!("{} is empty", CHALLENGE_TOKEN_FIELD),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let verdict = self.turnstile.verify(&token, client_ip).await?;

        if !verdict.success {
            warn!(
                "Bot challenge failed for {}: {:?}",
                client_ip.unwrap_or("unknown client"),
                verdict.error_codes
            );
            return Err(AuthError::ChallengeFailed {
                error_codes: verdict.error_codes,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!("Bot challenge passed");
        Ok(())
    }
}
