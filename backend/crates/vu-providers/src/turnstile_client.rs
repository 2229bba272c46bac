use crate::{Provider, ProviderError, ProviderResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client, Url};
use serde::Deserialize;

/// Outcome reported by the challenge service for one token.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TurnstileVerdict {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "error-codes", default)]
    pub error_codes: Vec<String>,
}

/// Server-side validation of a Cloudflare Turnstile token.
#[derive(Clone)]
pub struct TurnstileClient {
    http: Client,
    verify_url: Url,
    secret: String,
}

impl std::fmt::Debug for TurnstileClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnstileClient")
            .field("verify_url", &self.verify_url.as_str())
            .finish_non_exhaustive()
    }
}

impl TurnstileClient {
    #[track_caller]
    pub fn new(http: Client, verify_url: &str, secret: &str) -> ProviderResult<Self> {
        let verify_url = Url::parse(verify_url).map_err(|_| ProviderError::InvalidUrl {
            provider: Provider::Turnstile,
            url: verify_url.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            http,
            verify_url,
            secret: secret.to_string(),
        })
    }

    /// Form-POST `secret`, `response` and (when known) `remoteip`.
    ///
    /// A verdict with `success: false` is returned as `Ok`; only transport
    /// and decode failures are errors.
    pub async fn verify(
        &self,
        token: &str,
        remote_ip: Option<&str>,
    ) -> ProviderResult<TurnstileVerdict> {
        let mut form = vec![("secret", self.secret.as_str()), ("response", token)];
        if let Some(ip) = remote_ip {
            form.push(("remoteip", ip));
        }
        debug!("Verifying bot challenge token (remote ip: {:?})", remote_ip);

        let response = self
            .http
            .post(self.verify_url.clone())
            .form(&form)
            .send()
            .await
            .map_err(|e| ProviderError::http(Provider::Turnstile, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::status(Provider::Turnstile, status.as_u16()));
        }

        response
            .json::<TurnstileVerdict>()
            .await
            .map_err(|e| ProviderError::decode(Provider::Turnstile, e))
    }
}
