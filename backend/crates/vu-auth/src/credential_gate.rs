use crate::{AuthError, AuthErrorResult, extract_token, redact, required_permission};

use vu_core::CredentialRecord;
use vu_db::ApiKeyRepository;

use std::panic::Location;

use error_location::ErrorLocation;
use http::Method;
use log::{debug, warn};

/// Resolves an API key to its permission set and checks the capability
/// the request method needs. Every call reads the store; nothing is cached.
#[derive(Clone)]
pub struct CredentialGate {
    api_keys: ApiKeyRepository,
}

impl CredentialGate {
    pub fn new(api_keys: ApiKeyRepository) -> Self {
        Self { api_keys }
    }

    /// `header` is the raw `Authorization` value, `query` the `key` parameter.
    pub async fn authorize(
        &self,
        header: Option<&str>,
        query: Option<&str>,
        method: &Method,
    ) -> AuthErrorResult<CredentialRecord> {
        let token = extract_token(header, query)?;
        let required = required_permission(method)?;

        let Some(record) = self.api_keys.find_by_key(token).await? else {
            warn!("Rejected unknown API key {}", redact(token));
            return Err(AuthError::InvalidCredential {
                key: redact(token),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !record.has_permission(required) {
            warn!(
                "API key {} (id {}) lacks {} for {}",
                redact(token),
                record.id,
                required,
                method
            );
            return Err(AuthError::InsufficientPermissions {
                key: redact(token),
                required,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!("API key {} authorized for {}", record.id, required);
        Ok(record)
    }
}
