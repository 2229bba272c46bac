use crate::{AuthError, AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const REDACTED_PREFIX_LEN: usize = 4;

/// Pick the API key from exactly one of the `Authorization` header or the
/// `key` query parameter. Empty values count as absent.
#[track_caller]
pub fn extract_token<'a>(header: Option<&'a str>, query: Option<&'a str>) -> AuthErrorResult<&'a str> {
    let header = header.map(str::trim).filter(|value| !value.is_empty());
    let query = query.map(str::trim).filter(|value| !value.is_empty());

    match (header, query) {
        (Some(_), Some(_)) => Err(AuthError::AmbiguousCredential {
            location: ErrorLocation::from(Location::caller()),
        }),
        (Some(token), None) | (None, Some(token)) => Ok(token),
        (None, None) => Err(AuthError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// First few characters of a key, for logs
pub fn redact(token: &str) -> String {
    let prefix: String = token.chars().take(REDACTED_PREFIX_LEN).collect();
    format!("{}***", prefix)
}
