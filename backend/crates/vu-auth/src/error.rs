use vu_core::Permission;
use vu_db::DbError;
use vu_providers::ProviderError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No API key in header or query {location}")]
    MissingCredential { location: ErrorLocation },

    #[error("API key present in both header and query {location}")]
    AmbiguousCredential { location: ErrorLocation },

    #[error("Unknown API key {key} {location}")]
    InvalidCredential {
        /// Redacted
        key: String,
        location: ErrorLocation,
    },

    #[error("API key {key} lacks {required} {location}")]
    InsufficientPermissions {
        key: String,
        required: Permission,
        location: ErrorLocation,
    },

    #[error("No capability is defined for method {method} {location}")]
    UnsupportedMethod {
        method: String,
        location: ErrorLocation,
    },

    #[error("Credential lookup failed: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Bot challenge token missing: {message} {location}")]
    ChallengeTokenMissing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Bot challenge failed: {error_codes:?} {location}")]
    ChallengeFailed {
        error_codes: Vec<String>,
        location: ErrorLocation,
    },

    #[error("Bot challenge service unavailable: {source} {location}")]
    ChallengeUnavailable {
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ProviderError> for AuthError {
    #[track_caller]
    fn from(source: ProviderError) -> Self {
        Self::ChallengeUnavailable {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
