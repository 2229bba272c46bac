use vu_core::CoreError;
use vu_db::DbError;
use vu_providers::{Provider, ProviderError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    /// Caller input is malformed or missing; `message` is caller-facing
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// An upstream provider has no such identity
    #[error("Not found: {source} {location}")]
    NotFound {
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },

    /// The identity exists upstream but no link is stored for it
    #[error("No link stored for {key} {location}")]
    NotLinked {
        key: String,
        location: ErrorLocation,
    },

    #[error("Upstream error: {source} {location}")]
    Upstream {
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },

    #[error("Persistence error: {source} {location}")]
    Persistence {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_linked<S: ToString>(key: S) -> Self {
        Self::NotLinked {
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Treat any provider failure as an upstream fault, even "not found"
    #[track_caller]
    pub fn upstream(source: ProviderError) -> Self {
        Self::Upstream {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Provider behind an upstream or not-found failure
    pub fn provider(&self) -> Option<Provider> {
        match self {
            Self::NotFound { source, .. } | Self::Upstream { source, .. } => source.provider(),
            _ => None,
        }
    }
}

impl From<ProviderError> for IdentityError {
    #[track_caller]
    fn from(source: ProviderError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if source.is_not_found() {
            Self::NotFound { source, location }
        } else {
            Self::Upstream { source, location }
        }
    }
}

impl From<DbError> for IdentityError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Persistence {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for IdentityError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        let message = match source {
            CoreError::InvalidUuid { .. } => "Invalid UUID",
            CoreError::InvalidDiscordId { .. } => "Invalid Discord ID",
            CoreError::TextureDecode { .. } => "Invalid request",
        };
        Self::bad_request(message)
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
