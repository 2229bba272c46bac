use crate::Provider;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    /// The upstream has no such identity
    #[error("{provider}: {message} {location}")]
    NotFound {
        provider: Provider,
        message: String,
        location: ErrorLocation,
    },

    #[error("{provider} request failed: {message} {location}")]
    Http {
        provider: Provider,
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned HTTP {status} {location}")]
    Status {
        provider: Provider,
        status: u16,
        location: ErrorLocation,
    },

    #[error("{provider} response could not be decoded: {message} {location}")]
    Decode {
        provider: Provider,
        message: String,
        location: ErrorLocation,
    },

    /// The upstream answered but refused the request (bad key, throttled)
    #[error("{provider} rejected the request: {message} {location}")]
    Rejected {
        provider: Provider,
        message: String,
        location: ErrorLocation,
    },

    #[error("{provider} endpoint is not a valid URL: {url} {location}")]
    InvalidUrl {
        provider: Provider,
        url: String,
        location: ErrorLocation,
    },

    #[error("{provider} credential is not configured {location}")]
    MissingCredential {
        provider: Provider,
        location: ErrorLocation,
    },

    #[error("HTTP client could not be built: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl ProviderError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(provider: Provider, message: S) -> Self {
        Self::NotFound {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn http(provider: Provider, source: reqwest::Error) -> Self {
        Self::Http {
            provider,
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn status(provider: Provider, status: u16) -> Self {
        Self::Status {
            provider,
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode<S: ToString>(provider: Provider, message: S) -> Self {
        Self::Decode {
            provider,
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected<S: Into<String>>(provider: Provider, message: S) -> Self {
        Self::Rejected {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Provider the failure came from; `None` for client setup failures
    pub fn provider(&self) -> Option<Provider> {
        match self {
            Self::NotFound { provider, .. }
            | Self::Http { provider, .. }
            | Self::Status { provider, .. }
            | Self::Decode { provider, .. }
            | Self::Rejected { provider, .. }
            | Self::InvalidUrl { provider, .. }
            | Self::MissingCredential { provider, .. } => Some(*provider),
            Self::Client { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
