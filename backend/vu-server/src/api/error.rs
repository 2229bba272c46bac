//! REST API error types
//!
//! Every failure reaches the caller as `{"message": string}` with a status
//! code. Store and upstream detail is logged, never returned.

use vu_auth::AuthError;
use vu_db::DbError;
use vu_identity::IdentityError;
use vu_providers::ProviderError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const NOT_LINKED_MESSAGE: &str = "User does not exist within our database.";
const INTERNAL_MESSAGE: &str = "Internal Server Error";
const CHALLENGE_FAILED_MESSAGE: &str = "Bot challenge failed";
const UNKNOWN_PROVIDER: &str = "upstream";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
    /// Upstream error codes from a failed bot challenge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad input, or no such identity (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown route (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Credential invalid or lacking the capability (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Bot challenge rejected by the verification service (401)
    #[error("Bot challenge failed: {error_codes:?} {location}")]
    ChallengeFailed {
        error_codes: Vec<String>,
        location: ErrorLocation,
    },

    /// No capability is defined for the method (405)
    #[error("Method not allowed: {method} {location}")]
    MethodNotAllowed {
        method: String,
        location: ErrorLocation,
    },

    /// A third-party provider failed (500)
    #[error("Upstream error [{provider}]: {detail} {location}")]
    Upstream {
        provider: &'static str,
        detail: String,
        location: ErrorLocation,
    },

    /// The mapping store failed (500)
    #[error("Store error: {detail} {location}")]
    Persistence {
        detail: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    fn upstream(source: &ProviderError) -> Self {
        Self::Upstream {
            provider: source
                .provider()
                .map(|provider| provider.as_str())
                .unwrap_or(UNKNOWN_PROVIDER),
            detail: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } | Self::ChallengeFailed { .. } => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Upstream { .. } | Self::Persistence { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            // Message already carries the "Store error" / "Upstream error" prefix
            ApiError::Persistence { .. } | ApiError::Upstream { .. } => log::error!("{}", self),
            ApiError::NotFound { .. } => log::debug!("{}", self),
            _ => log::warn!("{}", self),
        }

        let status = self.status_code();
        let body = match self {
            ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Unauthorized { message, .. } => ApiErrorResponse {
                message,
                errors: None,
            },
            ApiError::ChallengeFailed { error_codes, .. } => ApiErrorResponse {
                message: CHALLENGE_FAILED_MESSAGE.to_string(),
                errors: Some(error_codes),
            },
            ApiError::MethodNotAllowed { .. } => ApiErrorResponse {
                message: "Method Not Allowed".to_string(),
                errors: None,
            },
            ApiError::Upstream { provider, .. } => ApiErrorResponse {
                message: format!(
                    "There was an error contacting the {} API. Please try again later.",
                    provider
                ),
                errors: None,
            },
            ApiError::Persistence { .. } => ApiErrorResponse {
                message: INTERNAL_MESSAGE.to_string(),
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert resolution and verification errors to API errors
impl From<IdentityError> for ApiError {
    #[track_caller]
    fn from(e: IdentityError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            IdentityError::BadRequest { message, .. } => ApiError::BadRequest { message, location },
            // Mojang and Discord misses surface as 400 with the provider's message
            IdentityError::NotFound { source, .. } => ApiError::BadRequest {
                message: match source {
                    ProviderError::NotFound { message, .. } => message,
                    _ => String::from("user not found"),
                },
                location,
            },
            IdentityError::NotLinked { .. } => ApiError::BadRequest {
                message: NOT_LINKED_MESSAGE.to_string(),
                location,
            },
            IdentityError::Upstream { source, .. } => ApiError::upstream(&source),
            IdentityError::Persistence { source, .. } => ApiError::Persistence {
                detail: source.to_string(),
                location,
            },
        }
    }
}

/// Convert credential and bot challenge gate errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::MissingCredential { .. } => ApiError::BadRequest {
                message: "API Key Not Found".to_string(),
                location,
            },
            AuthError::AmbiguousCredential { .. } => ApiError::BadRequest {
                message: "API Key Found in both header and query".to_string(),
                location,
            },
            AuthError::InvalidCredential { .. } => ApiError::Unauthorized {
                message: "API Key Invalid".to_string(),
                location,
            },
            AuthError::InsufficientPermissions { .. } => ApiError::Unauthorized {
                message: "Insufficient Permissions".to_string(),
                location,
            },
            AuthError::UnsupportedMethod { method, .. } => {
                ApiError::MethodNotAllowed { method, location }
            }
            AuthError::Store { source, .. } => ApiError::Persistence {
                detail: source.to_string(),
                location,
            },
            AuthError::ChallengeTokenMissing { .. } => ApiError::BadRequest {
                message: "Bot challenge token missing".to_string(),
                location,
            },
            AuthError::ChallengeFailed { error_codes, .. } => {
                ApiError::ChallengeFailed {
                    error_codes,
                    location,
                }
            }
            AuthError::ChallengeUnavailable { source, .. } => ApiError::upstream(&source),
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::Persistence {
            detail: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
