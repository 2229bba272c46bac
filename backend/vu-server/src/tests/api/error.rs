use crate::ApiError;

use vu_auth::AuthError;
use vu_core::Permission;
use vu_identity::IdentityError;
use vu_providers::{Provider, ProviderError};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn into_parts(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_message() {
    let error = ApiError::NotFound {
        message: "Endpoint Not Found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({"message": "Endpoint Not Found"}));
}

#[tokio::test]
async fn test_upstream_error_names_provider_and_hides_detail() {
    let error = ApiError::Upstream {
        provider: "hypixel",
        detail: "hypixel returned HTTP 503".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json["message"],
        "There was an error contacting the hypixel API. Please try again later."
    );
    assert!(!json.to_string().contains("503"));
}

#[tokio::test]
async fn test_persistence_error_returns_generic_500() {
    let error = ApiError::Persistence {
        detail: "database is locked".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({"message": "Internal Server Error"}));
}

#[tokio::test]
async fn test_challenge_failed_returns_401_with_error_codes() {
    let error = ApiError::ChallengeFailed {
        error_codes: vec!["invalid-input-response".into()],
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Bot challenge failed");
    assert_eq!(json["errors"], serde_json::json!(["invalid-input-response"]));
}

#[test]
fn test_not_linked_converts_to_bad_request() {
    let error: ApiError = IdentityError::not_linked("069a79f444e94726a5befca90e38aaf5").into();

    match error {
        ApiError::BadRequest { message, .. } => {
            assert_eq!(message, "User does not exist within our database.")
        }
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}

#[test]
fn test_provider_not_found_converts_to_bad_request_with_provider_message() {
    let error: ApiError =
        IdentityError::from(ProviderError::not_found(Provider::Mojang, "user not found")).into();

    match error {
        ApiError::BadRequest { message, .. } => assert_eq!(message, "user not found"),
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}

#[test]
fn test_provider_failure_converts_to_upstream() {
    let error: ApiError =
        IdentityError::from(ProviderError::status(Provider::Discord, 502)).into();

    match error {
        ApiError::Upstream { provider, .. } => assert_eq!(provider, "discord"),
        other => panic!("Expected Upstream, got {:?}", other),
    }
}

#[test]
fn test_insufficient_permissions_converts_to_unauthorized() {
    let error: ApiError = AuthError::InsufficientPermissions {
        key: "abc1***".into(),
        required: Permission::UsersPost,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    match error {
        ApiError::Unauthorized { message, .. } => {
            assert_eq!(message, "Insufficient Permissions")
        }
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
}

#[test]
fn test_ambiguous_credential_converts_to_bad_request() {
    let error: ApiError = AuthError::AmbiguousCredential {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    match error {
        ApiError::BadRequest { message, .. } => {
            assert_eq!(message, "API Key Found in both header and query")
        }
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}

#[test]
fn test_challenge_unavailable_converts_to_upstream_turnstile() {
    let error: ApiError = AuthError::from(ProviderError::status(Provider::Turnstile, 500)).into();

    match error {
        ApiError::Upstream { provider, .. } => assert_eq!(provider, "turnstile"),
        other => panic!("Expected Upstream, got {:?}", other),
    }
}
