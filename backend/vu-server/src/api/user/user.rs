//! Link REST API handlers
//!
//! Behind the credential gate; see [`crate::require_credential`].

use crate::{
    ApiError, ApiResult, AppState, INVALID_QUERY_MESSAGE, MessageResponse, UserQuery,
    UserRequest, UserResponse,
};

use vu_identity::{LinkKey, VerificationOutcome};

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use log::{debug, info};

const INVALID_JSON_MESSAGE: &str = "Invalid JSON";
const MISMATCH_MESSAGE: &str = "Discord ID and UUID do not match";
const ADDED_MESSAGE: &str = "User successfully added";
const DELETED_MESSAGE: &str = "User successfully deleted";

// =============================================================================
// Handlers
// =============================================================================

/// GET /user?uuid= | ?discordId=
pub async fn get_user(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Query(query) = query.map_err(reject_query)?;
    let key = LinkKey::from_query(query.uuid.as_deref(), query.discord_id.as_deref())?;
    let links = state.database.links();

    let record = match &key {
        LinkKey::Uuid(uuid) => links.find_by_uuid(uuid).await?,
        LinkKey::DiscordId(discord_id) => links.find_by_discord_id(*discord_id).await?,
    };

    let record = record.ok_or_else(|| {
        ApiError::bad_request(match key {
            LinkKey::Uuid(_) => "UUID not found within our database.",
            LinkKey::DiscordId(_) => "Discord ID not found within our database.",
        })
    })?;

    Ok(Json(record.into()))
}

/// POST /user
///
/// Stores the link only when Hypixel and Discord agree on the tag.
pub async fn post_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(request) = payload.map_err(|e| {
        debug!("Rejected /user body: {}", e);
        ApiError::bad_request(INVALID_JSON_MESSAGE)
    })?;

    let outcome = match state
        .engine
        .verify_and_link(&request.uuid, &request.discord_id)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            state.metrics.verification("failed");
            if let Some(provider) = e.provider() {
                state.metrics.upstream_error(provider.as_str());
            }
            return Err(e.into());
        }
    };

    match outcome {
        VerificationOutcome::Linked(record) => {
            state.metrics.verification("linked");
            info!("Linked {} <-> {}", record.uuid, record.discord_id);
            Ok((StatusCode::OK, Json(MessageResponse::new(ADDED_MESSAGE))))
        }
        VerificationOutcome::Rejected { .. } => {
            state.metrics.verification("rejected");
            let status = if state.api_config.legacy_mismatch_status {
                StatusCode::ACCEPTED
            } else {
                StatusCode::CONFLICT
            };
            Ok((status, Json(MessageResponse::new(MISMATCH_MESSAGE))))
        }
    }
}

/// DELETE /user?uuid= | ?discordId=
///
/// Answers 200 even when nothing was stored under the key.
pub async fn delete_user(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(query) = query.map_err(reject_query)?;
    let key = LinkKey::from_query(query.uuid.as_deref(), query.discord_id.as_deref())?;
    let links = state.database.links();

    let removed = match &key {
        LinkKey::Uuid(uuid) => links.delete_by_uuid(uuid).await?,
        LinkKey::DiscordId(discord_id) => links.delete_by_discord_id(*discord_id).await?,
    };

    if removed == 0 {
        info!("Delete for {:?} removed nothing", key);
    } else {
        info!("Deleted {} link(s) for {:?}", removed, key);
    }

    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}

// =============================================================================
// Helpers
// =============================================================================

fn reject_query(e: QueryRejection) -> ApiError {
    debug!("Rejected /user query: {}", e);
    ApiError::bad_request(INVALID_QUERY_MESSAGE)
}
