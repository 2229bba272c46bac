//! Lookup REST API handlers
//!
//! Each resolves one identifier to the full cross-platform identity.

use crate::{ApiResult, AppState, LookupResponse};

use vu_core::CanonicalIdentity;
use vu_identity::IdentityErrorResult;

use axum::{
    Json,
    extract::{Path, State},
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /lookup/ign/{ign}
pub async fn lookup_ign(
    State(state): State<AppState>,
    Path(ign): Path<String>,
) -> ApiResult<Json<LookupResponse>> {
    let resolved = state.resolver.resolve_by_ign(&ign).await;
    respond(&state, "ign", resolved)
}

/// POST /lookup/discord/{discord_id}
pub async fn lookup_discord(
    State(state): State<AppState>,
    Path(discord_id): Path<String>,
) -> ApiResult<Json<LookupResponse>> {
    let resolved = state.resolver.resolve_by_discord_id(&discord_id).await;
    respond(&state, "discord", resolved)
}

/// POST /lookup/uuid/{uuid}
pub async fn lookup_uuid(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<LookupResponse>> {
    let resolved = state.resolver.resolve_by_uuid(&uuid).await;
    respond(&state, "uuid", resolved)
}

// =============================================================================
// Helpers
// =============================================================================

fn respond(
    state: &AppState,
    kind: &str,
    resolved: IdentityErrorResult<CanonicalIdentity>,
) -> ApiResult<Json<LookupResponse>> {
    match resolved {
        Ok(identity) => {
            state.metrics.lookup(kind, "ok");
            Ok(Json(LookupResponse { data: identity }))
        }
        Err(e) => {
            state.metrics.lookup(kind, "failed");
            if let Some(provider) = e.provider() {
                state.metrics.upstream_error(provider.as_str());
            }
            Err(e.into())
        }
    }
}
