use crate::{ApiError, ApiResult, AppState};

use axum::{
    extract::{Query, Request, State, rejection::QueryRejection},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use log::debug;
use serde::Deserialize;

pub const INVALID_QUERY_MESSAGE: &str = "Invalid query string";

#[derive(Debug, Default, Deserialize)]
pub struct CredentialQuery {
    pub key: Option<String>,
}

/// Requires an API key (header or `key` query, never both) holding the
/// capability for the request method.
pub async fn require_credential(
    State(state): State<AppState>,
    query: Result<Query<CredentialQuery>, QueryRejection>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(|e| {
        debug!("Rejected credential query: {}", e);
        ApiError::bad_request(INVALID_QUERY_MESSAGE)
    })?;

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let method = request.method().clone();

    if let Err(e) = state
        .credential_gate
        .authorize(header.as_deref(), query.key.as_deref(), &method)
        .await
    {
        state.metrics.gate_rejected("credential");
        return Err(e.into());
    }

    Ok(next.run(request).await)
}
