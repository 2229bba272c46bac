use crate::{ApiError, ApiResult, AppState};

use vu_auth::client_ip;

use std::net::SocketAddr;

use axum::{
    body::{Body, to_bytes},
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use log::debug;

const FORWARDED_FOR: &str = "x-forwarded-for";
/// Lookup bodies only ever carry the challenge token
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Validates the `cf-turnstile-response` body token against the challenge
/// service before the lookup handler runs. Passes through when the gate
/// is disabled.
pub async fn require_bot_challenge(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let Some(gate) = state.bot_challenge.as_ref() else {
        return Ok(next.run(request).await);
    };

    let forwarded_for = request
        .headers()
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok());
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let remote_ip = client_ip(forwarded_for, peer);

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        debug!("Could not buffer lookup body: {}", e);
        ApiError::bad_request("Bot challenge token missing")
    })?;

    if let Err(e) = gate.check(&bytes, remote_ip.as_deref()).await {
        state.metrics.gate_rejected("bot_challenge");
        return Err(e.into());
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
