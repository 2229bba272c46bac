use crate::AppState;

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use log::debug;

/// Records latency for every request
pub async fn record_request_metrics(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    state.metrics.request_latency(elapsed);
    debug!(
        "{} {} -> {} in {:?}",
        method,
        path,
        response.status(),
        elapsed
    );

    response
}
