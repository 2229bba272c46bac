use crate::{
    AppState, delete_user, get_user, lookup_discord, lookup_ign, lookup_uuid, post_user,
    record_request_metrics, require_bot_challenge, require_credential, status,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Identity lookups, gated by the bot challenge when enabled
    let mut lookups: Router<AppState> = Router::new()
        .route("/lookup/ign/{ign}", post(lookup_ign))
        .route("/lookup/discord/{discord_id}", post(lookup_discord))
        .route("/lookup/uuid/{uuid}", post(lookup_uuid));
    if state.bot_challenge.is_some() {
        lookups = lookups.route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bot_challenge,
        ));
    }

    // Link management, gated by API key
    let users: Router<AppState> = Router::new()
        .route("/user", get(get_user).post(post_user).delete(delete_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_credential,
        ));

    Router::new()
        .merge(lookups)
        .merge(users)
        .route("/status", get(status::status))
        .fallback(status::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            record_request_metrics,
        ))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
