pub mod api;
pub mod app_state;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod routes;
pub mod status;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    lookup::{
        lookup::{lookup_discord, lookup_ign, lookup_uuid},
        lookup_response::LookupResponse,
    },
    message_response::MessageResponse,
    middleware::{
        bot_challenge::require_bot_challenge, credential::{INVALID_QUERY_MESSAGE, require_credential},
        request_metrics::record_request_metrics,
    },
    user::{
        user::{delete_user, get_user, post_user},
        user_query::UserQuery,
        user_request::UserRequest,
        user_response::UserResponse,
    },
};
pub use app_state::AppState;
pub use metrics::Metrics;
pub use routes::build_router;
