use crate::ApiError;

use std::panic::Location;

use axum::Json;
use error_location::ErrorLocation;
use serde_json::{Value, json};

const ENDPOINT_NOT_FOUND: &str = "Endpoint Not Found";

/// GET /status
pub async fn status() -> Json<Value> {
    Json(json!({
        "message": "OK",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound {
        message: ENDPOINT_NOT_FOUND.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
