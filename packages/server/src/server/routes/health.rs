use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    /// Provider that would deliver the next message, `null` when none is configured
    email_provider: Option<String>,
}

/// Health check endpoint
///
/// Always 200 while the process is serving. Reports which email provider is
/// active so a missing credential set is visible without sending a message.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            email_provider: state.dispatcher.selected_provider().map(str::to_string),
        }),
    )
}
