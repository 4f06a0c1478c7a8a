//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::domains::contact::ContactSettings;
use crate::kernel::EmailDispatcher;
use crate::server::routes::{contact_handler, contact_preflight_handler, health_handler};

/// Shared application state
///
/// Read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub contact: ContactSettings,
    pub dispatcher: Arc<EmailDispatcher>,
}

impl AppState {
    pub fn new(contact: ContactSettings, dispatcher: EmailDispatcher) -> Self {
        Self {
            contact,
            dispatcher: Arc::new(dispatcher),
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contact",
            post(contact_handler)
                .options(contact_preflight_handler)
                // Covers responses axum produces itself (405, 413).
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                )),
        )
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
