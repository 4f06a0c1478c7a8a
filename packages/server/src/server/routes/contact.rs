use axum::{
    body::Bytes,
    extract::Extension,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::contact::{submit_contact_form, ContactError};
use crate::server::app::AppState;

pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const GENERIC_ERROR_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ContactResponse {
    fn ok() -> Self {
        Self {
            success: true,
            message: Some(THANK_YOU_MESSAGE.to_string()),
            error: None,
        }
    }

    fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Which CORS headers a response carries.
#[derive(Clone, Copy)]
enum Cors {
    /// Allow-Origin only
    Origin,
    /// Allow-Origin plus the methods/headers a POST may use
    Post,
    /// Full preflight answer
    Preflight,
}

fn with_cors(mut response: Response, cors: Cors) -> Response {
    let methods = match cors {
        Cors::Origin => None,
        Cors::Post => Some("POST"),
        Cors::Preflight => Some("POST, OPTIONS"),
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    if let Some(methods) = methods {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(methods),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );
    }
    response
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match self {
            ContactError::Validation(reason) => with_cors(
                (
                    StatusCode::BAD_REQUEST,
                    Json(ContactResponse::error(reason.to_string())),
                )
                    .into_response(),
                Cors::Post,
            ),
            // Provider and parse details stay in the server logs.
            ContactError::MalformedRequest(_) | ContactError::Delivery(_) => with_cors(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ContactResponse::error(GENERIC_ERROR_MESSAGE)),
                )
                    .into_response(),
                Cors::Origin,
            ),
        }
    }
}

/// Contact form submission endpoint
///
/// Reads the raw body so that malformed JSON maps to the generic 500 instead
/// of axum's extractor rejection.
pub async fn contact_handler(Extension(state): Extension<AppState>, body: Bytes) -> Response {
    match submit_contact_form(&body, &state.contact, &state.dispatcher).await {
        Ok(_) => with_cors(
            (StatusCode::OK, Json(ContactResponse::ok())).into_response(),
            Cors::Post,
        ),
        Err(e) => {
            match &e {
                ContactError::Validation(reason) => {
                    tracing::info!(reason = %reason, "Contact form rejected")
                }
                _ => tracing::error!(error = %e, "Contact form error"),
            }
            e.into_response()
        }
    }
}

/// CORS preflight for the contact endpoint. Independent of configuration.
pub async fn contact_preflight_handler() -> Response {
    with_cors(StatusCode::OK.into_response(), Cors::Preflight)
}
