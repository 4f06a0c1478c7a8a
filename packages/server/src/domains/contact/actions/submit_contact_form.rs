//! Submit contact form action

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::info;

use crate::domains::contact::email::build_notification_email;
use crate::domains::contact::models::{ContactForm, ContactSettings};
use crate::domains::contact::validation::{validate_contact_form, ValidationError};
use crate::kernel::{EmailDispatcher, SendOutcome};

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Malformed request body: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to send email: {0}")]
    Delivery(String),
}

/// Parse, validate and relay one contact submission.
///
/// Returns the successful `SendOutcome` (`Sent` or `NotConfigured`).
pub async fn submit_contact_form(
    body: &[u8],
    settings: &ContactSettings,
    dispatcher: &EmailDispatcher,
) -> Result<SendOutcome, ContactError> {
    // Only a JSON object is a form; duplicate keys keep the last value.
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    let message = validate_contact_form(ContactForm::from_json_object(&object))?;

    let email = build_notification_email(&message, settings);

    match dispatcher.dispatch(&email).await {
        SendOutcome::Failed { error } => Err(ContactError::Delivery(error)),
        outcome => {
            info!(reply_to = %message.email, ?outcome, "Contact form submitted");
            Ok(outcome)
        }
    }
}
