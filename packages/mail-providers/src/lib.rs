//! Minimal transactional email clients.
//!
//! One client per provider (Mailjet, SendGrid, Mailgun, Resend). Every client
//! takes the same provider-agnostic [`NormalizedEmail`] and performs exactly one
//! HTTP request per `send` call. There are no retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use mail_providers::{NormalizedEmail, SendGridClient};
//!
//! let client = SendGridClient::new("SG.xxxxx".into());
//! client.send(&email).await?;
//! ```

pub mod error;
pub mod mailgun;
pub mod mailjet;
pub mod resend;
pub mod sendgrid;
pub mod types;

pub use error::{MailError, Result};
pub use mailgun::MailgunClient;
pub use mailjet::MailjetClient;
pub use resend::ResendClient;
pub use sendgrid::SendGridClient;
pub use types::NormalizedEmail;

/// Read the body of a non-2xx response and turn it into an API error.
pub(crate) async fn api_error(provider: &'static str, response: reqwest::Response) -> MailError {
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    tracing::warn!(provider, status = %status, "Email provider returned an error");
    MailError::Api {
        provider,
        status: status.as_u16(),
        message,
    }
}
