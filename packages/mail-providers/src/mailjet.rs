//! Mailjet Send API v3.1 client.
//!
//! Mailjet is the one provider that can answer 2xx while still refusing a
//! message, so the per-message `Status` in the response envelope is checked
//! after the transport-level status.

use serde::{Deserialize, Serialize};

use crate::error::{MailError, Result};
use crate::types::NormalizedEmail;

const BASE_URL: &str = "https://api.mailjet.com";

pub const PROVIDER_NAME: &str = "Mailjet";

#[derive(Debug, Clone)]
pub struct MailjetClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    secret_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendRequest<'a> {
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Message<'a> {
    from: Address<'a>,
    to: Vec<Address<'a>>,
    subject: &'a str,
    text_part: &'a str,
    reply_to: Address<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl<'a> Address<'a> {
    fn email(email: &'a str) -> Self {
        Self { email, name: None }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SendResponse {
    #[serde(default)]
    messages: Vec<MessageResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MessageResult {
    #[serde(default)]
    status: String,
    #[serde(default)]
    errors: Vec<MessageError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MessageError {
    #[serde(default)]
    error_message: String,
}

impl MailjetClient {
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self::with_base_url(BASE_URL.to_string(), api_key, secret_key)
    }

    pub fn with_base_url(base_url: String, api_key: String, secret_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            secret_key,
        }
    }

    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    pub async fn send(&self, email: &NormalizedEmail) -> Result<()> {
        let body = SendRequest {
            messages: vec![Message {
                from: Address {
                    email: &email.from,
                    name: email.from_name.as_deref(),
                },
                to: vec![Address::email(&email.to)],
                subject: &email.subject,
                text_part: &email.text,
                reply_to: Address::email(&email.reply_to),
            }],
        };

        let url = format!("{}/v3.1/send", self.base_url);
        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.api_key, Some(&self.secret_key))
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(crate::api_error(PROVIDER_NAME, resp).await);
        }

        let result: SendResponse = resp.json().await?;
        if let Some(first) = result.messages.first() {
            if first.status == "error" {
                let message = first
                    .errors
                    .first()
                    .map(|e| e.error_message.clone())
                    .unwrap_or_else(|| "message rejected".to_string());
                return Err(MailError::Rejected {
                    provider: PROVIDER_NAME,
                    message,
                });
            }
        }

        tracing::debug!(to = %email.to, "Mailjet accepted message");
        Ok(())
    }
}
