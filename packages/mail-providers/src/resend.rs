//! Resend emails API client.

use serde::Serialize;

use crate::error::Result;
use crate::types::NormalizedEmail;

const BASE_URL: &str = "https://api.resend.com";

pub const PROVIDER_NAME: &str = "Resend";

#[derive(Debug, Clone)]
pub struct ResendClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct SendEmail<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    text: &'a str,
    reply_to: Vec<&'a str>,
}

impl ResendClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(BASE_URL.to_string(), api_key)
    }

    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    pub async fn send(&self, email: &NormalizedEmail) -> Result<()> {
        let body = SendEmail {
            from: &email.from,
            to: vec![&email.to],
            subject: &email.subject,
            text: &email.text,
            reply_to: vec![&email.reply_to],
        };

        let url = format!("{}/emails", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(crate::api_error(PROVIDER_NAME, resp).await);
        }

        tracing::debug!(to = %email.to, "Resend accepted message");
        Ok(())
    }
}
