//! SendGrid v3 mail send client.

use serde::Serialize;

use crate::error::Result;
use crate::types::NormalizedEmail;

const BASE_URL: &str = "https://api.sendgrid.com";

pub const PROVIDER_NAME: &str = "SendGrid";

#[derive(Debug, Clone)]
pub struct SendGridClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct MailSend<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    content: Vec<Content<'a>>,
    reply_to: Address<'a>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
    subject: &'a str,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a str,
}

impl SendGridClient {
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
        let body = MailSend {
            personalizations: vec![Personalization {
                to: vec![Address { email: &email.to }],
                subject: &email.subject,
            }],
            from: Address { email: &email.from },
            content: vec![Content {
                kind: "text/plain",
                value: &email.text,
            }],
            reply_to: Address {
                email: &email.reply_to,
            },
        };

        let url = format!("{}/v3/mail/send", self.base_url);
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

        // 202 Accepted with an empty body on success.
        tracing::debug!(to = %email.to, "SendGrid accepted message");
        Ok(())
    }
}
