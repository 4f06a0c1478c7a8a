//! Mailgun messages API client (multipart form body).

use reqwest::multipart::Form;

use crate::error::Result;
use crate::types::NormalizedEmail;

const BASE_URL: &str = "https://api.mailgun.net";

pub const PROVIDER_NAME: &str = "Mailgun";

#[derive(Debug, Clone)]
pub struct MailgunClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    domain: String,
}

impl MailgunClient {
    pub fn new(api_key: String, domain: String) -> Self {
        Self::with_base_url(BASE_URL.to_string(), api_key, domain)
    }

    pub fn with_base_url(base_url: String, api_key: String, domain: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            domain,
        }
    }

    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    pub async fn send(&self, email: &NormalizedEmail) -> Result<()> {
        let form = Form::new()
            .text("from", email.from.clone())
            .text("to", email.to.clone())
            .text("subject", email.subject.clone())
            .text("text", email.text.clone())
            .text("h:Reply-To", email.reply_to.clone());

        let url = format!("{}/v3/{}/messages", self.base_url, self.domain);
        let resp = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.api_key))
            .multipart(form)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(crate::api_error(PROVIDER_NAME, resp).await);
        }

        tracing::debug!(to = %email.to, domain = %self.domain, "Mailgun accepted message");
        Ok(())
    }
}
