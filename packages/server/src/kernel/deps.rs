//! Email provider adapters and credential-driven selection.
//!
//! Each adapter wraps a `mail_providers` client and implements
//! `BaseEmailProvider` so the dispatcher can be tested with mocks.

use anyhow::Result;
use async_trait::async_trait;
use mail_providers::{MailgunClient, MailjetClient, NormalizedEmail, ResendClient, SendGridClient};
use std::sync::Arc;

use crate::kernel::BaseEmailProvider;

// =============================================================================
// Provider Adapters (implement BaseEmailProvider)
// =============================================================================

/// Wrapper around MailjetClient that implements BaseEmailProvider
pub struct MailjetAdapter(pub MailjetClient);

#[async_trait]
impl BaseEmailProvider for MailjetAdapter {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    async fn send(&self, email: &NormalizedEmail) -> Result<()> {
        self.0.send(email).await.map_err(|e| anyhow::anyhow!("{}", e))
    }
}

/// Wrapper around SendGridClient that implements BaseEmailProvider
pub struct SendGridAdapter(pub SendGridClient);

#[async_trait]
impl BaseEmailProvider for SendGridAdapter {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    async fn send(&self, email: &NormalizedEmail) -> Result<()> {
        self.0.send(email).await.map_err(|e| anyhow::anyhow!("{}", e))
    }
}

/// Wrapper around MailgunClient that implements BaseEmailProvider
pub struct MailgunAdapter(pub MailgunClient);

#[async_trait]
impl BaseEmailProvider for MailgunAdapter {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    async fn send(&self, email: &NormalizedEmail) -> Result<()> {
        self.0.send(email).await.map_err(|e| anyhow::anyhow!("{}", e))
    }
}

/// Wrapper around ResendClient that implements BaseEmailProvider
pub struct ResendAdapter(pub ResendClient);

#[async_trait]
impl BaseEmailProvider for ResendAdapter {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    async fn send(&self, email: &NormalizedEmail) -> Result<()> {
        self.0.send(email).await.map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ProviderCredentials
// =============================================================================

/// Provider secrets supplied by the environment.
///
/// A provider is eligible only when every value it needs is present. Nothing
/// is verified against the provider until a send is attempted.
#[derive(Clone, Default)]
pub struct ProviderCredentials {
    pub mailjet_api_key: Option<String>,
    pub mailjet_secret_key: Option<String>,
    pub sendgrid_api_key: Option<String>,
    pub mailgun_api_key: Option<String>,
    pub mailgun_domain: Option<String>,
    pub resend_api_key: Option<String>,
}

impl ProviderCredentials {
    /// Adapters for every fully configured provider, highest priority first:
    /// Mailjet, SendGrid, Mailgun, Resend.
    pub fn configured_providers(&self) -> Vec<Arc<dyn BaseEmailProvider>> {
        let mut providers: Vec<Arc<dyn BaseEmailProvider>> = Vec::new();

        if let (Some(key), Some(secret)) = (&self.mailjet_api_key, &self.mailjet_secret_key) {
            providers.push(Arc::new(MailjetAdapter(MailjetClient::new(
                key.clone(),
                secret.clone(),
            ))));
        }

        if let Some(key) = &self.sendgrid_api_key {
            providers.push(Arc::new(SendGridAdapter(SendGridClient::new(key.clone()))));
        }

        if let (Some(key), Some(domain)) = (&self.mailgun_api_key, &self.mailgun_domain) {
            providers.push(Arc::new(MailgunAdapter(MailgunClient::new(
                key.clone(),
                domain.clone(),
            ))));
        }

        if let Some(key) = &self.resend_api_key {
            providers.push(Arc::new(ResendAdapter(ResendClient::new(key.clone()))));
        }

        providers
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let set = |v: &Option<String>| if v.is_some() { "<set>" } else { "<unset>" };
        f.debug_struct("ProviderCredentials")
            .field("mailjet_api_key", &set(&self.mailjet_api_key))
            .field("mailjet_secret_key", &set(&self.mailjet_secret_key))
            .field("sendgrid_api_key", &set(&self.sendgrid_api_key))
            .field("mailgun_api_key", &set(&self.mailgun_api_key))
            .field("mailgun_domain", &self.mailgun_domain)
            .field("resend_api_key", &set(&self.resend_api_key))
            .finish()
    }
}
