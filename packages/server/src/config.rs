use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::domains::contact::ContactSettings;
use crate::kernel::ProviderCredentials;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub contact: ContactSettings,
    pub providers: ProviderCredentials,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = ContactSettings::default();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            contact: ContactSettings {
                recipient: optional_var("CONTACT_RECIPIENT").unwrap_or(defaults.recipient),
                sender: optional_var("CONTACT_SENDER").unwrap_or(defaults.sender),
                sender_name: optional_var("CONTACT_SENDER_NAME").unwrap_or(defaults.sender_name),
                site_name: optional_var("CONTACT_SITE_NAME").unwrap_or(defaults.site_name),
            },
            providers: ProviderCredentials {
                mailjet_api_key: optional_var("MAILJET_API_KEY"),
                mailjet_secret_key: optional_var("MAILJET_SECRET_KEY"),
                sendgrid_api_key: optional_var("SENDGRID_API_KEY"),
                mailgun_api_key: optional_var("MAILGUN_API_KEY"),
                mailgun_domain: optional_var("MAILGUN_DOMAIN"),
                resend_api_key: optional_var("RESEND_API_KEY"),
            },
        })
    }
}

/// Read an optional variable. Unset and empty values are both treated as absent.
fn optional_var(key: &str) -> Option<String> {
    non_empty(env::var(key).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
