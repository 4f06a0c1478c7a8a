//! Picks one email provider and turns its result into a `SendOutcome`.

use std::sync::Arc;

use mail_providers::NormalizedEmail;
use tracing::{error, info, warn};

use crate::kernel::{BaseEmailProvider, ProviderCredentials};

/// Result of one dispatch. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent { service: String },
    /// No provider has a complete credential set. Counts as success so that
    /// local development works without secrets.
    NotConfigured,
    Failed { error: String },
}

impl SendOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, SendOutcome::Failed { .. })
    }
}

/// Sends through the highest-priority configured provider.
///
/// Selection happens once, before sending. A failed send is reported as-is and
/// never retried on a lower-priority provider.
pub struct EmailDispatcher {
    providers: Vec<Arc<dyn BaseEmailProvider>>,
}

impl EmailDispatcher {
    /// `providers` must already be in priority order.
    pub fn new(providers: Vec<Arc<dyn BaseEmailProvider>>) -> Self {
        Self { providers }
    }

    pub fn from_credentials(credentials: &ProviderCredentials) -> Self {
        Self::new(credentials.configured_providers())
    }

    /// Name of the provider the next dispatch would use.
    pub fn selected_provider(&self) -> Option<&'static str> {
        self.providers.first().map(|p| p.name())
    }

    pub async fn dispatch(&self, email: &NormalizedEmail) -> SendOutcome {
        let Some(provider) = self.providers.first() else {
            warn!("No email service configured - check environment variables");
            info!(
                to = %email.to,
                reply_to = %email.reply_to,
                subject = %email.subject,
                text = %email.text,
                "Email would be sent"
            );
            return SendOutcome::NotConfigured;
        };

        match provider.send(email).await {
            Ok(()) => {
                info!(service = provider.name(), "Contact email sent");
                SendOutcome::Sent {
                    service: provider.name().to_string(),
                }
            }
            Err(e) => {
                error!(service = provider.name(), error = %e, "Email sending error");
                SendOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}
