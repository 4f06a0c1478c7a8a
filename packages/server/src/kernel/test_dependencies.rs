// Mock implementations for testing
//
// Provides mock services that can be injected into the dispatcher for tests.

use anyhow::Result;
use async_trait::async_trait;
use mail_providers::NormalizedEmail;
use std::sync::{Arc, Mutex};

use super::BaseEmailProvider;

// =============================================================================
// Mock Email Provider
// =============================================================================

/// Records every email it is asked to send. Optionally fails every call.
pub struct MockEmailProvider {
    name: &'static str,
    failure: Option<String>,
    sent: Arc<Mutex<Vec<NormalizedEmail>>>,
}

impl MockEmailProvider {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            failure: None,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider whose every send fails with `error`
    pub fn failing(name: &'static str, error: &str) -> Self {
        Self {
            failure: Some(error.to_string()),
            ..Self::new(name)
        }
    }

    /// Get all emails passed to `send`, including failed attempts
    pub fn sent(&self) -> Vec<NormalizedEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseEmailProvider for MockEmailProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn send(&self, email: &NormalizedEmail) -> Result<()> {
        self.sent.lock().unwrap().push(email.clone());

        match &self.failure {
            Some(error) => Err(anyhow::anyhow!("{}", error)),
            None => Ok(()),
        }
    }
}
