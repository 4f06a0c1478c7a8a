// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
//
// Naming convention: Base* for trait names (e.g., BaseEmailProvider)

use anyhow::Result;
use async_trait::async_trait;
use mail_providers::NormalizedEmail;

// =============================================================================
// Email Provider Trait (Infrastructure - transactional email)
// =============================================================================

#[async_trait]
pub trait BaseEmailProvider: Send + Sync {
    /// Provider name reported on success (e.g. "SendGrid")
    fn name(&self) -> &'static str;

    /// Make exactly one delivery attempt
    async fn send(&self, email: &NormalizedEmail) -> Result<()>;
}
