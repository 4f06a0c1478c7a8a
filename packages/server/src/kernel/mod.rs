//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod email_dispatcher;
pub mod test_dependencies;
pub mod traits;

pub use deps::{MailgunAdapter, MailjetAdapter, ProviderCredentials, ResendAdapter, SendGridAdapter};
pub use email_dispatcher::{EmailDispatcher, SendOutcome};
pub use test_dependencies::MockEmailProvider;
pub use traits::*;
