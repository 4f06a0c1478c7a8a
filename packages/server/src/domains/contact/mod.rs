//! Contact domain - relays portfolio contact form submissions by email
//!
//! Flow:
//!   POST /api/contact → parse → validate → build notification → dispatch
//!
//! Nothing is persisted; every submission lives for one request.

pub mod actions;
pub mod email;
pub mod models;
pub mod validation;

pub use actions::{submit_contact_form, ContactError};
pub use email::build_notification_email;
pub use models::{ContactForm, ContactMessage, ContactSettings};
pub use validation::{is_valid_email, validate_contact_form, ValidationError};
