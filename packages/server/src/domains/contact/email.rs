//! Turns a validated submission into the outbound notification.

use mail_providers::NormalizedEmail;

use crate::domains::contact::models::{ContactMessage, ContactSettings};

pub const DEFAULT_SUBJECT: &str = "New Portfolio Contact Message";

pub fn notification_subject(message: &ContactMessage) -> String {
    match &message.subject {
        Some(subject) => format!("Portfolio Contact: {}", subject),
        None => DEFAULT_SUBJECT.to_string(),
    }
}

/// Plain-text body sent to the site owner.
pub fn notification_body(message: &ContactMessage, site_name: &str) -> String {
    format!(
        "New contact form submission:\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Subject: {subject}\n\
         \n\
         Message:\n\
         {body}\n\
         \n\
         ---\n\
         Sent from {site_name} portfolio contact form",
        name = message.name,
        email = message.email,
        subject = message.subject.as_deref().unwrap_or("No subject"),
        body = message.message,
    )
}

/// Build the owner notification. Replies go straight to the submitter.
pub fn build_notification_email(
    message: &ContactMessage,
    settings: &ContactSettings,
) -> NormalizedEmail {
    NormalizedEmail {
        to: settings.recipient.clone(),
        from: settings.sender.clone(),
        from_name: Some(settings.sender_name.clone()),
        subject: notification_subject(message),
        text: notification_body(message, &settings.site_name),
        reply_to: message.email.clone(),
    }
}
