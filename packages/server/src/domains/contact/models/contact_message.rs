use serde_json::{Map, Value};

/// Contact form body as submitted by the browser.
///
/// Every field is optional on the wire; presence is enforced by validation so
/// that a missing field yields a 400 rather than a parse failure.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Read the form fields out of a parsed JSON object.
    ///
    /// Browser-style truthiness: `null`, `false`, `0` and `""` count as absent.
    /// Any other value is kept in its string form.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        Self {
            name: field_text(object.get("name")),
            email: field_text(object.get("email")),
            subject: field_text(object.get("subject")),
            message: field_text(object.get("message")),
        }
    }
}

fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// A validated contact submission. Only constructed by
/// [`validate_contact_form`](crate::domains::contact::validate_contact_form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    /// `None` when the submitter left the subject blank
    pub subject: Option<String>,
    pub message: String,
}
