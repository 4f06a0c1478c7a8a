/// Provider-agnostic outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEmail {
    pub to: String,
    pub from: String,
    /// Display name for the sender, used by providers that have a slot for it.
    pub from_name: Option<String>,
    pub subject: String,
    pub text: String,
    pub reply_to: String,
}
