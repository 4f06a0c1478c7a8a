const DEFAULT_CONTACT_ADDRESS: &str = "noreply@canners.xyz";
const DEFAULT_SENDER_NAME: &str = "Portfolio Contact Form";
const DEFAULT_SITE_NAME: &str = "canners";

/// Fixed addressing for contact notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    /// Mailbox that receives every submission
    pub recipient: String,
    /// Envelope sender; must be a verified sender with the active provider
    pub sender: String,
    pub sender_name: String,
    /// Used in the notification footer
    pub site_name: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_CONTACT_ADDRESS.to_string(),
            sender: DEFAULT_CONTACT_ADDRESS.to_string(),
            sender_name: DEFAULT_SENDER_NAME.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }
}
