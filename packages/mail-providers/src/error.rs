use thiserror::Error;

pub type Result<T> = std::result::Result<T, MailError>;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-2xx status.
    #[error("{provider} error: {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    /// Transport succeeded but the provider reported a per-message failure.
    #[error("{provider} error: {message}")]
    Rejected {
        provider: &'static str,
        message: String,
    },
}

impl MailError {
    pub fn status(&self) -> Option<u16> {
        match self {
            MailError::Api { status, .. } => Some(*status),
            MailError::Http(e) => e.status().map(|s| s.as_u16()),
            MailError::Rejected { .. } => None,
        }
    }
}
