use thiserror::Error;

/// Failure taxonomy for the registration API. Everything here is
/// recoverable: validation never reaches the network, rejections carry the
/// server's message, and transport failures surface a generic retry hint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx status, or a 2xx body with `success: false`.
    #[error("registration API rejected the request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("registration {id} was not found")]
    NotFound { id: String },

    #[error("request to the registration API timed out")]
    Timeout,

    #[error("could not reach the registration API: {0}")]
    Network(String),

    #[error("registration API returned an unreadable response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The short message shown to the person at the terminal, matching the
    /// site's alert copy: server rejections verbatim, everything transport-
    /// shaped as a generic connectivity line.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Rejected { status, .. } => {
                format!("Registration failed (HTTP {status}). Please try again.")
            }
            ApiError::NotFound { id } => format!("No registration found for {id}."),
            ApiError::Timeout | ApiError::Network(_) => {
                "Could not reach the registration server. Check your connection and try again."
                    .to_string()
            }
            ApiError::Decode(_) => {
                "The registration server sent an unexpected response. Please try again."
                    .to_string()
            }
        }
    }

    /// Transport-level failures, as opposed to deliberate server rejections.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Timeout | ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
