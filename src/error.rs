// SPDX-License-Identifier: MIT

//! Application error types shared by the transport layer and the façades.

/// Error type for all backend interactions.
///
/// Every failure is terminal for the user action that triggered it; there is
/// no retry machinery anywhere in the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the request with 401. By the time this variant
    /// reaches a caller the session store has already been cleared and the
    /// session-expired event has fired.
    #[error("Authentication required")]
    Unauthorized,

    /// Any other non-success HTTP status, with whatever message the backend
    /// supplied in its error body.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("request failed"))]
    Api { status: u16, message: Option<String> },

    /// Connection, DNS, or timeout failure before a status was received.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected schema.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Reading or writing the persisted session failed.
    #[error("Session storage error: {0}")]
    Session(#[from] std::io::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Api { status: 404, .. })
    }

    /// Message suitable for inline display on a screen: the backend's own
    /// message when it sent one, otherwise the given fallback.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Api {
                message: Some(msg), ..
            } => msg.clone(),
            ApiError::Unauthorized => "Session expired, please sign in again".to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
