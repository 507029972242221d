//! Error types for QueryLens.
//!
//! Display strings double as the user-visible messages the popup renders,
//! so they are written for end users rather than for logs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not on a ChatGPT conversation page")]
    NavigationMismatch,

    #[error("Missing page context: {0}")]
    MissingContext(String),

    #[error("Could not find access token. Please refresh the page.")]
    CredentialNotFound,

    #[error("HTTP {0}")]
    Http(u16),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_message_carries_status() {
        assert_eq!(Error::Http(401).to_string(), "HTTP 401");
    }

    #[test]
    fn test_credential_message_is_user_actionable() {
        assert_eq!(
            Error::CredentialNotFound.to_string(),
            "Could not find access token. Please refresh the page."
        );
    }
}
