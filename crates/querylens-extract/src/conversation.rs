//! Conversation identity — resolving a conversation ID from a page URL.

use once_cell::sync::Lazy;
use regex::Regex;

use querylens_core::{Error, Result};

/// URL shape of a ChatGPT conversation page.
static CONVERSATION_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"chatgpt\.com/c/([a-f0-9-]+)").expect("valid pattern"));

/// Identifier embedded in the page URL naming the chat session to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationId(String);

impl ConversationId {
    /// Resolve a conversation ID from the active tab's URL.
    ///
    /// An empty URL means no tab context was available at all. A non-empty
    /// URL that does not match the conversation shape means the user is not
    /// on a conversation page; no partial ID is ever produced.
    pub fn from_url(url: &str) -> Result<Self> {
        if url.is_empty() {
            return Err(Error::MissingContext("no active tab URL".to_string()));
        }
        let captures = CONVERSATION_URL
            .captures(url)
            .ok_or(Error::NavigationMismatch)?;
        Ok(Self(captures[1].to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
