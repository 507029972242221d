//! Session context types — matching the TypeScript popup's snapshot payload.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Storage key both web-storage scopes use for the token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Snapshot of the active page's session context, posted by the popup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageContext {
    /// Active tab URL.
    #[serde(default)]
    pub url: String,
    /// Cookies imported from the page's origin.
    #[serde(default)]
    pub cookies: Vec<ImportedCookie>,
    /// Page-data object the site's framework injects into the document.
    #[serde(default, rename = "pageData")]
    pub page_data: Option<Value>,
    /// Durable key-value storage scope.
    #[serde(default, rename = "localStorage")]
    pub local_storage: HashMap<String, String>,
    /// Session-scoped key-value storage scope.
    #[serde(default, rename = "sessionStorage")]
    pub session_storage: HashMap<String, String>,
}

/// Cookie from the companion extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportedCookie {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub domain: String,
}

/// Opaque bearer token. Non-empty by construction; resolved fresh on every
/// request and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
