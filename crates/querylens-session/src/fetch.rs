//! Authenticated conversation fetch — one GET, no retry.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use querylens_core::{Error, Result};
use querylens_extract::ConversationId;

use crate::resolver::cookie_header;
use crate::types::{AccessToken, ImportedCookie};

/// Fetch a conversation's backend record.
///
/// Single attempt. A non-2xx status surfaces as `Error::Http` with the
/// numeric code; network and body-decoding failures surface as
/// `Error::Fetch` with the underlying message.
pub async fn fetch_conversation(
    client: &Client,
    base_url: &str,
    id: &ConversationId,
    token: &AccessToken,
    cookies: &[ImportedCookie],
) -> Result<Value> {
    let url = format!("{}/backend-api/conversation/{}", base_url, id);
    debug!("Fetching conversation {}", id);

    let mut request = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", token.as_str()))
        .header("Content-Type", "application/json");
    if let Some(header) = cookie_header(cookies) {
        request = request.header("Cookie", header);
    }

    let response = match request.send().await {
        Ok(r) => r,
        Err(e) => return Err(Error::Fetch(e.to_string())),
    };

    if !response.status().is_success() {
        return Err(Error::Http(response.status().as_u16()));
    }

    response
        .json()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))
}
