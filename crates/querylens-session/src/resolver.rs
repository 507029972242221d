//! Credential resolver — three token sources tried in strict priority order.

use reqwest::Client;
use tracing::debug;

use querylens_core::{Error, Result};

use crate::types::{AccessToken, ImportedCookie, PageContext, ACCESS_TOKEN_KEY};

/// Resolve a bearer token from the page snapshot.
///
/// Sources in order, stopping at the first non-empty token: the
/// session-introspection endpoint, the embedded page data, then the two
/// storage scopes. Best effort throughout — no retries, and every failure
/// in an earlier source falls through to the next one.
pub async fn resolve_access_token(
    client: &Client,
    base_url: &str,
    context: &PageContext,
) -> Result<AccessToken> {
    if let Some(token) = token_from_session_endpoint(client, base_url, &context.cookies).await {
        return Ok(token);
    }
    if let Some(token) = token_from_page_data(context) {
        return Ok(token);
    }
    if let Some(token) = token_from_storage(context) {
        return Ok(token);
    }
    Err(Error::CredentialNotFound)
}

/// Source 1: session-introspection endpoint, with ambient cookies included.
/// Every failure mode (network, status, parse, missing or empty field)
/// collapses to `None` so the next source runs.
async fn token_from_session_endpoint(
    client: &Client,
    base_url: &str,
    cookies: &[ImportedCookie],
) -> Option<AccessToken> {
    let mut request = client.get(format!("{}/api/auth/session", base_url));
    if let Some(header) = cookie_header(cookies) {
        request = request.header("Cookie", header);
    }

    let response = match request.send().await {
        Ok(r) => r,
        Err(e) => {
            debug!("Session endpoint unavailable: {}", e);
            return None;
        }
    };

    if !response.status().is_success() {
        debug!("Session endpoint returned {}", response.status());
        return None;
    }

    let body: serde_json::Value = response.json().await.ok()?;
    body.get("accessToken")
        .and_then(|t| t.as_str())
        .and_then(|t| AccessToken::new(t))
}

/// Source 2: the embedded page-data object, `props.pageProps.accessToken`.
fn token_from_page_data(context: &PageContext) -> Option<AccessToken> {
    context
        .page_data
        .as_ref()?
        .pointer("/props/pageProps/accessToken")?
        .as_str()
        .and_then(|t| AccessToken::new(t))
}

/// Source 3: storage scopes, durable before session-scoped.
fn token_from_storage(context: &PageContext) -> Option<AccessToken> {
    context
        .local_storage
        .get(ACCESS_TOKEN_KEY)
        .or_else(|| context.session_storage.get(ACCESS_TOKEN_KEY))
        .and_then(|t| AccessToken::new(t.as_str()))
}

/// Assemble a `Cookie` header from the imported cookies.
pub(crate) fn cookie_header(cookies: &[ImportedCookie]) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    Some(
        cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// One-shot HTTP server returning a fixed response body as JSON.
    async fn spawn_session_endpoint(body: String) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });
        format!("http://{}", addr)
    }

    fn context_with_page_data(token: &str) -> PageContext {
        PageContext {
            page_data: Some(json!({
                "props": { "pageProps": { "accessToken": token } }
            })),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_session_endpoint_wins_when_available() {
        let base = spawn_session_endpoint(r#"{"accessToken":"from-session"}"#.to_string()).await;
        let client = Client::new();
        let context = context_with_page_data("from-page-data");

        let token = resolve_access_token(&client, &base, &context).await.unwrap();
        assert_eq!(token.as_str(), "from-session");
    }

    #[tokio::test]
    async fn test_failing_endpoint_falls_through_to_page_data() {
        // Nothing listens on port 1; the connection error is swallowed.
        let client = Client::new();
        let context = context_with_page_data("from-page-data");

        let token = resolve_access_token(&client, "http://127.0.0.1:1", &context)
            .await
            .unwrap();
        assert_eq!(token.as_str(), "from-page-data");
    }

    #[tokio::test]
    async fn test_empty_session_token_falls_through() {
        let base = spawn_session_endpoint(r#"{"accessToken":""}"#.to_string()).await;
        let client = Client::new();
        let context = context_with_page_data("from-page-data");

        let token = resolve_access_token(&client, &base, &context).await.unwrap();
        assert_eq!(token.as_str(), "from-page-data");
    }

    #[tokio::test]
    async fn test_all_sources_exhausted() {
        let client = Client::new();
        let err = resolve_access_token(&client, "http://127.0.0.1:1", &PageContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CredentialNotFound));
    }

    #[test]
    fn test_page_data_requires_expected_shape() {
        let context = PageContext {
            page_data: Some(json!({ "props": { "accessToken": "wrong-level" } })),
            ..Default::default()
        };
        assert!(token_from_page_data(&context).is_none());
    }

    #[test]
    fn test_storage_prefers_durable_scope() {
        let mut context = PageContext::default();
        context
            .local_storage
            .insert(ACCESS_TOKEN_KEY.to_string(), "durable".to_string());
        context
            .session_storage
            .insert(ACCESS_TOKEN_KEY.to_string(), "session".to_string());
        assert_eq!(token_from_storage(&context).unwrap().as_str(), "durable");
    }

    #[test]
    fn test_storage_session_scope_as_fallback() {
        let mut context = PageContext::default();
        context
            .session_storage
            .insert(ACCESS_TOKEN_KEY.to_string(), "session".to_string());
        assert_eq!(token_from_storage(&context).unwrap().as_str(), "session");
    }

    #[test]
    fn test_cookie_header_joins_pairs() {
        let cookies = vec![
            ImportedCookie {
                name: "a".into(),
                value: "1".into(),
                domain: ".chatgpt.com".into(),
            },
            ImportedCookie {
                name: "b".into(),
                value: "2".into(),
                domain: ".chatgpt.com".into(),
            },
        ];
        assert_eq!(cookie_header(&cookies).unwrap(), "a=1; b=2");
        assert!(cookie_header(&[]).is_none());
    }
}
