//! Query-extractor routes — the fetch+extract pipeline and its offline paths.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use querylens_core::Result;
use querylens_extract::{extract_queries, ConversationId};
use querylens_session::{fetch_conversation, resolve_access_token, PageContext};

use crate::state::{AppState, ExtractionStats};

/// Shown alongside every error, regardless of cause.
const HINT: &str = "Open a ChatGPT conversation to extract search queries";

// ---------------------------------------------------------------
// Route builder
// ---------------------------------------------------------------

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/query-extractor/extract", post(extract))
        .route(
            "/query-extractor/extract-document",
            post(extract_document),
        )
        .route("/query-extractor/stats", get(get_stats))
}

// ---------------------------------------------------------------
// Body / Response types
// ---------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct DocumentBody {
    document: serde_json::Value,
}

#[derive(Serialize)]
struct ExtractResponse {
    success: bool,
    #[serde(rename = "requestId")]
    request_id: String,
    #[serde(rename = "conversationId")]
    conversation_id: String,
    queries: Vec<String>,
    count: usize,
    /// Newline-joined list for the popup's "copy all" affordance.
    #[serde(rename = "copyText")]
    copy_text: String,
}

fn error_response(message: String) -> serde_json::Value {
    serde_json::json!({
        "success": false,
        "error": message,
        "hint": HINT,
    })
}

// ---------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------

/// Full pipeline: conversation ID from the snapshot URL, credential
/// resolution, authenticated fetch, extraction. Every failure is caught
/// here and converted to the single-message error shape.
async fn extract(
    State(state): State<Arc<AppState>>,
    Json(context): Json<PageContext>,
) -> Json<serde_json::Value> {
    match run_pipeline(&state, &context).await {
        Ok(response) => Json(serde_json::to_value(response).unwrap_or_default()),
        Err(e) => {
            warn!("Extraction failed: {}", e);
            Json(error_response(e.to_string()))
        }
    }
}

async fn run_pipeline(state: &AppState, context: &PageContext) -> Result<ExtractResponse> {
    let id = ConversationId::from_url(&context.url)?;
    let token = resolve_access_token(&state.http, &state.config.base_url, context).await?;
    let doc = fetch_conversation(
        &state.http,
        &state.config.base_url,
        &id,
        &token,
        &context.cookies,
    )
    .await?;

    let queries = extract_queries(&doc);
    state.record_extraction(queries.len());
    info!(
        "Extracted {} queries from conversation {}",
        queries.len(),
        id
    );

    Ok(ExtractResponse {
        success: true,
        request_id: uuid::Uuid::new_v4().to_string(),
        conversation_id: id.to_string(),
        count: queries.len(),
        copy_text: queries.join("\n"),
        queries,
    })
}

/// Extraction only, over a caller-supplied document. Never fails: any JSON
/// value yields a (possibly empty) list.
async fn extract_document(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DocumentBody>,
) -> Json<serde_json::Value> {
    let queries = extract_queries(&body.document);
    state.record_extraction(queries.len());

    Json(serde_json::json!({
        "success": true,
        "queries": queries,
        "count": queries.len(),
        "copyText": queries.join("\n"),
    }))
}

async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ExtractionStats> {
    Json(state.stats.read().clone())
}
