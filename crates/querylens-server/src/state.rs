//! Shared application state.

use parking_lot::RwLock;
use serde::Serialize;

use querylens_core::QueryLensConfig;

/// Counters for the current server session. Reset on restart, never
/// persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionStats {
    #[serde(rename = "extractionsRun")]
    pub extractions_run: u64,
    #[serde(rename = "queriesFound")]
    pub queries_found: u64,
    #[serde(skip_serializing_if = "Option::is_none", rename = "lastExtractionAt")]
    pub last_extraction_at: Option<String>,
}

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: QueryLensConfig,
    pub http: reqwest::Client,
    pub stats: RwLock<ExtractionStats>,
}

impl AppState {
    pub fn new(config: QueryLensConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            stats: RwLock::new(ExtractionStats::default()),
        }
    }

    /// Record one completed extraction.
    pub fn record_extraction(&self, query_count: usize) {
        let mut stats = self.stats.write();
        stats.extractions_run += 1;
        stats.queries_found += query_count as u64;
        stats.last_extraction_at = Some(chrono::Utc::now().to_rfc3339());
    }
}
