//! QueryLens — local companion service for the search-query popup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

/// Offline path: extract queries from a saved conversation JSON file.
fn extract_from_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)?;
    let doc: serde_json::Value = serde_json::from_str(&raw)?;
    Ok(querylens_extract::extract_queries(&doc))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "extract" => {
                if args.len() < 3 {
                    eprintln!("Usage: querylens extract <conversation.json>");
                    std::process::exit(1);
                }
                let queries = extract_from_file(&PathBuf::from(&args[2]))?;
                for query in &queries {
                    println!("{}", query);
                }
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("QueryLens — ChatGPT search-query extraction service");
                println!();
                println!("Usage: querylens [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  extract <file>           Extract queries from a saved conversation JSON");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'querylens help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let config = querylens_core::QueryLensConfig::from_env();
    let port = config.port;

    info!("Target site: {}", config.base_url);

    let state = Arc::new(AppState::new(config));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("QueryLens server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
