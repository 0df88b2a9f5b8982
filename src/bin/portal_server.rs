//! Portal server binary
//!
//! Serves the employee name endpoint with the fixture directory. Bind
//! address comes from `PORTAL_HOST`/`PORTAL_PORT` (a `.env` file is
//! honoured).

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use hr_portal::directory::InMemoryDirectory;
use hr_portal::server::{serve, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "hr_portal=info,tower_http=debug".to_string()),
        )
        .init();

    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();

    let directory = InMemoryDirectory::fixture();
    info!(employees = directory.len(), "Loaded in-memory employee directory");

    serve(
        &config,
        AppState {
            directory: Arc::new(directory),
        },
    )
    .await
}
