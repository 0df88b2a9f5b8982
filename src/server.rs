//! Portal name endpoint server
//!
//! Serves the HTTP interface the lookup client consumes, backed by an
//! [`EmployeeDirectory`]. A hit answers 200 with the plain-text display
//! name; a miss answers 404 with the literal body `Does not exist`.

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::directory::EmployeeDirectory;

const NOT_FOUND_BODY: &str = "Does not exist";

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Read `PORTAL_HOST`/`PORTAL_PORT`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("PORTAL_HOST").unwrap_or(defaults.host);
        let port = std::env::var("PORTAL_PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        Self { host, port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn EmployeeDirectory>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/get_employee_name/:identifier", get(get_employee_name))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = create_router(state);
    let addr = config.addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Starting portal server on {}", addr);

    axum::serve(listener, app)
        .await
        .context("Portal server terminated")?;

    Ok(())
}

async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse {
        success: true,
        data: Some("OK".to_string()),
        error: None,
    })
}

async fn get_employee_name(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
) -> (StatusCode, String) {
    match state.directory.display_name(&identifier).await {
        Some(name) => (StatusCode::OK, name),
        None => (StatusCode::NOT_FOUND, NOT_FOUND_BODY.to_string()),
    }
}
