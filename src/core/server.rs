//! HTTP server
//!
//! Router assembly and listener lifecycle. The session layer persists
//! sessions in the same SQLite database as the catalog; the cookie is
//! HTTP-only and expires after 24 hours of inactivity.

use std::net::SocketAddr;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::api;
use crate::core::{Config, ServerState};
use crate::utils::{AppError, AppResult};

/// Session time-to-live (hours of inactivity). Sliding window: every
/// request on the session pushes the expiry 24h out again; only an idle
/// session lapses.
const SESSION_TTL_HOURS: i64 = 24;

/// Build the full application router with session, CORS and trace layers.
pub async fn build_router(state: ServerState) -> AppResult<Router> {
    let session_store = SqliteStore::new(state.pool().clone());
    session_store
        .migrate()
        .await
        .map_err(|e| AppError::database(format!("Failed to migrate session store: {e}")))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(state.config.is_production())
        .with_expiry(Expiry::OnInactivity(Duration::hours(SESSION_TTL_HOURS)));

    let cors_origin = state
        .config
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|e| AppError::internal(format!("Invalid CORS origin: {e}")))?;

    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(Router::new()
        .merge(api::auth::router())
        .merge(api::products::router())
        .merge(api::images::router())
        .merge(api::admin::router())
        .layer(session_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(self) -> AppResult<()> {
        let app = build_router(self.state).await?;

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        tracing::info!("Storefront server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
