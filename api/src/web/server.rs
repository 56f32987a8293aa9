// File: api/src/web/server.rs
use crate::config::Config;
use crate::services::{ReachableNodeService, SnapshotListingService};
use crate::web::{handlers, AppState};
use anyhow::{anyhow, Result};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(
    config: Arc<Config>,
    listing_service: Arc<SnapshotListingService>,
    reachable_service: Arc<ReachableNodeService>,
) -> Result<()> {
    let state = AppState::new(config.clone(), listing_service, reachable_service);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow!("Failed to bind {}: {}", addr, e))?;
    info!("Snapshot API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::redirect_to_homepage))
        // === SNAPSHOT ROUTES (unversioned and /v1) ===
        .merge(snapshot_routes())
        .nest("/v1", snapshot_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn snapshot_routes() -> Router<AppState> {
    Router::new()
        .route("/snapshots", get(handlers::list_snapshots))
        .route(
            "/snapshots/{snapshot_id}/reachable",
            get(handlers::get_reachable_nodes),
        )
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            warn!("Failed to install Ctrl-C handler, graceful shutdown disabled: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
