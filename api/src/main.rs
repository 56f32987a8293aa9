// File: api/src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use api::web::start_web_server;
use api::{
    ConfigManager, MetadataCache, ReachableNodeService, SnapshotListingService, SnapshotScanner,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with reduced verbosity
    let env_filter = EnvFilter::from_default_env()
        .add_directive("api=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting node snapshot API");

    // Load configuration; an unknown network aborts startup here
    let config_manager = ConfigManager::new("config".to_string()).await?;
    let config = config_manager.get_current_config();

    let scanner = Arc::new(SnapshotScanner::new(config.export_dir()));
    let metadata_cache = Arc::new(MetadataCache::new());
    info!(
        "Snapshot store initialized for {} at {}",
        config.network,
        scanner.export_dir().display()
    );

    let listing_service = Arc::new(SnapshotListingService::new(
        scanner.clone(),
        metadata_cache,
    ));
    let reachable_service = Arc::new(ReachableNodeService::new(scanner));

    start_web_server(config, listing_service, reachable_service).await?;

    Ok(())
}
