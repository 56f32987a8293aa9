// File: api/src/web/mod.rs
pub mod handlers;
pub mod server;

pub use server::{create_router, start_web_server};

use std::sync::Arc;

use crate::config::Config;
use crate::services::{ReachableNodeService, SnapshotListingService};

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub listing_service: Arc<SnapshotListingService>,
    pub reachable_service: Arc<ReachableNodeService>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        listing_service: Arc<SnapshotListingService>,
        reachable_service: Arc<ReachableNodeService>,
    ) -> Self {
        Self {
            config,
            listing_service,
            reachable_service,
        }
    }
}
