// File: api/src/services/mod.rs

pub mod listing_service;
pub mod reachable_service;
mod validation;

pub use listing_service::{SnapshotListingService, SnapshotSummary};
pub use reachable_service::ReachableNodeService;
