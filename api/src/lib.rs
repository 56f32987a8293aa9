pub mod config;
pub mod constants;
pub mod errors;
pub mod services;
pub mod snapshot;
pub mod web;

// Re-export commonly used types
pub use config::{Config, ConfigManager, Network};
pub use errors::{ErrorKind, StoreError, StoreResult};
pub use services::{ReachableNodeService, SnapshotListingService, SnapshotSummary};
pub use snapshot::{MetadataCache, NodeRecord, SnapshotMetadata, SnapshotScanner};
