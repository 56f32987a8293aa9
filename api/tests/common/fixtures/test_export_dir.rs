//! Temporary export directory for snapshot store tests

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use api::config::Config;
use api::web::{create_router, AppState};
use api::{MetadataCache, ReachableNodeService, SnapshotListingService, SnapshotScanner};

use super::test_data::node_rows;

pub struct TestExportDir {
    temp_dir: TempDir,
}

impl TestExportDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp export dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `<snapshot_id>.json` holding nodes at the given heights
    pub fn with_snapshot(self, snapshot_id: &str, heights: &[u64]) -> Self {
        self.write_snapshot(snapshot_id, heights);
        self
    }

    pub fn write_snapshot(&self, snapshot_id: &str, heights: &[u64]) -> PathBuf {
        let content = serde_json::to_string(&node_rows(heights)).unwrap();
        self.write_raw(&format!("{}.json", snapshot_id), &content)
    }

    pub fn write_raw(&self, filename: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(filename);
        fs::write(&path, content).expect("Failed to write snapshot file");
        path
    }

    pub fn remove_snapshot(&self, snapshot_id: &str) {
        fs::remove_file(self.temp_dir.path().join(format!("{}.json", snapshot_id)))
            .expect("Failed to remove snapshot file");
    }

    pub fn scanner(&self) -> Arc<SnapshotScanner> {
        Arc::new(SnapshotScanner::new(self.path()))
    }

    pub fn listing_service(&self) -> SnapshotListingService {
        SnapshotListingService::new(self.scanner(), Arc::new(MetadataCache::new()))
    }

    pub fn reachable_service(&self) -> ReachableNodeService {
        ReachableNodeService::new(self.scanner())
    }

    pub fn router(&self, homepage_url: Option<&str>) -> axum::Router {
        let config = Config {
            homepage_url: homepage_url.map(str::to_string),
            ..Config::default()
        };
        let state = AppState::new(
            Arc::new(config),
            Arc::new(self.listing_service()),
            Arc::new(self.reachable_service()),
        );
        create_router(state)
    }
}
