// File: api/src/snapshot/cache.rs
use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::record::NodeRecord;
use crate::errors::StoreResult;

/// Summary statistics derived from one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    pub node_count: usize,
    pub median_height: u64,
}

impl SnapshotMetadata {
    /// Upper median: heights sorted ascending, element at `len / 2`.
    /// An empty snapshot reports a median of 0.
    pub fn from_records(records: &[NodeRecord]) -> Self {
        let mut heights: Vec<u64> = records.iter().map(|r| r.height).collect();
        heights.sort_unstable();

        Self {
            node_count: records.len(),
            median_height: heights.get(heights.len() / 2).copied().unwrap_or(0),
        }
    }
}

/// Process-lifetime memo of snapshot metadata keyed by snapshot id.
///
/// Entries are never evicted or revalidated: snapshot files are immutable
/// once written. Two concurrent misses for the same id may both run the
/// loader; they store equal values.
pub struct MetadataCache {
    entries: Arc<RwLock<HashMap<String, SnapshotMetadata>>>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get_metadata<F, Fut>(
        &self,
        snapshot_id: &str,
        loader: F,
    ) -> StoreResult<SnapshotMetadata>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = StoreResult<Vec<NodeRecord>>>,
    {
        if let Some(meta) = self.entries.read().await.get(snapshot_id) {
            debug!("Metadata cache hit for snapshot {}", snapshot_id);
            return Ok(*meta);
        }

        debug!("Metadata cache miss for snapshot {}, loading", snapshot_id);
        let records = loader().await?;
        let meta = SnapshotMetadata::from_records(&records);

        let mut entries = self.entries.write().await;
        entries.insert(snapshot_id.to_string(), meta);
        Ok(meta)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Clone for MetadataCache {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl Default for MetadataCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use crate::snapshot::record::GeoInfo;

    fn record_at(height: u64) -> NodeRecord {
        NodeRecord {
            addr: "127.0.0.1".to_string(),
            port: 12038,
            agent: "/hsd:5.0.0/".to_string(),
            since: 1700000000,
            services: 3,
            height,
            hostname: None,
            geo: GeoInfo::default(),
        }
    }

    #[test]
    fn test_median_takes_upper_element_for_even_counts() {
        let meta = SnapshotMetadata::from_records(&[record_at(20), record_at(10)]);
        assert_eq!(meta.node_count, 2);
        assert_eq!(meta.median_height, 20);
    }

    #[test]
    fn test_median_of_odd_count() {
        let records = [record_at(25), record_at(5), record_at(15)];
        let meta = SnapshotMetadata::from_records(&records);
        assert_eq!(meta.node_count, 3);
        assert_eq!(meta.median_height, 15);
    }

    #[test]
    fn test_median_sorts_numerically() {
        // String ordering would put 100 before 9
        let records = [record_at(9), record_at(100), record_at(10)];
        assert_eq!(SnapshotMetadata::from_records(&records).median_height, 10);
    }

    #[test]
    fn test_empty_snapshot_metadata() {
        let meta = SnapshotMetadata::from_records(&[]);
        assert_eq!(meta.node_count, 0);
        assert_eq!(meta.median_height, 0);
    }

    #[tokio::test]
    async fn test_loader_runs_once_per_snapshot() {
        let cache = MetadataCache::new();
        let mut calls = 0;

        let first = cache
            .get_metadata("1700000000", || {
                calls += 1;
                async { Ok::<_, StoreError>(vec![record_at(1), record_at(2), record_at(3)]) }
            })
            .await
            .unwrap();
        let second = cache
            .get_metadata("1700000000", || {
                calls += 1;
                async { Ok::<_, StoreError>(Vec::new()) }
            })
            .await
            .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(first, second);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let cache = MetadataCache::new();

        let result = cache
            .get_metadata("1700000300", || async {
                Err::<Vec<NodeRecord>, _>(StoreError::parse("1700000300.json", "expected array"))
            })
            .await;
        assert!(result.is_err());
        assert!(cache.is_empty().await);
    }
}
