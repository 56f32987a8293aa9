// File: api/src/services/reachable_service.rs
use std::sync::Arc;
use tracing::{debug, instrument};

use super::validation::is_integer;
use crate::constants::snapshot::LATEST;
use crate::errors::{BadRequestError, NotFoundError, StoreResult};
use crate::snapshot::{NodeRecord, SnapshotScanner};

/// Serves the raw node list of a single snapshot.
///
/// Reads go straight to the file; the metadata cache is neither consulted
/// nor populated here.
#[derive(Clone)]
pub struct ReachableNodeService {
    scanner: Arc<SnapshotScanner>,
}

impl ReachableNodeService {
    pub fn new(scanner: Arc<SnapshotScanner>) -> Self {
        Self { scanner }
    }

    /// Node records of `snapshot_id`, which is a decimal id or `latest`.
    #[instrument(skip(self))]
    pub async fn get_reachable_nodes(&self, snapshot_id: &str) -> StoreResult<Vec<NodeRecord>> {
        let filename = self.resolve_filename(snapshot_id).await?;
        let records = self.scanner.read_snapshot(&filename).await?;

        debug!("Loaded {} nodes from {}", records.len(), filename);
        Ok(records)
    }

    async fn resolve_filename(&self, snapshot_id: &str) -> StoreResult<String> {
        if snapshot_id == LATEST {
            return self
                .scanner
                .list_snapshot_files()
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| NotFoundError::NoSnapshots.into());
        }

        if !is_integer(snapshot_id) {
            return Err(BadRequestError::InvalidSnapshotId {
                value: snapshot_id.to_string(),
            }
            .into());
        }

        let filename = SnapshotScanner::filename_for(snapshot_id);
        let filenames = self.scanner.list_snapshot_files().await?;
        if filenames.contains(&filename) {
            Ok(filename)
        } else {
            Err(NotFoundError::SnapshotNotFound {
                snapshot_id: snapshot_id.to_string(),
            }
            .into())
        }
    }
}
