// File: api/src/services/listing_service.rs
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::validation::{is_non_negative_integer, non_empty};
use crate::constants::pagination::{DEFAULT_SNAPSHOT_LIMIT, MAX_SNAPSHOT_LIMIT};
use crate::errors::{BadRequestError, StoreResult};
use crate::snapshot::{MetadataCache, SnapshotScanner};

/// One listing row, serialized as `[timestamp, medianHeight, nodeCount]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "(String, u64, usize)")]
pub struct SnapshotSummary {
    pub timestamp: String,
    pub median_height: u64,
    pub node_count: usize,
}

impl From<SnapshotSummary> for (String, u64, usize) {
    fn from(summary: SnapshotSummary) -> Self {
        (summary.timestamp, summary.median_height, summary.node_count)
    }
}

#[derive(Clone)]
pub struct SnapshotListingService {
    scanner: Arc<SnapshotScanner>,
    cache: Arc<MetadataCache>,
}

impl SnapshotListingService {
    pub fn new(scanner: Arc<SnapshotScanner>, cache: Arc<MetadataCache>) -> Self {
        Self { scanner, cache }
    }

    /// Page of snapshot summaries, newest first.
    ///
    /// `before` is an exclusive cursor compared as a string against snapshot
    /// ids. `limit` defaults to 24 and is clamped to 288.
    #[instrument(skip(self))]
    pub async fn list_snapshots(
        &self,
        before: Option<&str>,
        limit: Option<&str>,
    ) -> StoreResult<Vec<SnapshotSummary>> {
        let before = Self::validate_before(before)?;
        let limit = Self::validate_limit(limit)?;

        let filenames = self.scanner.list_snapshot_files().await?;
        let mut remaining = limit;
        let mut summaries = Vec::with_capacity(limit.min(filenames.len()));

        for filename in &filenames {
            if remaining == 0 {
                break;
            }

            let snapshot_id = SnapshotScanner::snapshot_id(filename);
            if before.is_some_and(|cursor| cursor <= snapshot_id) {
                continue;
            }
            remaining -= 1;

            let meta = self
                .cache
                .get_metadata(snapshot_id, || self.scanner.read_snapshot(filename))
                .await?;

            summaries.push(SnapshotSummary {
                timestamp: snapshot_id.to_string(),
                median_height: meta.median_height,
                node_count: meta.node_count,
            });
        }

        debug!(
            "Listed {} of {} snapshots (limit {})",
            summaries.len(),
            filenames.len(),
            limit
        );
        Ok(summaries)
    }

    fn validate_before(before: Option<&str>) -> StoreResult<Option<&str>> {
        match non_empty(before) {
            Some(value) if !is_non_negative_integer(value) => {
                Err(BadRequestError::InvalidBefore {
                    value: value.to_string(),
                }
                .into())
            }
            other => Ok(other),
        }
    }

    fn validate_limit(limit: Option<&str>) -> StoreResult<usize> {
        let Some(value) = non_empty(limit) else {
            return Ok(DEFAULT_SNAPSHOT_LIMIT);
        };

        if !is_non_negative_integer(value) {
            return Err(BadRequestError::InvalidLimit {
                value: value.to_string(),
            }
            .into());
        }

        // Digits-only values that overflow are still just "too large"
        let requested = value.parse::<usize>().unwrap_or(usize::MAX);
        Ok(requested.min(MAX_SNAPSHOT_LIMIT))
    }
}
