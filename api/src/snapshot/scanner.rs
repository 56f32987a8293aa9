// File: api/src/snapshot/scanner.rs
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

use super::record::NodeRecord;
use crate::constants::snapshot::FILE_SUFFIX;
use crate::errors::{StoreError, StoreResult};

/// Lists and loads the snapshot files of one network's export directory.
///
/// The directory is re-listed on every call; nothing about its contents is
/// remembered between calls.
#[derive(Debug, Clone)]
pub struct SnapshotScanner {
    export_dir: PathBuf,
}

impl SnapshotScanner {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Snapshot filenames, most recent first.
    ///
    /// Ordering is plain descending string comparison, which matches
    /// chronological order for fixed-width zero-padded ids.
    #[instrument(skip(self), fields(dir = %self.export_dir.display()))]
    pub async fn list_snapshot_files(&self) -> StoreResult<Vec<String>> {
        let mut entries = fs::read_dir(&self.export_dir)
            .await
            .map_err(|e| StoreError::directory_read(self.export_dir.display(), e))?;

        let mut filenames = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::directory_read(self.export_dir.display(), e))?
        {
            // Non UTF-8 names can never match a snapshot id
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(FILE_SUFFIX) {
                    filenames.push(name.to_string());
                }
            }
        }

        filenames.sort_unstable_by(|a, b| b.cmp(a));
        debug!("Found {} snapshot files", filenames.len());
        Ok(filenames)
    }

    /// Reads and parses one snapshot file from the export directory.
    pub async fn read_snapshot(&self, filename: &str) -> StoreResult<Vec<NodeRecord>> {
        let path = self.export_dir.join(filename);
        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| StoreError::file_read(path.display(), e))?;

        serde_json::from_str(&content).map_err(|e| StoreError::parse(path.display(), e))
    }

    pub fn snapshot_id(filename: &str) -> &str {
        filename.strip_suffix(FILE_SUFFIX).unwrap_or(filename)
    }

    pub fn filename_for(snapshot_id: &str) -> String {
        format!("{}{}", snapshot_id, FILE_SUFFIX)
    }
}
