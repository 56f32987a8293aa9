// File: api/src/snapshot/mod.rs

//! Filesystem-backed snapshot store
//!
//! Snapshots are produced by an external exporter as immutable files named
//! `<snapshotId>.json` inside one directory per network. Each file holds a
//! JSON array of fixed-length positional node records.
//!
//! # Key Features
//!
//! - **Directory Scanning**: Re-lists the export directory on every request, newest first
//! - **Positional Records**: Named Rust fields over the stable 14-column array format
//! - **Metadata Memoization**: Node count and median height computed once per snapshot

pub mod cache;
pub mod record;
pub mod scanner;

pub use cache::{MetadataCache, SnapshotMetadata};
pub use record::{GeoInfo, NodeRecord, RECORD_KEYS};
pub use scanner::SnapshotScanner;
