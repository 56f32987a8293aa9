//! HTTP request handlers for the snapshot API.
//!
//! This module is organized by domain:
//! - `common` - Response envelopes and error mapping
//! - `index` - Root redirect
//! - `snapshots` - Snapshot listing and reachable-node endpoints

pub mod common;
pub mod index;
pub mod snapshots;

// Re-export all public handler functions for convenience
pub use index::*;
pub use snapshots::*;
