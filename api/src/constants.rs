//! Application-wide constants for pagination, snapshot files, and defaults
//!
//! Central repository for the limits and magic values shared by the
//! snapshot store and the HTTP layer.

/// Snapshot listing pagination
pub mod pagination {
    /// Page size used when `limit` is not supplied (~4 hours of snapshots)
    pub const DEFAULT_SNAPSHOT_LIMIT: usize = 24;

    /// Largest page size served; larger requests are clamped (~2 days)
    pub const MAX_SNAPSHOT_LIMIT: usize = 144 * 2;
}

/// Snapshot file conventions
pub mod snapshot {
    /// Extension carried by every snapshot file in an export directory
    pub const FILE_SUFFIX: &str = ".json";

    /// Snapshot id alias resolving to the most recent snapshot
    pub const LATEST: &str = "latest";
}

/// Response envelope values
pub mod response {
    pub const STATUS_SUCCESS: &str = "success";
    pub const STATUS_ERROR: &str = "error";

    /// Column names of a snapshot listing row
    pub const SNAPSHOT_KEYS: [&str; 3] = ["timestamp", "medianHeight", "nodeCount"];

    /// Message returned for any failure that is not the caller's fault
    pub const GENERIC_ERROR_MESSAGE: &str = "An unknown error occurred.";
}

/// Default configuration values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";

    pub const PORT: u16 = 3000;

    /// Parent directory of the per-network export directories
    pub const EXPORT_ROOT: &str = "../data/export";

    /// Environment variable overriding the configured port
    pub const PORT_ENV_VAR: &str = "PORT";
}
