//! Common test data and constants

use serde_json::{json, Value};

/// Positional JSON row for a node at `height`
pub fn node_row(index: usize, height: u64) -> Value {
    json!([
        format!("198.51.100.{}", index % 250 + 1),
        12038,
        "/hsd:5.0.0/",
        1700000000 + index as i64,
        3,
        height,
        null,
        "Amsterdam",
        "NL",
        52.37,
        4.89,
        "Europe/Amsterdam",
        "AS1136",
        "KPN B.V."
    ])
}

/// Positional JSON rows for nodes at the given heights
pub fn node_rows(heights: &[u64]) -> Value {
    Value::Array(
        heights
            .iter()
            .enumerate()
            .map(|(i, height)| node_row(i, *height))
            .collect(),
    )
}

/// Common snapshot ids (zero-padded, fixed width)
pub mod snapshot_ids {
    pub const OLDEST: &str = "1700000000";
    pub const MIDDLE: &str = "1700000600";
    pub const NEWEST: &str = "1700001200";
    pub const MISSING: &str = "999999999";
}
