//! This module provides reusable test utilities:
//! - Temporary export directories populated with snapshot files
//! - Node record builders
//! - Service and router wiring over a test directory

// Allow unused code in test fixtures - not every test binary uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod test_data;
pub mod test_export_dir;

// Re-export commonly used items
pub use test_data::*;
pub use test_export_dir::TestExportDir;
