//! Testing utilities shared by the workspace's integration tests
//!
//! - **[`temp`]**: scratch directories for config and seed files

pub mod temp;

pub use temp::TempDir;
