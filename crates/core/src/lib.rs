//! # Mergington Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The activity directory service (list, register, unregister)
//! - Port interfaces (traits) the directory is seeded through
//!
//! ## Architecture Principles
//! - Only depends on `mergington-common` and `mergington-domain`
//! - No file, HTTP, or platform code
//! - All external inputs via traits

pub mod directory;

// Re-export specific items to avoid ambiguity
pub use directory::ports::ActivityCatalog;
pub use directory::service::{normalize_email, ActivityDirectory};
