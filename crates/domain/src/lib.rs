//! # Mergington Domain
//!
//! Business domain types for the activity sign-up service.
//!
//! This crate contains:
//! - Activity and participant types with the signup rules
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - Depends only on `mergington-common`
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
