//! # Mergington Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Activity catalogs (built-in school activities, seed files)
//! - Configuration loading from files and environment variables
//!
//! ## Architecture
//! - Implements traits defined in `mergington-core`
//! - Contains all "impure" code (file and environment I/O)

pub mod catalog;
pub mod config;

// Re-export commonly used items
pub use catalog::{catalog_for, BuiltinCatalog, FileCatalog};
