//! # Mergington API
//!
//! HTTP application layer - routes, error mapping and main entry point.
//!
//! This crate contains:
//! - Axum routes (HTTP → activity directory bridge)
//! - Application context (dependency injection)
//! - Logging and health utilities
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Translates directory outcomes into status codes and JSON bodies

pub mod context;
pub mod errors;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use errors::ApiError;
pub use routes::router;
