//! Activity directory: the in-memory mapping of activities to participants

pub mod ports;
pub mod service;

pub use ports::ActivityCatalog;
pub use service::ActivityDirectory;
