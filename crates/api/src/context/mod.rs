//! Application context - dependency injection container

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mergington_core::{ActivityCatalog, ActivityDirectory};
use mergington_domain::{Config, Result};
use mergington_infra::catalog_for;

/// Application context - holds all services and dependencies
///
/// Built once at startup and shared with every handler through axum state.
pub struct AppContext {
    pub config: Config,
    pub directory: Arc<ActivityDirectory>,
    pub started_at: DateTime<Utc>,
}

impl AppContext {
    /// Build the context, seeding the directory from the catalog the
    /// configuration selects.
    ///
    /// # Errors
    /// `Config` if the catalog cannot be loaded or contains invalid entries.
    pub fn new(config: Config) -> Result<Self> {
        let catalog = catalog_for(&config.directory);
        Self::with_catalog(config, catalog.as_ref())
    }

    /// Build the context from an explicit catalog (tests, embedding)
    pub fn with_catalog(config: Config, catalog: &dyn ActivityCatalog) -> Result<Self> {
        let directory = ActivityDirectory::from_catalog(catalog, config.directory.capacity)?;

        Ok(Self { config, directory: Arc::new(directory), started_at: Utc::now() })
    }

    /// Seconds since the context was built
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
