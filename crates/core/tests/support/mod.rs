//! Shared test helpers for `mergington-core` integration tests.
//!
//! In-memory catalogs so directory tests can focus on behaviour instead of
//! seed plumbing.

use mergington_core::ActivityCatalog;
use mergington_domain::{ActivityDetails, MergingtonError, Result as DomainResult};

/// In-memory catalog returning a fixed list of activities.
#[derive(Default, Clone)]
pub struct MockCatalog {
    entries: Vec<(String, ActivityDetails)>,
}

impl MockCatalog {
    /// Convenience helper for adding a single activity to the mock.
    pub fn with_activity(mut self, name: &str, details: ActivityDetails) -> Self {
        self.entries.push((name.to_string(), details));
        self
    }

    /// Chess Club and Programming Class with their usual seed participants.
    pub fn school() -> Self {
        Self::default()
            .with_activity(
                "Chess Club",
                ActivityDetails::new(
                    "Learn strategies and compete in chess tournaments",
                    "Fridays, 3:30 PM - 5:00 PM",
                    12,
                )
                .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
            )
            .with_activity(
                "Programming Class",
                ActivityDetails::new(
                    "Learn programming fundamentals and build software projects",
                    "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                    20,
                )
                .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
            )
    }
}

impl ActivityCatalog for MockCatalog {
    fn load(&self) -> DomainResult<Vec<(String, ActivityDetails)>> {
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

/// Catalog whose source is unavailable.
pub struct FailingCatalog;

impl ActivityCatalog for FailingCatalog {
    fn load(&self) -> DomainResult<Vec<(String, ActivityDetails)>> {
        Err(MergingtonError::Config("seed source unavailable".into()))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}
