//! Seed file catalog
//!
//! Activities are read from a TOML or JSON file (format chosen by extension)
//! with a single `activities` table keyed by activity name:
//!
//! ```toml
//! [activities."Chess Club"]
//! description = "Learn strategies and compete in chess tournaments"
//! schedule = "Fridays, 3:30 PM - 5:00 PM"
//! max_participants = 12
//! participants = ["michael@mergington.edu"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mergington_core::ActivityCatalog;
use mergington_domain::{ActivityDetails, MergingtonError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    activities: BTreeMap<String, ActivityDetails>,
}

/// Catalog backed by a seed file on disk
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActivityCatalog for FileCatalog {
    /// # Errors
    /// `Config` if the file is missing, unreadable, malformed, or has no
    /// activities. Per-activity checks happen when the directory is built.
    fn load(&self) -> Result<Vec<(String, ActivityDetails)>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            MergingtonError::Config(format!(
                "Failed to read seed file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let seed = parse_seed(&contents, &self.path)?;
        if seed.activities.is_empty() {
            return Err(MergingtonError::Config(format!(
                "Seed file {} defines no activities",
                self.path.display()
            )));
        }

        tracing::info!(
            path = %self.path.display(),
            activities = seed.activities.len(),
            "Loaded activity seed file"
        );

        Ok(seed.activities.into_iter().collect())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn parse_seed(contents: &str, path: &Path) -> Result<SeedFile> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MergingtonError::Config(format!("Invalid TOML seed file: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MergingtonError::Config(format!("Invalid JSON seed file: {}", e))),
        _ => Err(MergingtonError::Config(format!("Unsupported seed file format: {}", extension))),
    }
}
