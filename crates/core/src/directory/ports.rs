//! Port interfaces for seeding the activity directory
//!
//! These traits define the boundary between the directory and the
//! infrastructure that knows where the initial activities come from.

use mergington_domain::{ActivityDetails, Result};

/// Source of the fixed activity set a directory is built from
pub trait ActivityCatalog: Send + Sync {
    /// Load every activity as `(name, details)`, in catalog order.
    ///
    /// Names are expected to be unique; the directory rejects duplicates.
    fn load(&self) -> Result<Vec<(String, ActivityDetails)>>;

    /// Short label for logs (e.g. `"builtin"` or a file path)
    fn describe(&self) -> String;
}
