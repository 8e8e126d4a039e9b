//! Activity catalogs: where the directory's initial activities come from

mod builtin;
mod file;

use mergington_core::ActivityCatalog;
use mergington_domain::DirectoryConfig;

pub use builtin::BuiltinCatalog;
pub use file::FileCatalog;

/// Pick the catalog named by the configuration: the seed file when one is
/// configured, the built-in activities otherwise.
pub fn catalog_for(config: &DirectoryConfig) -> Box<dyn ActivityCatalog> {
    match &config.seed_file {
        Some(path) => Box::new(FileCatalog::new(path.clone())),
        None => Box::new(BuiltinCatalog),
    }
}
