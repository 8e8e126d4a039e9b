//! Scratch directories that clean up after themselves

use std::path::{Path, PathBuf};
use std::{fs, io};

/// Temporary directory removed (with its contents) on drop
#[derive(Debug)]
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    /// Create a uniquely named directory under the system temp dir
    pub fn new(prefix: &str) -> io::Result<Self> {
        let path = std::env::temp_dir().join(format!("{prefix}-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    /// Directory location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `contents` to `name` inside the directory and return its path
    pub fn write_file(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        let file_path = self.path.join(name);
        fs::write(&file_path, contents)?;
        Ok(file_path)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_removed_on_drop() {
        let dir = TempDir::new("mergington-temp").unwrap();
        let file = dir.write_file("config.toml", "[server]\nport = 1").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "[server]\nport = 1");

        let path = dir.path().to_path_buf();
        drop(dir);
        assert!(!path.exists());
    }
}
