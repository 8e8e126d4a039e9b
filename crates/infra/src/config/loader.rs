//! Configuration loader
//!
//! Loads application configuration from a file and environment variables.
//!
//! ## Loading Strategy
//! 1. If `MERGINGTON_CONFIG` names a file, load it (missing file is an error)
//! 2. Otherwise probe the standard locations; use defaults when none exists
//! 3. Overlay environment variables on top of whatever was loaded
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MERGINGTON_CONFIG`: Explicit config file path
//! - `MERGINGTON_HOST`: Listen address
//! - `MERGINGTON_PORT`: Listen port
//! - `MERGINGTON_STATIC_DIR`: Directory served under `/static`
//! - `MERGINGTON_CAPACITY`: `advisory` or `enforced`
//! - `MERGINGTON_SEED_FILE`: Activity seed file (TOML or JSON)
//! - `MERGINGTON_LOG_LEVEL`: Default log filter when `RUST_LOG` is unset
//! - `MERGINGTON_LOG_FORMAT`: `text` or `json`
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./mergington.json` or `./mergington.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use mergington_domain::{CapacityPolicy, Config, LogFormat, MergingtonError, Result};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["config.json", "config.toml", "mergington.json", "mergington.toml"];

/// Load configuration: file (explicit, probed, or defaults) plus environment
/// overrides.
///
/// # Errors
/// Returns `MergingtonError::Config` if:
/// - `MERGINGTON_CONFIG` points at a missing file
/// - A config file has an invalid format
/// - An environment variable has an invalid value
pub fn load() -> Result<Config> {
    let explicit = std::env::var("MERGINGTON_CONFIG").ok().map(PathBuf::from);

    let mut config = match explicit {
        Some(path) => load_from_file(Some(path))?,
        None => match probe_config_paths() {
            Some(path) => load_from_file(Some(path))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations for config files.
/// Format is detected by file extension.
///
/// # Errors
/// Returns `MergingtonError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MergingtonError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MergingtonError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MergingtonError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Overlay `MERGINGTON_*` environment variables onto `config`.
///
/// Unset variables leave the corresponding field untouched.
///
/// # Errors
/// Returns `MergingtonError::Config` when a variable is set to a value that
/// does not parse (e.g. a non-numeric port).
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(host) = env_opt("MERGINGTON_HOST") {
        config.server.host = host;
    }
    if let Some(port) = env_parse::<u16>("MERGINGTON_PORT")? {
        config.server.port = port;
    }
    if let Some(dir) = env_opt("MERGINGTON_STATIC_DIR") {
        config.server.static_dir = PathBuf::from(dir);
    }
    if let Some(policy) = env_parse::<CapacityPolicy>("MERGINGTON_CAPACITY")? {
        config.directory.capacity = policy;
    }
    if let Some(seed) = env_opt("MERGINGTON_SEED_FILE") {
        config.directory.seed_file = Some(PathBuf::from(seed));
    }
    if let Some(level) = env_opt("MERGINGTON_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(format) = env_parse::<LogFormat>("MERGINGTON_LOG_FORMAT")? {
        config.logging.format = format;
    }
    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MergingtonError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MergingtonError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(MergingtonError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Non-empty environment variable
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an environment variable with `FromStr`
///
/// # Errors
/// Returns `MergingtonError::Config` naming the variable if parsing fails.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| MergingtonError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}
