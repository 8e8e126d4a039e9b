use std::time::Duration;

use mergington_common::{ErrorClassification, ErrorSeverity};
use mergington_domain::{LogFormat, LoggingConfig, MergingtonError};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level` when set.
///
/// # Errors
/// Fails if the filter directive is invalid or a subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// Log the outcome of a request with structured fields.
///
/// # Parameters
/// * `route` - Logical route identifier (e.g. `"activities::signup"`).
/// * `elapsed` - Duration the handler took.
/// * `error` - The domain error, when the request failed.
///
/// Client errors are logged at `info` (they are expected), everything else
/// at `warn` or `error` according to its severity. Emails are never logged.
#[inline]
pub fn log_request_outcome(route: &str, elapsed: Duration, error: Option<&MergingtonError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(route, duration_ms, success = true, "request_completed"),
        Some(err) => {
            let error_type = error_label(err);
            match err.severity() {
                ErrorSeverity::Info => {
                    info!(route, duration_ms, success = false, error_type, "request_rejected");
                }
                ErrorSeverity::Warning => {
                    warn!(route, duration_ms, success = false, error_type, "request_failed");
                }
                ErrorSeverity::Error | ErrorSeverity::Critical => {
                    error!(route, duration_ms, success = false, error_type, "request_failed");
                }
            }
        }
    }
}

/// Convert a `MergingtonError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &MergingtonError) -> &'static str {
    match error {
        MergingtonError::NotFound(_) => "not_found",
        MergingtonError::AlreadyRegistered { .. } => "already_registered",
        MergingtonError::NotRegistered { .. } => "not_registered",
        MergingtonError::ActivityFull { .. } => "activity_full",
        MergingtonError::InvalidInput(_) => "invalid_input",
        MergingtonError::Config(_) => "config",
        MergingtonError::Internal(_) => "internal",
    }
}
