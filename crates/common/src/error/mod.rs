//! Error classification shared by every Mergington error type
//!
//! Each crate owns its own `thiserror` enum; this module only provides the
//! vocabulary used to reason about those errors uniformly:
//!
//! - **`ErrorClassification` trait**: retryability and severity
//! - **`ErrorSeverity` enum**: a unified severity level used to pick the log
//!   level when an error is reported
//!
//! ## ErrorSeverity Levels
//!
//! | Level | Use Case | Examples |
//! |-------|----------|----------|
//! | **Info** | Expected caller mistakes | Unknown activity, duplicate signup |
//! | **Warning** | Degraded but operational | Unreadable optional config file |
//! | **Error** | Failure requiring attention | Invalid configuration |
//! | **Critical** | System integrity at risk | Internal invariant violations |
//!
//! ## Example
//!
//! ```rust
//! use mergington_common::{ErrorClassification, ErrorSeverity};
//!
//! #[derive(Debug)]
//! struct Duplicate;
//!
//! impl ErrorClassification for Duplicate {
//!     fn is_retryable(&self) -> bool {
//!         false
//!     }
//!
//!     fn severity(&self) -> ErrorSeverity {
//!         ErrorSeverity::Info
//!     }
//! }
//!
//! assert!(Duplicate.is_client_error());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Standard interface for classifying errors by their characteristics.
pub trait ErrorClassification {
    /// Check if this error is retryable
    ///
    /// Retryable errors are transient issues that may succeed if attempted
    /// again. Caller mistakes never are.
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    ///
    /// Used for logging decisions.
    fn severity(&self) -> ErrorSeverity;

    /// Whether the error was caused by the caller rather than the service.
    ///
    /// Defaults to "informational and not retryable".
    fn is_client_error(&self) -> bool {
        !self.is_retryable() && self.severity() == ErrorSeverity::Info
    }
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}
