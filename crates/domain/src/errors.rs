//! Error types used throughout the application

use mergington_common::{ErrorClassification, ErrorSeverity};
use thiserror::Error;

use crate::constants::{
    DETAIL_ACTIVITY_FULL, DETAIL_ACTIVITY_NOT_FOUND, DETAIL_ALREADY_SIGNED_UP,
    DETAIL_NOT_REGISTERED,
};

/// Main error type for Mergington
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergingtonError {
    #[error("Activity not found: {0}")]
    NotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },

    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },

    #[error("{activity} is full ({capacity} participants)")]
    ActivityFull { activity: String, capacity: u32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MergingtonError {
    /// Caller-facing explanation, stable across releases.
    ///
    /// Signup failures use fixed sentences so clients can match on them;
    /// the remaining variants carry their own message.
    pub fn detail(&self) -> String {
        match self {
            Self::NotFound(_) => DETAIL_ACTIVITY_NOT_FOUND.to_string(),
            Self::AlreadyRegistered { .. } => DETAIL_ALREADY_SIGNED_UP.to_string(),
            Self::NotRegistered { .. } => DETAIL_NOT_REGISTERED.to_string(),
            Self::ActivityFull { .. } => DETAIL_ACTIVITY_FULL.to_string(),
            Self::InvalidInput(message) => message.clone(),
            Self::Config(_) | Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl ErrorClassification for MergingtonError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_)
            | Self::AlreadyRegistered { .. }
            | Self::NotRegistered { .. }
            | Self::ActivityFull { .. }
            | Self::InvalidInput(_) => ErrorSeverity::Info,
            Self::Config(_) => ErrorSeverity::Error,
            Self::Internal(_) => ErrorSeverity::Critical,
        }
    }
}

/// Result type alias for Mergington operations
pub type Result<T> = std::result::Result<T, MergingtonError>;
