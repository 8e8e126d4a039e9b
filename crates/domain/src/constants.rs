//! Application constants
//!
//! Centralized location for domain-level constants: the caller-facing
//! sentences clients match on, and configuration defaults.

// Error details returned to callers
pub const DETAIL_ACTIVITY_NOT_FOUND: &str = "Activity not found";
pub const DETAIL_ALREADY_SIGNED_UP: &str = "Student is already signed up for this activity";
pub const DETAIL_NOT_REGISTERED: &str = "Student is not registered for this activity";
pub const DETAIL_ACTIVITY_FULL: &str = "Activity is full";

// Field names
pub const EMAIL_FIELD: &str = "email";

// Server defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_LOG_LEVEL: &str = "info";
