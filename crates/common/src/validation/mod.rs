//! Field validation for request inputs
//!
//! Validators check a single value and report a message the caller prefixes
//! with the field name.

mod validators;

pub use validators::{FieldValidator, StringValidator};
