// Field Validators - Reusable validation components

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// String validator for presence checks
#[derive(Debug, Clone)]
pub struct StringValidator {
    not_empty: bool,
    trim: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self { not_empty: false, trim: true }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Validate and return the value the way it was checked (trimmed when
    /// trimming is enabled).
    pub fn normalize(&self, value: &str) -> Result<String, String> {
        self.validate(value)?;
        Ok(self.view(value).to_string())
    }

    fn view<'a>(&self, value: &'a str) -> &'a str {
        if self.trim {
            value.trim()
        } else {
            value
        }
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.not_empty && self.view(value).is_empty() {
            return Err("must not be empty".to_string());
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

impl FieldValidator<&str> for StringValidator {
    fn validate(&self, value: &&str) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value)
    }
}
