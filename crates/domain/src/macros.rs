//! Macro for implementing Display and FromStr for setting enums
//!
//! Configuration enums are read from files (via serde) and from environment
//! variables (via `FromStr`); this macro keeps both spellings in one place.
//!
//! # Example
//!
//! ```rust
//! use mergington_domain::impl_setting_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Mode {
//!     Strict,
//!     Relaxed,
//! }
//!
//! impl_setting_conversions!(Mode {
//!     Strict => "strict",
//!     Relaxed => "relaxed",
//! });
//!
//! assert_eq!("STRICT".parse::<Mode>(), Ok(Mode::Strict));
//! ```

/// Implements Display and FromStr traits for setting enums
///
/// - Display: writes the lowercase spelling
/// - FromStr: case-insensitive, surrounding whitespace ignored
#[macro_export]
macro_rules! impl_setting_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    )),
                }
            }
        }
    };
}
