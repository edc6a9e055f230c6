//! Macro for implementing Display and FromStr for string-backed enums
//!
//! Several domain enums travel as lowercase strings: group statuses inside the
//! GraphQL query, token backends inside configuration files and environment
//! variables. This macro keeps both directions in one mapping.
//!
//! # Example
//!
//! ```rust
//! use learnboard_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Theme {
//!     Light,
//!     Dark,
//! }
//!
//! impl_domain_status_conversions!(Theme {
//!     Light => "light",
//!     Dark => "dark",
//! });
//!
//! assert_eq!(Theme::Dark.to_string(), "dark");
//! assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
//! ```

/// Implements Display and FromStr traits for string-backed enums
///
/// Parsing is case-insensitive; display is always the lowercase mapping.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
