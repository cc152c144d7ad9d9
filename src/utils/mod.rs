pub mod config;
pub mod errors;

pub use config::AppConfig;
pub use errors::{LocalizationError, Result};

/// Rewrites a table value for a `.strings` literal: `%s` placeholders become
/// `%@`, then double quotes are backslash-escaped.
pub fn escape_value(value: &str) -> String {
    value.replace("%s", "%@").replace('"', "\\\"")
}
