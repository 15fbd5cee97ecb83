use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ConfigError;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static regex"));

/// Checks that `value` is a valid C++ identifier: letters, digits, and
/// underscores only, not starting with a digit.
pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if IDENTIFIER_RE.is_match(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier {
            field,
            value: value.to_string(),
        })
    }
}

/// Like [`validate_identifier`], but an empty value passes. Used for the
/// optional namespace/prefix/suffix fields.
pub fn validate_identifier_or_empty(
    field: &'static str,
    value: &str,
) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_identifier(field, value)
}
