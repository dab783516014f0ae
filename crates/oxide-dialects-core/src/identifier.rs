//! Identifier validation and quoting.
//!
//! Model builders validate every table, column and constraint name here
//! before it is stored; the synthesizer quotes names through
//! [`QuoteStyle::quote`] when identifier quoting is enabled.

use crate::error::{DdlError, Result};

/// Maximum identifier length accepted by the model layer, in bytes.
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Validates a name before it enters the model.
///
/// Rejects empty names, names containing a NUL byte, and names longer
/// than [`MAX_IDENTIFIER_LENGTH`] bytes. `kind` is used in the message
/// ("table", "column", ...).
///
/// # Errors
///
/// [`DdlError::InvalidModelDefinition`] describing the offending name.
pub fn validate_identifier(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DdlError::invalid_model(format!("{kind} name cannot be empty")));
    }
    if name.contains('\0') {
        return Err(DdlError::invalid_model(format!(
            "{kind} name contains a NUL byte: {name:?}"
        )));
    }
    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(DdlError::invalid_model(format!(
            "{kind} name exceeds {MAX_IDENTIFIER_LENGTH} bytes ({} bytes): {name:?}",
            name.len()
        )));
    }
    Ok(())
}

/// Delimiters used to quote identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `"name"` (ANSI).
    Double,
    /// `` `name` `` (MySQL family).
    Backtick,
    /// `[name]` (SQL Server).
    Bracket,
}

impl QuoteStyle {
    /// Wraps `name` in this style's delimiters, doubling any closing
    /// delimiter inside it.
    #[must_use]
    pub fn quote(self, name: &str) -> String {
        match self {
            Self::Double => format!("\"{}\"", name.replace('"', "\"\"")),
            Self::Backtick => format!("`{}`", name.replace('`', "``")),
            Self::Bracket => format!("[{}]", name.replace(']', "]]")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("table", "user_t").is_ok());
        assert!(validate_identifier("table", "").is_err());
        assert!(validate_identifier("table", "   ").is_err());
        assert!(validate_identifier("column", "bad\0name").is_err());
        assert!(validate_identifier("column", &"a".repeat(MAX_IDENTIFIER_LENGTH)).is_ok());
        assert!(validate_identifier("column", &"a".repeat(MAX_IDENTIFIER_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_quote_styles() {
        assert_eq!(QuoteStyle::Double.quote("users"), "\"users\"");
        assert_eq!(QuoteStyle::Double.quote("a\"b"), "\"a\"\"b\"");
        assert_eq!(QuoteStyle::Backtick.quote("a`b"), "`a``b`");
        assert_eq!(QuoteStyle::Bracket.quote("a]b"), "[a]]b]");
    }
}
