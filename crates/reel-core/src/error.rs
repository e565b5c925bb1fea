//! Error types for reel-core
//!
//! The picker derivations never fail. Errors only arise when parsing
//! host-supplied settings such as hex colors.

use thiserror::Error;

/// Errors that can occur while parsing a hex color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Wrong number of hex digits (expects 6 or 8)
    #[error("Invalid color '{input}': expected #RRGGBB or #RRGGBBAA, got {len} digits")]
    InvalidLength { input: String, len: usize },

    /// A character that is not a hex digit
    #[error("Invalid color '{input}': '{digit}' is not a hex digit")]
    InvalidDigit { input: String, digit: char },
}

/// Result type for color parsing
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ColorError::InvalidLength {
            input: "#FFF".to_string(),
            len: 3,
        };
        assert!(err.to_string().contains("#FFF"));
        assert!(err.to_string().contains("3"));

        let err = ColorError::InvalidDigit {
            input: "#GG0000".to_string(),
            digit: 'G',
        };
        assert!(err.to_string().contains("'G'"));
    }
}
