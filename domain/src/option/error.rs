//! Option error types

use thiserror::Error;

/// Errors raised while reading or mutating an option registry.
///
/// All of them are recoverable: the console prints them and keeps its
/// prompt, and the registry is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("parameter not valid: '{0}'")]
    UnknownOption(String),

    #[error("the value provided for {option} is not valid ('{value}'): {reason}")]
    InvalidOptionValue {
        option: String,
        value: String,
        reason: String,
    },

    #[error("no value provided for {0}")]
    MissingValue(String),
}

impl OptionError {
    /// Whether the operator simply forgot part of the command
    pub fn is_usage_error(&self) -> bool {
        matches!(self, OptionError::MissingValue(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_display() {
        let error = OptionError::UnknownOption("FOO".to_string());
        assert_eq!(error.to_string(), "parameter not valid: 'FOO'");
    }

    #[test]
    fn test_usage_error_check() {
        assert!(OptionError::MissingValue("NICK".to_string()).is_usage_error());
        assert!(!OptionError::UnknownOption("NICK".to_string()).is_usage_error());
    }
}
