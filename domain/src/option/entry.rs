//! A single configurable parameter of a lookup tool

use super::error::OptionError;
use super::value::{OptionKind, OptionValue};

/// One configurable parameter of a tool, as shown by `show options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleOption {
    /// Option name (upper case, unique within a tool)
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Value shape accepted by `set`
    pub kind: OptionKind,
    /// Value currently configured
    pub current: Option<OptionValue>,
    /// Value restored by `unset`
    pub default: Option<OptionValue>,
    /// Whether `run` refuses to dispatch while this option is unset
    pub required: bool,
    /// Accepted tokens (empty = freeform)
    pub allowed_values: Vec<String>,
}

impl ConsoleOption {
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            current: None,
            default: None,
            required: false,
            allowed_values: Vec::new(),
        }
    }

    /// Mark the option as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set both the default and the initial current value
    pub fn with_default(mut self, value: OptionValue) -> Self {
        self.current = Some(value.clone());
        self.default = Some(value);
        self
    }

    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// Parse and validate `raw` without touching the option
    pub fn validate(&self, raw: &str) -> Result<OptionValue, OptionError> {
        let value = self.kind.parse(&self.name, raw)?;

        if !self.allowed_values.is_empty() {
            if let Some(bad) = raw
                .split_whitespace()
                .find(|token| !self.allowed_values.iter().any(|v| v == token))
            {
                return Err(OptionError::InvalidOptionValue {
                    option: self.name.clone(),
                    value: bad.to_string(),
                    reason: format!("expected one of: {}", self.allowed_values.join(", ")),
                });
            }
        }

        Ok(value)
    }

    /// Replace the current value after validation
    pub fn set(&mut self, raw: &str) -> Result<(), OptionError> {
        let value = self.validate(raw)?;
        self.current = Some(value);
        Ok(())
    }

    /// Restore the default value
    pub fn reset(&mut self) {
        self.current = self.default.clone();
    }

    /// Current value rendered for display (empty when unset)
    pub fn current_display(&self) -> String {
        self.current
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    /// Default value rendered for display (`None` when unset)
    pub fn default_display(&self) -> String {
        self.default
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "None".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extension() -> ConsoleOption {
        ConsoleOption::new("EXTENSION", "Extensions", OptionKind::List)
            .with_default(OptionValue::list(["csv"]))
            .with_allowed_values(["csv", "xls", "xlsx", "json", "gml"])
    }

    #[test]
    fn test_set_allowed_tokens() {
        let mut opt = extension();
        opt.set("json gml").unwrap();
        assert_eq!(opt.current, Some(OptionValue::list(["json", "gml"])));
    }

    #[test]
    fn test_set_rejects_any_disallowed_token() {
        let mut opt = extension();
        let err = opt.set("json pdf").unwrap_err();
        match err {
            OptionError::InvalidOptionValue { value, .. } => assert_eq!(value, "pdf"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(opt.current, Some(OptionValue::list(["csv"])));
    }

    #[test]
    fn test_reset_restores_default() {
        let mut opt = extension();
        opt.set("xls").unwrap();
        opt.reset();
        assert_eq!(opt.current, opt.default);
    }

    #[test]
    fn test_required_without_default_is_unset() {
        let opt = ConsoleOption::new("NICK", "Nick", OptionKind::List).required();
        assert!(opt.required);
        assert!(!opt.is_set());
        assert_eq!(opt.current_display(), "");
        assert_eq!(opt.default_display(), "None");
    }
}
