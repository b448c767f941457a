//! Option values: tagged representation of what an operator typed
//!
//! Every console option declares an [`OptionKind`] up front. Raw input from
//! `set` is parsed into the matching [`OptionValue`] variant once, so the
//! argument builders never have to re-split or coerce strings later.

use super::error::OptionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of the value an option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Free text kept verbatim (URL, output folder, ...)
    Text,
    /// Positive integer (thread count)
    Integer,
    /// Whitespace-separated list of tokens (nicks, platforms, extensions)
    List,
}

/// Current or default value of a console option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OptionValue {
    Text(String),
    Integer(u32),
    List(Vec<String>),
}

impl OptionKind {
    /// Parse raw console input into a value of this kind.
    ///
    /// `option` is only used for error reporting.
    pub fn parse(self, option: &str, raw: &str) -> Result<OptionValue, OptionError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(OptionError::MissingValue(option.to_string()));
        }

        match self {
            OptionKind::Text => Ok(OptionValue::Text(raw.to_string())),
            OptionKind::Integer => match raw.parse::<u32>() {
                Ok(n) if n > 0 => Ok(OptionValue::Integer(n)),
                _ => Err(OptionError::InvalidOptionValue {
                    option: option.to_string(),
                    value: raw.to_string(),
                    reason: "expected a positive number".to_string(),
                }),
            },
            OptionKind::List => Ok(OptionValue::List(
                raw.split_whitespace().map(str::to_string).collect(),
            )),
        }
    }
}

impl OptionValue {
    /// Kind of this value
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Text(_) => OptionKind::Text,
            OptionValue::Integer(_) => OptionKind::Integer,
            OptionValue::List(_) => OptionKind::List,
        }
    }

    /// Tokens as they appear on a command line
    pub fn tokens(&self) -> Vec<String> {
        match self {
            OptionValue::Text(s) => vec![s.clone()],
            OptionValue::Integer(n) => vec![n.to_string()],
            OptionValue::List(items) => items.clone(),
        }
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptionValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn text(value: impl Into<String>) -> Self {
        OptionValue::Text(value.into())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(s) => write!(f, "{}", s),
            OptionValue::Integer(n) => write!(f, "{}", n),
            OptionValue::List(items) => write!(f, "{}", items.join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_splits_on_whitespace() {
        let value = OptionKind::List.parse("NICK", "  john   doe ").unwrap();
        assert_eq!(value, OptionValue::list(["john", "doe"]));
        assert_eq!(value.to_string(), "john doe");
    }

    #[test]
    fn test_parse_text_is_verbatim() {
        let value = OptionKind::Text.parse("URL", "http://example.com/a b").unwrap();
        assert_eq!(value, OptionValue::text("http://example.com/a b"));
        assert_eq!(value.tokens(), vec!["http://example.com/a b".to_string()]);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(
            OptionKind::Integer.parse("THREADS", "8").unwrap(),
            OptionValue::Integer(8)
        );
        assert!(matches!(
            OptionKind::Integer.parse("THREADS", "eight"),
            Err(OptionError::InvalidOptionValue { .. })
        ));
        assert!(OptionKind::Integer.parse("THREADS", "0").is_err());
    }

    #[test]
    fn test_parse_empty_is_missing_value() {
        assert_eq!(
            OptionKind::List.parse("NICK", "   "),
            Err(OptionError::MissingValue("NICK".to_string()))
        );
    }

    #[test]
    fn test_integer_tokens() {
        assert_eq!(OptionValue::Integer(32).tokens(), vec!["32".to_string()]);
        assert_eq!(OptionValue::Integer(32).kind(), OptionKind::Integer);
    }
}
