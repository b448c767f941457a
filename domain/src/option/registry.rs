//! Option registry: the per-tool table behind `set`, `unset` and `show`
//!
//! Options keep their declaration order, which is also the order used by
//! `show options`. Names are matched case-insensitively so `set nick foo`
//! and `set NICK foo` behave the same.

use super::entry::ConsoleOption;
use super::error::OptionError;
use super::value::OptionValue;

/// Literal accepted by `unset` to reset every option at once
pub const UNSET_ALL: &str = "all";

/// Ordered collection of console options for one tool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRegistry {
    options: Vec<ConsoleOption>,
}

/// Row used by `show options` and `help`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescription<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub required: bool,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option (builder style)
    pub fn register(mut self, option: ConsoleOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn get(&self, name: &str) -> Result<&ConsoleOption, OptionError> {
        self.options
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| OptionError::UnknownOption(name.to_string()))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut ConsoleOption, OptionError> {
        self.options
            .iter_mut()
            .find(|o| o.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| OptionError::UnknownOption(name.to_string()))
    }

    /// Current value of an option, `None` if unknown or unset
    pub fn value(&self, name: &str) -> Option<&OptionValue> {
        self.get(name).ok().and_then(|o| o.current.as_ref())
    }

    /// Current value of an option as command-line tokens
    pub fn tokens(&self, name: &str) -> Vec<String> {
        self.value(name).map(OptionValue::tokens).unwrap_or_default()
    }

    /// Validate and store a new value. On failure nothing changes.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<&ConsoleOption, OptionError> {
        let option = self.get_mut(name)?;
        option.set(raw)?;
        Ok(option)
    }

    /// Reset one option (or every option with [`UNSET_ALL`]) to its default
    pub fn unset(&mut self, name: &str) -> Result<(), OptionError> {
        if name.eq_ignore_ascii_case(UNSET_ALL) {
            self.reset_all();
            return Ok(());
        }
        self.get_mut(name)?.reset();
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for option in &mut self.options {
            option.reset();
        }
    }

    pub fn all_required_satisfied(&self) -> bool {
        self.options.iter().all(|o| !o.required || o.is_set())
    }

    /// Names of required options that still have no value
    pub fn missing_required(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.required && !o.is_set())
            .map(|o| o.name.as_str())
            .collect()
    }

    pub fn describe(&self) -> Vec<OptionDescription<'_>> {
        self.options
            .iter()
            .map(|o| OptionDescription {
                name: &o.name,
                description: &o.description,
                required: o.required,
            })
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConsoleOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
