//! The question-asking capability used by structures and the CLI flow

use anyhow::Result;

/// Validation hook for free-text answers
pub type Validator = fn(&str) -> Result<(), String>;

/// One entry of a single-selection prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub hint: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            hint: String::new(),
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// Asks the user typed questions and returns the answers
pub trait Prompter: Send + Sync {
    /// Free text. An empty answer yields `default`.
    fn input(&self, message: &str, default: &str, validate: Option<Validator>) -> Result<String>;

    fn confirm(&self, message: &str, default: bool) -> Result<bool>;

    /// Returns the `value` of the picked [`Choice`]
    fn select(&self, message: &str, choices: &[Choice], default: &str) -> Result<String>;
}
