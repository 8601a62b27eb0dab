//! Test doubles for the command runner and prompter capabilities

use crate::prompt::{Choice, Prompter, Validator};
use crate::runtime::{CommandRunner, Invocation};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

/// Records every invocation. Tools are unavailable unless listed, and
/// commands whose command line starts with a listed prefix fail.
#[derive(Default)]
pub struct RecordingRunner {
    available: HashSet<String>,
    failing: Vec<String>,
    runs: Mutex<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn with_tools(tools: &[&str]) -> Self {
        Self {
            available: tools.iter().map(|t| t.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing(mut self, prefix: &str) -> Self {
        self.failing.push(prefix.to_string());
        self
    }

    pub fn runs(&self) -> Vec<Invocation> {
        self.runs.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.runs().iter().map(Invocation::command_line).collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn probe(&self, invocation: &Invocation) -> bool {
        self.available.contains(&invocation.program)
    }

    async fn run(&self, invocation: &Invocation) -> Result<()> {
        self.runs.lock().unwrap().push(invocation.clone());
        let line = invocation.command_line();
        if self.failing.iter().any(|prefix| line.starts_with(prefix)) {
            anyhow::bail!("`{}` failed with exit code: 1", line);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Yes,
    No,
    Pick(String),
    /// Accept whatever default the prompt offers
    Default,
}

/// Replays queued answers and fails on any prompt it was not scripted for
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            asked: Mutex::default(),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    fn next(&self, message: &str) -> Result<Answer> {
        self.asked.lock().unwrap().push(message.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected prompt: {}", message))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, message: &str, default: &str, validate: Option<Validator>) -> Result<String> {
        let value = match self.next(message)? {
            Answer::Text(text) if text.is_empty() => default.to_string(),
            Answer::Text(text) => text,
            Answer::Default => default.to_string(),
            other => anyhow::bail!("expected text for '{}', got {:?}", message, other),
        };
        if let Some(validate) = validate {
            validate(&value).map_err(|e| anyhow::anyhow!("{}: {}", message, e))?;
        }
        Ok(value)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        match self.next(message)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            Answer::Default => Ok(default),
            other => anyhow::bail!("expected yes/no for '{}', got {:?}", message, other),
        }
    }

    fn select(&self, message: &str, choices: &[Choice], default: &str) -> Result<String> {
        let value = match self.next(message)? {
            Answer::Pick(value) => value,
            Answer::Default => default.to_string(),
            other => anyhow::bail!("expected a pick for '{}', got {:?}", message, other),
        };
        if !choices.iter().any(|c| c.value == value) {
            anyhow::bail!("'{}' is not a choice of '{}'", value, message);
        }
        Ok(value)
    }
}
