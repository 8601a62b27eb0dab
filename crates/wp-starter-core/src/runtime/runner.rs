//! Running external commands with an explicit working directory

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// A program, its arguments and the directory it runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in `dir` instead of the process working directory
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// `program arg1 arg2 ...`, used for display and matching
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Capability for running external programs
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Best-effort availability check. Any failure means "unavailable".
    async fn probe(&self, invocation: &Invocation) -> bool;

    /// Run to completion with stdio inherited. Non-zero exit is an error.
    async fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Runs commands on the host system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(invocation: &Invocation) -> TokioCommand {
        let mut command = TokioCommand::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.cwd {
            command.current_dir(dir);
        }
        command
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn probe(&self, invocation: &Invocation) -> bool {
        Self::command(invocation)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }

    async fn run(&self, invocation: &Invocation) -> Result<()> {
        crate::ui::running(&invocation.command_line());

        let status = Self::command(invocation)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("Failed to start `{}`", invocation))?;

        if !status.success() {
            anyhow::bail!(
                "`{}` failed with exit code: {}",
                invocation,
                status.code().unwrap_or(-1)
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_joins_program_and_args() {
        let invocation = Invocation::new("wp")
            .args(["core", "download"])
            .arg("--force");
        assert_eq!(invocation.command_line(), "wp core download --force");
        assert_eq!(invocation.to_string(), "wp core download --force");
        assert!(invocation.cwd.is_none());
    }

    #[test]
    fn test_current_dir_is_recorded() {
        let invocation = Invocation::new("npm").arg("install").current_dir("/tmp/site");
        assert_eq!(invocation.cwd, Some(PathBuf::from("/tmp/site")));
    }

    #[tokio::test]
    async fn test_probe_missing_program_is_unavailable() {
        let runner = SystemRunner;
        let invocation = Invocation::new("wp-starter-definitely-not-installed").arg("--version");
        assert!(!runner.probe(&invocation).await);
    }

    #[tokio::test]
    async fn test_run_missing_program_fails() {
        let runner = SystemRunner;
        let invocation = Invocation::new("wp-starter-definitely-not-installed");
        let err = runner.run(&invocation).await.unwrap_err();
        assert!(err.to_string().contains("Failed to start"));
    }
}
