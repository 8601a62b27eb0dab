//! External tools the structures can delegate to

use super::runner::{CommandRunner, Invocation};

/// Configuration for a CLI tool
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    /// Name of the tool binary (e.g., "wp")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Arguments that make the tool print something harmless and exit 0
    pub probe_args: &'static [&'static str],
    /// URL to the documentation
    pub docs_url: &'static str,
}

pub const WP_CLI: Tool = Tool {
    name: "wp",
    display_name: "WP-CLI",
    probe_args: &["--info"],
    docs_url: "https://wp-cli.org",
};

pub const COMPOSER: Tool = Tool {
    name: "composer",
    display_name: "Composer",
    probe_args: &["--version"],
    docs_url: "https://getcomposer.org/download/",
};

pub const NPM: Tool = Tool {
    name: "npm",
    display_name: "npm",
    probe_args: &["--version"],
    docs_url: "https://nodejs.org",
};

impl Tool {
    /// Start building an invocation of this tool
    pub fn command(&self) -> Invocation {
        Invocation::new(self.name)
    }

    pub fn probe_invocation(&self) -> Invocation {
        self.command().args(self.probe_args.iter().copied())
    }

    /// Check if the tool can be run
    pub async fn is_available(&self, runner: &dyn CommandRunner) -> bool {
        runner.probe(&self.probe_invocation()).await
    }

    /// Warning shown when the tool is missing and a manual path takes over
    pub fn unavailable_message(&self) -> String {
        format!(
            "{} is not installed or not in PATH. Falling back to manual folder creation. ({})",
            self.display_name, self.docs_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_invocations() {
        assert_eq!(WP_CLI.probe_invocation().command_line(), "wp --info");
        assert_eq!(COMPOSER.probe_invocation().command_line(), "composer --version");
        assert_eq!(NPM.probe_invocation().command_line(), "npm --version");
    }

    #[test]
    fn test_unavailable_message_names_tool() {
        let message = COMPOSER.unavailable_message();
        assert!(message.starts_with("Composer is not installed"));
        assert!(message.contains("getcomposer.org"));
    }
}
