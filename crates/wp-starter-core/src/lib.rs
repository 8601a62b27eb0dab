//! WP Starter Core - Shared library for WordPress project scaffolding
//!
//! This library creates a new project directory and fills it with one of the
//! registered WordPress layouts. The binary (`wp-starter`) only parses
//! arguments, builds the registry and hands a [`ProjectConfig`] to [`Project`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Capabilities** - [`CommandRunner`] for external tools and
//!   [`Prompter`] for questions, both traits so tests can swap them out
//! - **Layer 2: Structures** - the [`Structure`] trait, its shared helpers in
//!   [`ProjectLayout`], and the `classic`/`bedrock` variants
//! - **Layer 3: Orchestration** - [`StructureRegistry`] and [`Project`]
//! - **Layer 4: CLI/TUI Interface** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-backed prompter and interactive flow
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use wp_starter_core::{structures, Project, ProjectConfig, ScaffoldContext};
//!
//! let registry = structures::builtin_registry();
//! let config = ProjectConfig::new("my-site", Some("bedrock".into()))?;
//! let ctx = ScaffoldContext::new(&runner, &prompter, &settings);
//! Project::new(config, &registry).initialize(&cwd, &ctx).await?;
//! ```

pub mod env;
pub mod error;
pub mod project;
pub mod prompt;
pub mod registry;
pub mod runtime;
pub mod settings;
pub mod structure;
pub mod structures;
pub mod templates;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use error::{ProjectError, RegistryError, ScaffoldError};
pub use project::{Project, ProjectConfig};
pub use prompt::{Choice, Prompter};
pub use registry::{StructureFactory, StructureRegistry};
pub use runtime::{CommandRunner, Invocation, SystemRunner, Tool};
pub use settings::StarterSettings;
pub use structure::{ProjectLayout, ScaffoldContext, Structure};

#[cfg(feature = "tui")]
pub use tui::{collect_config, ClackPrompter};

/// Product name shown in banners and generated READMEs
pub const PRODUCT_NAME: &str = "WordPress Starter";
