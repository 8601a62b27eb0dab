//! External tool execution
//!
//! This module provides:
//! - The [`CommandRunner`] capability and its tokio-backed [`SystemRunner`]
//! - [`Tool`] descriptors for WP-CLI, Composer and npm

pub mod runner;
pub mod tool;

pub use runner::{CommandRunner, Invocation, SystemRunner};
pub use tool::{Tool, COMPOSER, NPM, WP_CLI};
