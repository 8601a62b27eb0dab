//! Typed errors for the registry, structures and project orchestration

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while looking up a structure
#[derive(Debug, Error)]
pub enum RegistryError {
    /// `create` was called before any structure was registered
    #[error("no structures are registered")]
    Empty,
}

/// Errors raised by structures and their configuration
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A structure did not provide its own `generate`
    #[error("structure '{0}' does not implement generate()")]
    NotImplemented(&'static str),

    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },
}

/// Errors raised while initializing a project
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Directory '{name}' already exists. Please choose a different name.")]
    AlreadyExists { name: String },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("{0:#}")]
    Generate(anyhow::Error),
}
