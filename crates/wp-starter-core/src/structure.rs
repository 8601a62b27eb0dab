//! The contract every scaffold variant implements, plus its shared helpers

use crate::error::ScaffoldError;
use crate::prompt::Prompter;
use crate::runtime::CommandRunner;
use crate::settings::StarterSettings;
use crate::{templates, ui};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Collaborators handed to [`Structure::generate`]
#[derive(Clone, Copy)]
pub struct ScaffoldContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub prompter: &'a dyn Prompter,
    pub settings: &'a StarterSettings,
}

impl<'a> ScaffoldContext<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        prompter: &'a dyn Prompter,
        settings: &'a StarterSettings,
    ) -> Self {
        Self {
            runner,
            prompter,
            settings,
        }
    }
}

/// A named scaffold variant producing a specific directory/file layout
#[async_trait]
pub trait Structure: Send + Sync {
    /// Registry key of this variant (e.g., "classic")
    fn kind(&self) -> &'static str;

    fn layout(&self) -> &ProjectLayout;

    /// Populate the project directory.
    ///
    /// Every variant overrides this; reaching the default is a programming error.
    async fn generate(&self, _ctx: &ScaffoldContext<'_>) -> Result<()> {
        Err(ScaffoldError::NotImplemented(self.kind()).into())
    }
}

/// Location of a project plus the file helpers structures build on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    project_path: PathBuf,
    project_name: String,
}

impl ProjectLayout {
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        let project_path = project_path.into();
        let project_name = project_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            project_path,
            project_name,
        }
    }

    pub fn path(&self) -> &Path {
        &self.project_path
    }

    pub fn name(&self) -> &str {
        &self.project_name
    }

    /// Absolute path of `relative` inside the project
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.project_path.join(relative)
    }

    /// `path` as shown to the user: relative to the directory holding the project
    pub fn display_path(&self, path: &Path) -> String {
        let base = self.project_path.parent().unwrap_or(Path::new(""));
        path.strip_prefix(base)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Write (or overwrite) a file relative to the project root
    pub async fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        ui::created(&self.display_path(&path));
        Ok(path)
    }

    /// Create a directory (and its parents) relative to the project root
    pub async fn create_dir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.join(relative);
        fs::create_dir_all(&path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        ui::created(&self.display_path(&path));
        Ok(path)
    }

    pub async fn create_dirs(&self, relatives: &[&str]) -> Result<()> {
        for relative in relatives {
            self.create_dir(relative).await?;
        }
        Ok(())
    }

    /// Write `README.md` for the `kind` structure, followed by `extra` markdown
    pub async fn generate_readme(&self, kind: &str, extra: &str) -> Result<PathBuf> {
        let content = templates::readme(&self.project_name, kind, extra);
        self.write_file("README.md", &content).await
    }

    pub fn display_info(&self, title: &str, description: &str, color: ui::palette::Rgb) {
        ui::panel(title, description, color);
    }

    pub fn display_completion(&self) {
        ui::completion(&self.project_name);
    }
}
