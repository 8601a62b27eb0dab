//! Project orchestration: validate the target, create it, hand off to a structure

use crate::error::{ProjectError, ScaffoldError};
use crate::registry::StructureRegistry;
use crate::structure::ScaffoldContext;
use crate::ui;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const FORBIDDEN_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// What to create and with which structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    /// Registry key; `None` means the registry default
    pub structure: Option<String>,
}

impl ProjectConfig {
    pub fn new(name: impl Into<String>, structure: Option<String>) -> Result<Self, ScaffoldError> {
        let name = name.into().trim().to_string();
        validate_project_name(&name).map_err(|reason| ScaffoldError::InvalidProjectName {
            name: name.clone(),
            reason,
        })?;
        Ok(Self { name, structure })
    }
}

/// Check that `name` can be used as a single directory name
pub fn validate_project_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Project name cannot be empty");
    }
    if name == "." || name == ".." {
        return Err("Project name cannot be '.' or '..'");
    }
    if name.contains(FORBIDDEN_CHARS) {
        return Err("Project name cannot contain path separators or any of < > : \" | ? *");
    }
    if name.chars().any(char::is_control) {
        return Err("Project name cannot contain control characters");
    }
    Ok(())
}

pub struct Project<'a> {
    config: ProjectConfig,
    registry: &'a StructureRegistry,
}

impl<'a> Project<'a> {
    pub fn new(config: ProjectConfig, registry: &'a StructureRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Configured key, else the registry default
    pub fn structure_type(&self) -> Option<&str> {
        self.config
            .structure
            .as_deref()
            .or_else(|| self.registry.default_name())
    }

    /// Create `base_dir/<name>` and populate it.
    ///
    /// An existing target is refused without touching the filesystem. Any
    /// other failure is reported once and returned; nothing is cleaned up.
    pub async fn initialize(
        &self,
        base_dir: &Path,
        ctx: &ScaffoldContext<'_>,
    ) -> Result<PathBuf, ProjectError> {
        ui::welcome();
        ui::section_header("Project Initialization");

        let project_path = base_dir.join(&self.config.name);

        if project_path.exists() {
            let err = ProjectError::AlreadyExists {
                name: self.config.name.clone(),
            };
            ui::warning(&err.to_string());
            return Err(err);
        }

        match self.create(&project_path, ctx).await {
            Ok(()) => {
                let files = count_files(&project_path);
                ui::success(&format!(
                    "Created {} file{} in {}",
                    files,
                    if files == 1 { "" } else { "s" },
                    self.config.name
                ));
                Ok(project_path)
            }
            Err(err) => {
                ui::warning(&format!("Error creating project: {}", err));
                Err(err)
            }
        }
    }

    async fn create(&self, project_path: &Path, ctx: &ScaffoldContext<'_>) -> Result<(), ProjectError> {
        tokio::fs::create_dir(project_path)
            .await
            .map_err(|source| ProjectError::CreateDirectory {
                path: project_path.to_path_buf(),
                source,
            })?;

        let key = self.structure_type().unwrap_or_default();
        let structure = self.registry.create(key, project_path)?;

        ui::section_header(&format!("Setting Up {} Structure", capitalize(structure.kind())));

        structure.generate(ctx).await.map_err(ProjectError::Generate)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Dependency trees installed by Composer and npm, not counted as generated files
const SKIPPED_DIRS: &[&str] = &["vendor", "node_modules"];

fn count_files(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            !(entry.file_type().is_dir()
                && SKIPPED_DIRS.iter().any(|skip| entry.file_name() == *skip))
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}
