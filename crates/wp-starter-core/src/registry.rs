//! Lookup from a structure name to the factory that builds it
//!
//! Default rule: the last registration marked `is_default` wins; when none is
//! marked, the first registration is the default.

use crate::error::RegistryError;
use crate::structure::Structure;
use crate::ui;
use std::path::PathBuf;

/// Builds a structure scoped to a project directory
pub type StructureFactory = fn(PathBuf) -> Box<dyn Structure>;

struct Registration {
    key: String,
    factory: StructureFactory,
    description: Option<&'static str>,
}

/// Result of looking a key up, after any fallback
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// Key whose factory is used
    pub name: &'a str,
    pub factory: StructureFactory,
    /// Requested key when it was unknown and the default took over
    pub fallback_from: Option<&'a str>,
}

#[derive(Default)]
pub struct StructureRegistry {
    registrations: Vec<Registration>,
    default_key: Option<String>,
}

impl StructureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: &str, factory: StructureFactory, is_default: bool) {
        self.insert(key, factory, None, is_default);
    }

    /// Register with a one-line description shown by the interactive picker
    pub fn register_described(
        &mut self,
        key: &str,
        factory: StructureFactory,
        description: &'static str,
        is_default: bool,
    ) {
        self.insert(key, factory, Some(description), is_default);
    }

    fn insert(
        &mut self,
        key: &str,
        factory: StructureFactory,
        description: Option<&'static str>,
        is_default: bool,
    ) {
        match self.registrations.iter_mut().find(|r| r.key == key) {
            Some(existing) => {
                existing.factory = factory;
                existing.description = description;
            }
            None => self.registrations.push(Registration {
                key: key.to_string(),
                factory,
                description,
            }),
        }

        if is_default || self.default_key.is_none() {
            self.default_key = Some(key.to_string());
        }
    }

    fn registration(&self, key: &str) -> Option<&Registration> {
        self.registrations.iter().find(|r| r.key == key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.registration(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<StructureFactory> {
        self.registration(key).map(|r| r.factory)
    }

    pub fn describe(&self, key: &str) -> Option<&'static str> {
        self.registration(key).and_then(|r| r.description)
    }

    /// `None` until something has been registered
    pub fn default_name(&self) -> Option<&str> {
        self.default_key.as_deref()
    }

    /// Registered keys in registration order
    pub fn names(&self) -> Vec<&str> {
        self.registrations.iter().map(|r| r.key.as_str()).collect()
    }

    /// Find the factory for `key`, substituting the default for unknown keys
    pub fn resolve<'a>(&'a self, key: &'a str) -> Result<Resolved<'a>, RegistryError> {
        if let Some(registration) = self.registration(key) {
            return Ok(Resolved {
                name: &registration.key,
                factory: registration.factory,
                fallback_from: None,
            });
        }

        let default = self
            .default_key
            .as_deref()
            .and_then(|name| self.registration(name))
            .ok_or(RegistryError::Empty)?;

        Ok(Resolved {
            name: &default.key,
            factory: default.factory,
            fallback_from: Some(key),
        })
    }

    /// Build the structure for `key`; unknown keys fall back to the default with a warning
    pub fn create(
        &self,
        key: &str,
        project_path: impl Into<PathBuf>,
    ) -> Result<Box<dyn Structure>, RegistryError> {
        let resolved = self.resolve(key)?;
        if let Some(requested) = resolved.fallback_from {
            ui::warning(&format!(
                "Structure \"{}\" not found, using \"{}\" instead.",
                requested, resolved.name
            ));
        }
        Ok((resolved.factory)(project_path.into()))
    }
}
