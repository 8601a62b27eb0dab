//! Charm-style CLI prompts using cliclack

use crate::error::RegistryError;
use crate::project::{validate_project_name, ProjectConfig};
use crate::prompt::{Choice, Prompter, Validator};
use crate::registry::StructureRegistry;
use anyhow::Result;

/// [`Prompter`] backed by cliclack's inline prompts
#[derive(Debug, Clone, Copy, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn input(&self, message: &str, default: &str, validate: Option<Validator>) -> Result<String> {
        let mut input = cliclack::input(message);
        if default.is_empty() {
            input = input.required(false);
        } else {
            input = input.placeholder(default).default_input(default);
        }
        if let Some(validate) = validate {
            input = input.validate(move |value: &String| validate(value));
        }

        let value: String = input.interact()?;
        Ok(value)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        let answer = cliclack::confirm(message).initial_value(default).interact()?;
        Ok(answer)
    }

    fn select(&self, message: &str, choices: &[Choice], default: &str) -> Result<String> {
        let mut select = cliclack::select(message);
        for choice in choices {
            select = select.item(choice.value.clone(), &choice.label, &choice.hint);
        }
        if choices.iter().any(|c| c.value == default) {
            select = select.initial_value(default.to_string());
        }

        let value: String = select.interact()?;
        Ok(value)
    }
}

/// Build the [`ProjectConfig`] for this run.
///
/// With a name from the command line nothing is asked. Otherwise the user is
/// asked for a name, a structure (unless one was given) and a confirmation;
/// declining goes back to the structure question.
pub fn collect_config(
    registry: &StructureRegistry,
    prompter: &dyn Prompter,
    name: Option<String>,
    structure: Option<String>,
) -> Result<ProjectConfig> {
    if let Some(name) = name {
        return Ok(ProjectConfig::new(name, structure)?);
    }

    cliclack::intro(crate::PRODUCT_NAME)?;
    let config = ask_config(registry, prompter, structure)?;
    cliclack::outro(format!(
        "Creating '{}' with the {} structure",
        config.name,
        config.structure.as_deref().unwrap_or_default()
    ))?;

    Ok(config)
}

fn ask_config(
    registry: &StructureRegistry,
    prompter: &dyn Prompter,
    mut structure: Option<String>,
) -> Result<ProjectConfig> {
    let name = prompter.input("Project name:", "", Some(validate_name))?;

    loop {
        let picked = match structure.take() {
            Some(given) => given,
            None => select_structure(registry, prompter)?,
        };

        let confirmed = prompter.confirm(
            &format!("Create '{}' with the {} structure?", name.trim(), picked),
            true,
        )?;
        if confirmed {
            return Ok(ProjectConfig::new(name, Some(picked))?);
        }
    }
}

fn select_structure(registry: &StructureRegistry, prompter: &dyn Prompter) -> Result<String> {
    let default = registry.default_name().ok_or(RegistryError::Empty)?;

    let choices: Vec<Choice> = registry
        .names()
        .into_iter()
        .map(|key| {
            let choice = Choice::new(key, key);
            match registry.describe(key) {
                Some(description) => choice.hint(description),
                None => choice,
            }
        })
        .collect();

    prompter.select("Select a folder structure:", &choices, default)
}

fn validate_name(input: &str) -> Result<(), String> {
    validate_project_name(input).map_err(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::builtin_registry;
    use crate::testing::{Answer, ScriptedPrompter};

    #[test]
    fn test_name_from_flags_skips_prompts() {
        let registry = builtin_registry();
        let prompter = ScriptedPrompter::default();

        let config = collect_config(
            &registry,
            &prompter,
            Some("site".to_string()),
            Some("bedrock".to_string()),
        )
        .unwrap();

        assert_eq!(config.name, "site");
        assert_eq!(config.structure.as_deref(), Some("bedrock"));
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_invalid_name_from_flags_is_rejected() {
        let registry = builtin_registry();
        let prompter = ScriptedPrompter::default();

        assert!(collect_config(&registry, &prompter, Some("a/b".to_string()), None).is_err());
    }

    #[test]
    fn test_declining_loops_back_to_structure() {
        let registry = builtin_registry();
        let prompter = ScriptedPrompter::new([
            Answer::Text("site".to_string()),
            Answer::Default,
            Answer::No,
            Answer::Pick("bedrock".to_string()),
            Answer::Yes,
        ]);

        let config = ask_config(&registry, &prompter, None).unwrap();

        assert_eq!(config.name, "site");
        assert_eq!(config.structure.as_deref(), Some("bedrock"));
        let asked = prompter.asked();
        assert_eq!(asked.len(), 5);
        assert_eq!(asked[1], asked[3]);
        assert_eq!(asked[4], "Create 'site' with the bedrock structure?");
    }

    #[test]
    fn test_given_structure_is_only_used_on_first_pass() {
        let registry = builtin_registry();
        let prompter = ScriptedPrompter::new([
            Answer::Text("site".to_string()),
            Answer::No,
            Answer::Default,
            Answer::Yes,
        ]);

        let config = ask_config(&registry, &prompter, Some("bedrock".to_string())).unwrap();

        assert_eq!(config.structure.as_deref(), Some("classic"));
        assert_eq!(prompter.asked()[1], "Create 'site' with the bedrock structure?");
    }

    #[test]
    fn test_invalid_interactive_name_fails_validation() {
        let registry = builtin_registry();
        let prompter = ScriptedPrompter::new([Answer::Text("..".to_string())]);

        assert!(ask_config(&registry, &prompter, None).is_err());
    }

    #[test]
    fn test_empty_registry_cannot_offer_structures() {
        let registry = StructureRegistry::new();
        let prompter = ScriptedPrompter::new([Answer::Text("site".to_string())]);

        let err = ask_config(&registry, &prompter, None).unwrap_err();
        assert!(err.downcast_ref::<RegistryError>().is_some());
    }
}
