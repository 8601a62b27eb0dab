//! Bedrock layout: Composer-managed core under `web/wp`, content under `web/app`

use super::addons;
use crate::env::{render_env, EnvSettings, Salts, WpEnv};
use crate::prompt::Choice;
use crate::runtime::COMPOSER;
use crate::structure::{ProjectLayout, ScaffoldContext, Structure};
use crate::templates;
use crate::ui::{self, palette};
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

pub const KIND: &str = "bedrock";

const WEB_DIRS: &[&str] = &[
    "web",
    "web/app",
    "web/app/themes",
    "web/app/plugins",
    "web/app/uploads",
    "config",
    "config/environments",
];

pub struct BedrockStructure {
    layout: ProjectLayout,
}

impl BedrockStructure {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            layout: ProjectLayout::new(project_path),
        }
    }

    pub fn boxed(project_path: PathBuf) -> Box<dyn Structure> {
        Box::new(Self::new(project_path))
    }

    fn display_bedrock_info(&self) {
        self.layout.display_info(
            "Bedrock WordPress Structure",
            "Bedrock is a modern WordPress stack that helps you get started with the\n\
             best development tools and project structure. It offers:\n\
             \n\
             • Better folder structure\n\
             • Dependency management with Composer\n\
             • Easy WordPress configuration with environment specific files\n\
             • Environment variables with .env files\n\
             • Autoloader for mu-plugins",
            palette::MAUVE,
        );
    }

    async fn generate_with_composer(&self, ctx: &ScaffoldContext<'_>) -> Result<()> {
        ui::section_header("Bedrock Installation");
        ui::info("Using Composer to create a Bedrock project");

        let root = self.layout.path();
        let mut create = COMPOSER
            .command()
            .args(["create-project", "roots/bedrock"])
            .arg(root.display().to_string());
        if let Some(parent) = root.parent().filter(|p| !p.as_os_str().is_empty()) {
            create = create.current_dir(parent);
        }

        ui::processing("Creating Bedrock project...");
        ctx.runner.run(&create).await?;

        self.layout
            .generate_readme(
                KIND,
                &templates::bedrock_getting_started_section(self.layout.name()),
            )
            .await?;

        println!();
        ui::success("Bedrock project has been created with Composer!");

        Ok(())
    }

    async fn generate_manually(&self) -> Result<()> {
        ui::section_header("Creating Manual Bedrock Structure");

        self.layout.generate_readme(KIND, "").await?;

        ui::processing("Creating directory structure...");
        self.layout.create_dirs(WEB_DIRS).await?;

        ui::processing("Creating configuration files...");
        self.layout
            .write_file(".env.example", templates::BEDROCK_ENV_EXAMPLE)
            .await?;
        let manifest = templates::bedrock_composer_json(self.layout.name())?;
        self.layout.write_file("composer.json", &manifest).await?;

        println!();
        ui::warning(
            "Composer wasn't used. You'll need to manually run composer install to complete the setup.",
        );

        Ok(())
    }

    async fn configure(&self, ctx: &ScaffoldContext<'_>) -> Result<()> {
        self.setup_env_file(ctx).await?;
        addons::run(&self.layout, ctx).await
    }

    async fn setup_env_file(&self, ctx: &ScaffoldContext<'_>) -> Result<()> {
        ui::section_header("Environment Configuration");

        if !ctx.prompter.confirm(
            "🔧 Would you like to set up the .env file with database credentials?",
            true,
        )? {
            ui::info("Skipping .env setup. Copy .env.example to .env and edit it later.");
            return Ok(());
        }

        let example_path = self.layout.join(".env.example");
        if !tokio::fs::try_exists(&example_path).await.unwrap_or(false) {
            ui::warning(".env.example not found, skipping .env setup.");
            return Ok(());
        }
        let template = tokio::fs::read_to_string(&example_path).await?;

        let settings = self.ask_env_settings(ctx)?;
        let salts = Salts::generate(ctx.settings.salt_length);
        self.layout
            .write_file(".env", &render_env(&template, &settings, &salts))
            .await?;

        println!();
        ui::success(".env file has been created with your settings and fresh salts!");

        let password = if settings.db_password.is_empty() {
            "[empty]"
        } else {
            settings.db_password.as_str()
        };
        ui::summary(
            "🔐 Environment Configuration",
            palette::MAUVE,
            &[
                ("Database name", settings.db_name.as_str()),
                ("Database user", settings.db_user.as_str()),
                ("Database password", password),
                ("Database host", settings.db_host.as_str()),
                ("Environment", settings.wp_env.display_name()),
                ("Site URL", settings.wp_home.as_str()),
            ],
        );

        Ok(())
    }

    fn ask_env_settings(&self, ctx: &ScaffoldContext<'_>) -> Result<EnvSettings> {
        let defaults = &ctx.settings.env_defaults;
        let prompter = ctx.prompter;

        let db_name = prompter.input("Database name:", &defaults.db_name, Some(validate_required))?;
        let db_user = prompter.input("Database user:", &defaults.db_user, Some(validate_required))?;
        let db_password = prompter.input("Database password:", &defaults.db_password, None)?;
        let db_host = prompter.input("Database host:", &defaults.db_host, Some(validate_required))?;
        let wp_home = prompter.input("Site URL (WP_HOME):", &defaults.wp_home, Some(validate_home_url))?;

        let choices: Vec<Choice> = WpEnv::ALL
            .iter()
            .map(|env| Choice::new(env.as_str(), env.display_name()))
            .collect();
        let picked = prompter.select(
            "Environment (WP_ENV):",
            &choices,
            WpEnv::default().as_str(),
        )?;
        let wp_env = picked.parse::<WpEnv>().map_err(anyhow::Error::msg)?;

        Ok(EnvSettings {
            db_name,
            db_user,
            db_password,
            db_host,
            wp_env,
            wp_home,
        })
    }
}

fn validate_required(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        Err("This value is required".to_string())
    } else {
        Ok(())
    }
}

/// `WP_HOME` must be an absolute http(s) URL with a host
pub fn validate_home_url(input: &str) -> Result<(), String> {
    let url = Url::parse(input.trim()).map_err(|e| format!("Invalid URL: {}", e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err("URL must start with http:// or https://".to_string());
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err("URL must include a host".to_string());
    }
    Ok(())
}

#[async_trait]
impl Structure for BedrockStructure {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    async fn generate(&self, ctx: &ScaffoldContext<'_>) -> Result<()> {
        self.display_bedrock_info();

        let installed = if COMPOSER.is_available(ctx.runner).await {
            match self.generate_with_composer(ctx).await {
                Ok(()) => true,
                Err(e) => {
                    ui::warning(&format!("Error during structure generation: {:#}", e));
                    false
                }
            }
        } else {
            ui::warning(&COMPOSER.unavailable_message());
            false
        };

        if !installed {
            self.generate_manually().await?;
        }

        // Prompt errors here propagate; only the Composer step falls back
        self.configure(ctx).await?;
        self.layout.display_completion();
        Ok(())
    }
}
