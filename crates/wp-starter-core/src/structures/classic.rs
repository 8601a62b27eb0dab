//! Classic WordPress layout: core files at the root, content under `wp-content/`

use crate::runtime::WP_CLI;
use crate::structure::{ProjectLayout, ScaffoldContext, Structure};
use crate::templates;
use crate::ui::{self, palette};
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub const KIND: &str = "classic";

const CONTENT_DIRS: &[&str] = &[
    "wp-content",
    "wp-content/themes",
    "wp-content/plugins",
    "wp-content/uploads",
];

pub struct ClassicStructure {
    layout: ProjectLayout,
}

impl ClassicStructure {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            layout: ProjectLayout::new(project_path),
        }
    }

    pub fn boxed(project_path: PathBuf) -> Box<dyn Structure> {
        Box::new(Self::new(project_path))
    }

    fn display_classic_info(&self) {
        self.layout.display_info(
            "Classic WordPress Structure",
            "The Classic WordPress setup provides a traditional WordPress installation\n\
             with standard folder organization. It offers:\n\
             \n\
             • Standard WordPress core files\n\
             • Traditional wp-content folder structure\n\
             • Standard wp-config.php configuration\n\
             • Compatibility with most WordPress plugins and themes\n\
             • Familiar environment for WordPress developers",
            palette::BLUE,
        );
    }

    async fn generate_with_wp_cli(&self, ctx: &ScaffoldContext<'_>) -> Result<()> {
        ui::section_header("WordPress Core Installation");
        ui::info("Using WP-CLI to download and configure WordPress");

        let root = self.layout.path();

        ui::processing("Downloading WordPress core...");
        ctx.runner
            .run(
                &WP_CLI
                    .command()
                    .args(["core", "download", "--force"])
                    .current_dir(root),
            )
            .await?;

        ui::processing("Creating a basic wp-config.php file...");
        let db = &ctx.settings.wp_config;
        ctx.runner
            .run(
                &WP_CLI
                    .command()
                    .args(["config", "create"])
                    .arg(format!("--dbname={}", db.db_name))
                    .arg(format!("--dbuser={}", db.db_user))
                    .arg(format!("--dbpass={}", db.db_password))
                    .arg(format!("--dbhost={}", db.db_host))
                    .arg("--skip-check")
                    .current_dir(root),
            )
            .await?;

        self.layout
            .generate_readme(KIND, templates::classic_configuration_section())
            .await?;

        println!();
        ui::success("WordPress core has been downloaded and configured!");

        let name = format!("{} (update with your own)", db.db_name);
        let user = format!("{} (update with your own)", db.db_user);
        let password = format!("{} (update with your own)", db.db_password);
        ui::summary(
            "🛢️  Database Configuration: edit wp-config.php to set your credentials",
            palette::MAUVE,
            &[
                ("Database name", name.as_str()),
                ("Database user", user.as_str()),
                ("Database password", password.as_str()),
                ("Database host", db.db_host.as_str()),
            ],
        );

        Ok(())
    }

    async fn generate_manually(&self) -> Result<()> {
        ui::section_header("Creating Manual WordPress Structure");

        self.layout.generate_readme(KIND, "").await?;

        ui::processing("Creating directory structure...");
        self.layout.create_dirs(CONTENT_DIRS).await?;

        ui::processing("Creating placeholder files...");
        self.layout
            .write_file("index.php", templates::CLASSIC_INDEX_PHP)
            .await?;

        println!();
        ui::warning("WP-CLI wasn't used. You'll need to manually download WordPress.");

        Ok(())
    }
}

#[async_trait]
impl Structure for ClassicStructure {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    async fn generate(&self, ctx: &ScaffoldContext<'_>) -> Result<()> {
        self.display_classic_info();

        if WP_CLI.is_available(ctx.runner).await {
            match self.generate_with_wp_cli(ctx).await {
                Ok(()) => {
                    self.layout.display_completion();
                    return Ok(());
                }
                Err(e) => ui::warning(&format!("Error during structure generation: {:#}", e)),
            }
        } else {
            ui::warning(&WP_CLI.unavailable_message());
        }

        self.generate_manually().await?;
        self.layout.display_completion();
        Ok(())
    }
}
