//! Static file contents written by the manual generation paths

use anyhow::{Context, Result};
use serde_json::json;

/// Placeholder written to `index.php` for a classic project
pub const CLASSIC_INDEX_PHP: &str =
    "<?php\n// Silence is golden.\n// This is a placeholder for the WordPress installation.\n";

/// Template for a Bedrock `.env`, written as `.env.example`
pub const BEDROCK_ENV_EXAMPLE: &str = "DB_NAME=database_name\n\
DB_USER=database_user\n\
DB_PASSWORD=database_password\n\
\n\
WP_ENV=development\n\
WP_HOME=http://example.com\n\
WP_SITEURL=${WP_HOME}/wp\n";

/// README contents for `project_name` scaffolded with the `kind` structure
pub fn readme(project_name: &str, kind: &str, extra: &str) -> String {
    let summary = if kind == "classic" {
        "Standard WordPress installation with the latest WordPress core."
    } else {
        "Modern WordPress stack with improved folder structure and security."
    };

    format!(
        "# {}\n\nWordPress project created with {} using the {} structure.\n\n## Structure\n{}\n{}",
        project_name,
        crate::PRODUCT_NAME,
        kind,
        summary,
        extra
    )
}

/// Extra README section for a WP-CLI driven classic project
pub fn classic_configuration_section() -> &'static str {
    "\n## Configuration\nUpdate the database configuration in wp-config.php before running the site.\n"
}

/// Extra README section for a Composer driven Bedrock project
pub fn bedrock_getting_started_section(project_name: &str) -> String {
    format!(
        r#"
## Getting Started

1. Update environment variables in the `.env` file:
  - Database variables
  - `WP_ENV=development`
  - `WP_HOME=http://example.com`
  - `WP_SITEURL=${{WP_HOME}}/wp`

2. Set your site vhost document root to the `web` folder: `/path/to/{}/web/`

3. Access WordPress admin at `http://example.com/wp/wp-admin/`
"#,
        project_name
    )
}

/// Minimal Bedrock `composer.json`, pretty-printed with two-space indentation
pub fn bedrock_composer_json(project_name: &str) -> Result<String> {
    let manifest = json!({
        "name": format!("my/{}", project_name),
        "type": "project",
        "description": "WordPress project with Bedrock structure",
        "require": {
            "php": ">=7.4",
            "composer/installers": "^2.0",
            "roots/wordpress": "^6.0"
        },
        "config": {
            "allow-plugins": {
                "composer/installers": true
            }
        }
    });

    let mut rendered =
        serde_json::to_string_pretty(&manifest).context("Failed to render composer.json")?;
    rendered.push('\n');
    Ok(rendered)
}
