//! Optional Bedrock add-ons: Sage theme, Blade icon packages and Alpine.js
//!
//! Every add-on is best effort. A failing command is reported and the chain
//! moves on; only prompt errors propagate.

use crate::prompt::Choice;
use crate::runtime::{COMPOSER, NPM};
use crate::structure::{ProjectLayout, ScaffoldContext};
use crate::ui;
use anyhow::Result;
use std::path::{Path, PathBuf};

const THEMES_DIR: &str = "web/app/themes";
const NO_ICONS: &str = "none";

/// Blade icon sets installable with Composer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconPack {
    Lucide,
    Heroicons,
    FontAwesome,
    Boxicons,
}

impl IconPack {
    pub const ALL: [IconPack; 4] = [
        IconPack::Lucide,
        IconPack::Heroicons,
        IconPack::FontAwesome,
        IconPack::Boxicons,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            IconPack::Lucide => "lucide",
            IconPack::Heroicons => "heroicons",
            IconPack::FontAwesome => "fontawesome",
            IconPack::Boxicons => "boxicons",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IconPack::Lucide => "Lucide",
            IconPack::Heroicons => "Heroicons",
            IconPack::FontAwesome => "Font Awesome",
            IconPack::Boxicons => "Boxicons",
        }
    }

    /// Composer package providing the Blade components
    pub fn package(&self) -> &'static str {
        match self {
            IconPack::Lucide => "mallardduck/blade-lucide-icons",
            IconPack::Heroicons => "blade-ui-kit/blade-heroicons",
            IconPack::FontAwesome => "owenvoke/blade-fontawesome",
            IconPack::Boxicons => "andreiio/blade-boxicons",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pack| pack.key() == key)
    }
}

/// Where the icon and Alpine.js steps install into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonTarget {
    pub dir: PathBuf,
    pub in_theme: bool,
}

impl AddonTarget {
    fn project(layout: &ProjectLayout) -> Self {
        Self {
            dir: layout.path().to_path_buf(),
            in_theme: false,
        }
    }

    fn theme(dir: PathBuf) -> Self {
        Self {
            dir,
            in_theme: true,
        }
    }
}

/// Sage theme, then icons, then Alpine.js
pub async fn run(layout: &ProjectLayout, ctx: &ScaffoldContext<'_>) -> Result<()> {
    let target = setup_sage_theme(layout, ctx).await?;
    setup_icon_packages(&target, ctx).await?;
    setup_alpine(&target, ctx).await?;
    Ok(())
}

/// Reject names Composer would not accept as a package name
pub fn validate_theme_name(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("Theme name cannot be empty".to_string());
    }
    if !is_package_segment(input) {
        return Err(
            "Theme name must use only lowercase alphanumeric characters, hyphens and underscores"
                .to_string(),
        );
    }
    Ok(())
}

/// `[a-z0-9]` runs joined by `_`, `.`, `-` or `--`
fn is_package_segment(name: &str) -> bool {
    let is_alnum = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    let bytes = name.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&first), Some(&last)) if is_alnum(first) && is_alnum(last) => {}
        _ => return false,
    }

    let mut separator: &[u8] = &[];
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if is_alnum(b) {
            if !matches!(separator, b"" | b"_" | b"." | b"-" | b"--") {
                return false;
            }
            separator = &[];
            start = i + 1;
        } else if matches!(b, b'_' | b'.' | b'-') {
            separator = &bytes[start..=i];
        } else {
            return false;
        }
    }
    true
}

async fn setup_sage_theme(
    layout: &ProjectLayout,
    ctx: &ScaffoldContext<'_>,
) -> Result<AddonTarget> {
    ui::section_header("Sage Theme Setup");

    if !ctx
        .prompter
        .confirm("🌱 Would you like to install Sage theme?", true)?
    {
        ui::info("Skipping Sage theme installation.");
        return Ok(AddonTarget::project(layout));
    }

    let theme_name = ctx.prompter.input(
        "📝 Enter a name for your Sage theme:",
        "sage-theme",
        Some(validate_theme_name),
    )?;

    match install_sage(layout, ctx, &theme_name).await {
        Ok(theme_dir) => {
            println!();
            ui::success(&format!(
                "Sage theme \"{}\" has been installed successfully!",
                theme_name
            ));
            Ok(AddonTarget::theme(theme_dir))
        }
        Err(e) => {
            ui::warning(&format!("Error installing Sage theme: {:#}", e));
            Ok(AddonTarget::project(layout))
        }
    }
}

async fn install_sage(
    layout: &ProjectLayout,
    ctx: &ScaffoldContext<'_>,
    theme_name: &str,
) -> Result<PathBuf> {
    let themes_dir = layout.create_dir(THEMES_DIR).await?;

    ui::processing(&format!(
        "Installing Sage theme in {}...",
        layout.display_path(&themes_dir)
    ));
    ctx.runner
        .run(
            &COMPOSER
                .command()
                .args(["create-project", "roots/sage", theme_name])
                .current_dir(&themes_dir),
        )
        .await?;

    let theme_dir = themes_dir.join(theme_name);

    ui::processing("Installing theme dependencies...");
    ctx.runner
        .run(&NPM.command().arg("install").current_dir(&theme_dir))
        .await?;

    ui::processing("Building theme assets...");
    ctx.runner
        .run(&NPM.command().args(["run", "build"]).current_dir(&theme_dir))
        .await?;

    Ok(theme_dir)
}

async fn setup_icon_packages(target: &AddonTarget, ctx: &ScaffoldContext<'_>) -> Result<()> {
    let (header, question, done) = if target.in_theme {
        (
            "Icon Packages for Sage Theme",
            "🎨 Would you like to add icon packages to your Sage theme?",
            "icons have been installed in the theme!",
        )
    } else {
        (
            "Icons Setup",
            "🎨 Would you like to add Blade icons to your project?",
            "icons have been installed!",
        )
    };

    ui::section_header(header);

    if !ctx.prompter.confirm(question, true)? {
        ui::info("Skipping icon packages installation.");
        return Ok(());
    }

    let mut choices: Vec<Choice> = IconPack::ALL
        .iter()
        .map(|pack| Choice::new(pack.key(), pack.display_name()).hint(pack.package()))
        .collect();
    choices.push(Choice::new(NO_ICONS, "None/Skip"));

    let picked = ctx.prompter.select(
        "📦 Select an icon package to install:",
        &choices,
        IconPack::Lucide.key(),
    )?;

    let Some(pack) = IconPack::from_key(&picked) else {
        ui::info("Skipping icon package installation.");
        return Ok(());
    };

    ui::processing(&format!(
        "Installing {} icon package...",
        pack.display_name()
    ));

    let install = COMPOSER
        .command()
        .args(["require", pack.package()])
        .current_dir(&target.dir);
    match ctx.runner.run(&install).await {
        Ok(()) => {
            println!();
            ui::success(&format!("{} {}", pack.display_name(), done));
        }
        Err(e) => ui::warning(&format!("Error installing icon package: {:#}", e)),
    }

    Ok(())
}

async fn setup_alpine(target: &AddonTarget, ctx: &ScaffoldContext<'_>) -> Result<()> {
    ui::section_header("Alpine.js Setup");

    if !ctx
        .prompter
        .confirm("⛰️  Would you like to add Alpine.js?", false)?
    {
        ui::info("Skipping Alpine.js installation.");
        return Ok(());
    }

    if !NPM.is_available(ctx.runner).await {
        ui::warning(&format!(
            "{} is not installed or not in PATH. Skipping Alpine.js installation. ({})",
            NPM.display_name, NPM.docs_url
        ));
        return Ok(());
    }

    match install_alpine(&target.dir, ctx).await {
        Ok(()) => {
            println!();
            ui::success("Alpine.js has been installed!");
        }
        Err(e) => ui::warning(&format!("Error installing Alpine.js: {:#}", e)),
    }

    Ok(())
}

async fn install_alpine(dir: &Path, ctx: &ScaffoldContext<'_>) -> Result<()> {
    let has_manifest = tokio::fs::try_exists(dir.join("package.json"))
        .await
        .unwrap_or(false);

    if !has_manifest {
        ui::processing("Creating package.json...");
        ctx.runner
            .run(&NPM.command().args(["init", "-y"]).current_dir(dir))
            .await?;
    }

    ui::processing("Installing Alpine.js...");
    ctx.runner
        .run(
            &NPM.command()
                .args(["install", "alpinejs", "--save"])
                .current_dir(dir),
        )
        .await
}
