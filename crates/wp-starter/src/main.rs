//! WP Starter CLI - Project scaffolding for WordPress sites

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use wp_starter_core::structures::builtin_registry;
use wp_starter_core::{
    collect_config, ClackPrompter, Project, ProjectError, ScaffoldContext, StarterSettings,
    SystemRunner,
};

#[derive(Parser, Debug)]
#[command(name = "wp-starter")]
#[command(about = "CLI for scaffolding classic and Bedrock WordPress projects")]
#[command(version)]
pub struct Args {
    /// Project name, also used as the directory name
    #[arg(short, long, value_name = "PROJECT_NAME")]
    pub name: Option<String>,

    /// Project name (same as --name)
    #[arg(value_name = "NAME", conflicts_with = "name")]
    pub project_name: Option<String>,

    /// Folder structure to use (classic, bedrock)
    #[arg(short, long, value_name = "TYPE")]
    pub structure: Option<String>,

    /// YAML settings file (defaults to $WP_STARTER_CONFIG when set)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    fn project_name(&self) -> Option<String> {
        self.name.clone().or_else(|| self.project_name.clone())
    }
}

async fn run(args: Args) -> Result<()> {
    let settings = StarterSettings::load(args.config.as_deref())?;
    let registry = builtin_registry();
    let prompter = ClackPrompter;

    let config = collect_config(
        &registry,
        &prompter,
        args.project_name(),
        args.structure.clone(),
    )?;

    let runner = SystemRunner;
    let ctx = ScaffoldContext::new(&runner, &prompter, &settings);
    let base_dir = std::env::current_dir()?;

    Project::new(config, &registry)
        .initialize(&base_dir, &ctx)
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = run(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Project errors have already been reported
            if e.downcast_ref::<ProjectError>().is_none() {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
