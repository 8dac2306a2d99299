//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `veneer validate` | Load configuration and check every registration step |
//! | `veneer plan` | Print the registration steps in application order |

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use veneer_infrastructure::{AppConfig, ConfigLoader};

/// Command line interface for veneer
#[derive(Parser, Debug)]
#[command(name = "veneer")]
#[command(about = "veneer - Capability registry configuration tool")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load and validate the configuration
    Validate,
    /// Print the configured registration steps
    Plan,
}

/// Load configuration for `cli`, honoring an explicit `--config`
pub fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let loader = match &cli.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "Configuration file not found: {}", path.display());
            ConfigLoader::new().with_config_path(path)
        }
        None => ConfigLoader::new(),
    };
    loader.load().context("Failed to load configuration")
}

/// Human-readable registration plan
pub fn render_plan(config: &AppConfig) -> String {
    let policy = &config.registration.policy;
    let arity = policy
        .open_template_arity
        .map_or_else(|| "any".to_string(), |arity| arity.to_string());
    let mut lines = vec![
        "Policy:".to_string(),
        format!("  ambiguity: {:?}", policy.ambiguity),
        format!("  open template arity: {arity}"),
        String::new(),
        "Steps:".to_string(),
    ];
    if config.registration.steps.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(
        config
            .registration
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| format!("  {}. {step}", index + 1)),
    );
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Output of `command` for an already loaded configuration
pub fn execute(command: &Command, config: &AppConfig) -> String {
    match command {
        Command::Validate => format!(
            "configuration ok ({} registration steps)",
            config.registration.steps.len()
        ),
        Command::Plan => render_plan(config),
    }
}
