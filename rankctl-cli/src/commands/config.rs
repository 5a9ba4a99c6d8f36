//! Configuration management commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rankctl_core::RankConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a default config file
    Init(InitArgs),
    /// Show the effective configuration
    Show,
    /// Show the config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Init(args) => run_init(args),
        ConfigCommand::Show => run_show(),
        ConfigCommand::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = RankConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    RankConfig::default()
        .save()
        .context("Failed to write default config")?;

    println!("✓ Created config at: {:?}", config_path);
    println!("\nNext steps:");
    println!("  1. Edit the config: $EDITOR {:?}", config_path);
    println!("  2. Pick a tier under [subscription] (free, basic, premium)");
    println!("  3. Run: rankctl dash");

    Ok(())
}

fn run_show() -> Result<()> {
    // Hard load so a missing file points at `config init` instead of
    // silently printing defaults.
    let config = RankConfig::load()?;
    let rendered =
        toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{}", rendered);

    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", RankConfig::config_path().display());
    Ok(())
}
