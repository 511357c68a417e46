//! Config command - manage configuration

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use crate::capture::Capabilities;
use crate::config::{Config, CONFIG_KEYS};

#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    gallery config                         Show current configuration\n    \
    gallery config get platform            Print one setting\n    \
    gallery config set platform browser    Change a setting\n    \
    gallery config path                    Print the config file location")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// Print the config file path
    Path,
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(ConfigCommand::Show) | None => show_config(),
        Some(ConfigCommand::Get { key }) => get_config(&key),
        Some(ConfigCommand::Set { key, value }) => set_config(&key, &value),
        Some(ConfigCommand::Path) => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
    }
}

fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Gallery Configuration".bold());
    println!();
    println!("  {}  {}", "Config:".dimmed(), Config::config_path()?.display());
    println!("  {}  {}", "Database:".dimmed(), config.database_path()?.display());
    println!();

    for key in CONFIG_KEYS {
        let value = config.get(key)?;
        let value = if value.is_empty() { "(default)".to_string() } else { value };
        println!("  {:<26} {}", key, value.cyan());
    }

    let caps = Capabilities::for_platform(config.platform, &config.dictation_locale);
    println!();
    println!("{}", "Capabilities:".bold());
    for info in [caps.capture.info(), caps.dictation.info()] {
        println!("  {} {:<12} {}", "✓".green(), info.name, info.description.dimmed());
    }

    Ok(())
}

fn get_config(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    tracing::debug!(key, value, "Updated config");
    println!("Set {} = {}", key.cyan(), config.get(key)?);
    Ok(())
}
