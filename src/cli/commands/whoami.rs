//! Whoami command - show the signed-in user.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{self, Config};
use crate::session::{SessionProvider, SessionStore};

/// Arguments for the whoami command.
#[derive(clap::Args)]
pub struct Args {}

/// Executes the whoami command.
pub fn run(_args: Args) -> Result<()> {
    let config = Config::load()?;
    let store = SessionStore::new(&config::gallery_home()?, config.use_keyring);

    match store.current_user().context("Failed to check login status")? {
        Some(user) => {
            println!("{}", user.label().cyan().bold());
            println!("  {}    {}", "UID:".dimmed(), user.uid);
            if let Some(ref email) = user.email {
                println!("  {}  {}", "Email:".dimmed(), email);
            }
            if let Some(ref photo) = user.photo_url {
                println!("  {}  {}", "Photo:".dimmed(), photo);
            }
        }
        None => {
            println!("{}", "Not currently signed in.".yellow());
            println!("Run 'gallery login --name <NAME>' to sign in.");
        }
    }

    Ok(())
}
