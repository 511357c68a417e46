//! Login command - sign in with a local profile.
//!
//! The gallery does not talk to an identity provider itself. This records
//! the profile of the signed-in user so that the gallery commands can run.

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::config::{self, Config};
use crate::session::{SessionProvider, SessionStore, User};

/// Arguments for the login command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    gallery login --name Ada                          Sign in as a guest\n    \
    gallery login --name Ada --email ada@example.com  Sign in with an email")]
pub struct Args {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Profile picture URL
    #[arg(long, value_name = "URL")]
    pub photo_url: Option<String>,
}

/// Executes the login command.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let store = SessionStore::new(&config::gallery_home()?, config.use_keyring);

    if let Some(user) = store.current_user().context("Failed to check login status")? {
        println!("Already signed in as {}", user.label().cyan());
        println!("Run 'gallery logout' first to sign out.");
        return Ok(());
    }

    if args.name.trim().is_empty() {
        bail!("A display name is required");
    }

    let mut user = User::guest(args.name.trim());
    user.email = args.email;
    user.photo_url = args.photo_url;

    store.sign_in(&user).context("Failed to store session")?;

    println!(
        "{} Signed in as {}",
        "Success!".green().bold(),
        user.label().cyan()
    );
    println!("  {}  {}", "Stored in:".dimmed(), store.location());

    Ok(())
}
