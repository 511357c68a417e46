//! Logout command - end the session.
//!
//! Removes the stored profile. The gallery is kept unless `--purge` is given
//! or `clear_gallery_on_sign_out` is set.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::{block_on, AppContext};
use crate::session::{sign_out_and_reset, SessionProvider};

/// Arguments for the logout command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    gallery logout             Sign out, keep photos\n    \
    gallery logout --purge     Sign out and delete all photos")]
pub struct Args {
    /// Also delete the gallery
    #[arg(long)]
    pub purge: bool,
}

/// Executes the logout command.
pub fn run(args: Args) -> Result<()> {
    let ctx = AppContext::open()?;

    if ctx
        .sessions
        .current_user()
        .context("Failed to check login status")?
        .is_none()
    {
        println!("{}", "Not currently signed in.".yellow());
        return Ok(());
    }

    let clear_gallery = args.purge || ctx.config.clear_gallery_on_sign_out;
    let user = block_on(sign_out_and_reset(&ctx.sessions, &ctx.gallery, clear_gallery))??;

    if let Some(user) = user {
        println!("Signed out {}", user.label().cyan());
    }
    if clear_gallery {
        println!("{}", "Gallery cleared.".dimmed());
    }

    Ok(())
}
