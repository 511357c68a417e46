//! Remove command - delete a photo from the gallery.
//!
//! Only the gallery entry is removed; the image file itself is left alone.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::{block_on, resolve_entry, AppContext};
use crate::session::require_user;

/// Arguments for the remove command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    gallery remove 1718000000000         Remove (prompts for confirmation)\n    \
    gallery remove 17180 --force         Remove without confirmation")]
pub struct Args {
    /// Photo id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// Executes the remove command.
pub fn run(args: Args) -> Result<()> {
    let ctx = AppContext::open()?;
    require_user(&ctx.sessions)?;

    let entry = block_on(resolve_entry(&ctx.gallery, &args.id))??;

    if !args.force {
        println!("{} {}", "Photo".bold(), entry.id.cyan());
        println!("  {}  {}", "Caption:".dimmed(), entry.caption_or("(no caption)"));
        print!("Are you sure you want to delete this photo? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let remaining = block_on(ctx.gallery.remove(&entry.id))?
        .context("Could not delete photo. The gallery was not changed")?;

    println!(
        "{} photo {} ({} left)",
        "Deleted".green(),
        entry.id.cyan(),
        remaining.len()
    );

    Ok(())
}
