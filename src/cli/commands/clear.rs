//! Clear command - delete every photo in the gallery.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::{block_on, AppContext};
use crate::session::require_user;

/// Arguments for the clear command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    gallery clear            Delete all photos (prompts for confirmation)\n    \
    gallery clear --force    Delete without confirmation")]
pub struct Args {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// Executes the clear command.
pub fn run(args: Args) -> Result<()> {
    let ctx = AppContext::open()?;
    require_user(&ctx.sessions)?;

    let count = block_on(ctx.gallery.load())?.len();
    if count == 0 {
        println!("{}", "The gallery is already empty.".dimmed());
        return Ok(());
    }

    if !args.force {
        print!(
            "{} ",
            format!("Delete all {count} photos? This cannot be undone. [y/N]").yellow()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    block_on(ctx.gallery.clear())?.context("Failed to clear gallery")?;
    println!("{} {count} photos", "Deleted".green());

    Ok(())
}
