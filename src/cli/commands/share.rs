//! Share command - print what would be handed to a share sheet.
//!
//! The title falls back to "Shared image" when the photo has no caption.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::{block_on, resolve_entry, AppContext, OutputFormat};
use crate::session::require_user;
use crate::storage::GalleryEntry;

/// Arguments for the share command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    gallery share 17180                 Print share text for a photo\n    \
    gallery share 17180 --format json   Print the share payload as JSON")]
pub struct Args {
    /// Photo id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Data passed to a share target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl From<&GalleryEntry> for SharePayload {
    fn from(entry: &GalleryEntry) -> Self {
        Self {
            title: entry.caption_or("Shared image").to_string(),
            text: entry.caption.clone(),
            url: entry.image_uri.clone(),
        }
    }
}

/// Executes the share command.
pub fn run(args: Args) -> Result<()> {
    let ctx = AppContext::open()?;
    require_user(&ctx.sessions)?;

    let entry = block_on(resolve_entry(&ctx.gallery, &args.id))??;
    let payload = SharePayload::from(&entry);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&payload)?),
        OutputFormat::Text => {
            println!("{}", payload.title.bold());
            println!();
            println!("{}:\n{}", "Caption".dimmed(), entry.caption_or("(no caption)"));
            println!();
            println!("{}:\n{}", "Image".dimmed(), payload.url);
        }
    }

    Ok(())
}
