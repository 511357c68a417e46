//! Add command - save a captioned photo to the gallery.
//!
//! The image goes through the platform's capture provider, the caption is
//! typed with `--caption` or read from a dictation transcript with
//! `--dictate`. The new photo is placed at the top of the gallery.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::capture::{Capabilities, Platform};
use crate::cli::{block_on, AppContext, OutputFormat};
use crate::session::require_user;
use crate::storage::NewEntry;

/// Arguments for the add command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    gallery add cat.jpg                          Add a photo without caption\n    \
    gallery add cat.jpg --caption \"My cat\"       Add a photo with a caption\n    \
    gallery add cat.jpg --dictate speech.txt     Use a dictated caption\n    \
    gallery add cat.jpg --platform browser       Embed the image as a data URI")]
pub struct Args {
    /// Image file to add
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Caption text
    #[arg(short, long, conflicts_with = "dictate")]
    pub caption: Option<String>,

    /// Speech recognizer transcript to take the caption from
    #[arg(short, long, value_name = "FILE")]
    #[arg(
        long_help = "Read the caption from a speech recognizer transcript.\n\
        The first non-empty line is used as the caption. Only available\n\
        on the native platform."
    )]
    pub dictate: Option<PathBuf>,

    /// Override the configured platform
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the add command.
pub fn run(args: Args) -> Result<()> {
    let ctx = AppContext::open()?;
    require_user(&ctx.sessions)?;

    let platform = args.platform.unwrap_or(ctx.config.platform);
    let caps = Capabilities::for_platform(platform, &ctx.config.dictation_locale);

    let image_uri = caps
        .capture
        .pick(&args.image)
        .with_context(|| format!("Could not use {}", args.image.display()))?;

    let caption = match args.dictate {
        Some(ref transcript) => caps
            .dictation
            .transcribe(transcript)
            .context("Could not read dictated caption")?,
        None => args.caption.unwrap_or_default(),
    };

    let entries = block_on(
        ctx.gallery
            .add(NewEntry::new(image_uri).with_caption(caption)),
    )?
    .context("Failed to save photo. The gallery was not changed")?;

    let saved = &entries[0];

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(saved)?);
        }
        OutputFormat::Text => {
            println!(
                "{} Saved photo {} ({} in gallery)",
                "Saved!".green().bold(),
                saved.id.cyan(),
                entries.len()
            );
            println!("  {}  {}", "Caption:".dimmed(), saved.caption_or("(no caption)"));
        }
    }

    Ok(())
}
