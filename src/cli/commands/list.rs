//! List command - show the saved photos, newest first.

use anyhow::Result;
use colored::Colorize;

use crate::cli::format::{short_image_uri, truncate_to_width};
use crate::cli::{block_on, AppContext, OutputFormat};
use crate::session::require_user;

/// Arguments for the list command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    gallery list                  List saved photos (default 50)\n    \
    gallery list --limit 10       Show the 10 newest photos\n    \
    gallery list --format json    Output as JSON")]
pub struct Args {
    /// Maximum number of photos to display
    #[arg(short, long, default_value = "50", value_name = "N")]
    pub limit: usize,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the list command.
pub fn run(args: Args) -> Result<()> {
    let ctx = AppContext::open()?;
    require_user(&ctx.sessions)?;

    let entries = block_on(ctx.gallery.load())?;
    let shown: Vec<_> = entries.iter().take(args.limit).collect();

    if let OutputFormat::Json = args.format {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No photos yet.".dimmed());
        println!();
        println!("Run 'gallery add <IMAGE>' to add one.");
        return Ok(());
    }

    const ID_WIDTH: usize = 22;
    const CAPTION_WIDTH: usize = 36;

    println!(
        "{}",
        format!("{:<ID_WIDTH$}  {:<CAPTION_WIDTH$}  {}", "ID", "CAPTION", "IMAGE").bold()
    );

    for entry in &shown {
        let caption = truncate_to_width(entry.caption_or("-"), CAPTION_WIDTH);
        println!(
            "{}  {:<CAPTION_WIDTH$}  {}",
            format!("{:<ID_WIDTH$}", entry.id).cyan(),
            caption,
            short_image_uri(&entry.image_uri).dimmed()
        );
    }

    println!();
    let mut footer = format!("{} of {} photos", shown.len(), entries.len());
    if let Ok(Some(saved_at)) = ctx.gallery.storage().updated_at(ctx.gallery.key()) {
        footer.push_str(&format!(
            ", last saved {}",
            saved_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M")
        ));
    }
    println!("{}", footer.dimmed());

    Ok(())
}
