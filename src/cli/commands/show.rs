//! Show command - display one photo's details.

use anyhow::Result;
use colored::Colorize;

use crate::cli::{block_on, resolve_entry, AppContext, OutputFormat};
use crate::session::require_user;

/// Arguments for the show command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    gallery show 1718000000000        Show a photo by id\n    \
    gallery show 17180 --format json  Show by id prefix as JSON")]
pub struct Args {
    /// Photo id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the show command.
pub fn run(args: Args) -> Result<()> {
    let ctx = AppContext::open()?;
    require_user(&ctx.sessions)?;

    let entry = block_on(resolve_entry(&ctx.gallery, &args.id))??;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
        OutputFormat::Text => {
            println!("{} {}", "Photo".bold(), entry.id.cyan());
            println!("  {}  {}", "Caption:".dimmed(), entry.caption_or("(no caption)"));
            println!("  {}    {}", "Image:".dimmed(), entry.image_uri);
        }
    }

    Ok(())
}
