use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gallery_cli::cli::commands;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "gallery")]
#[command(version)]
#[command(about = "Keep a captioned gallery of your photos")]
#[command(long_about = "Gallery saves photos with typed or dictated captions into a\n\
    local gallery, newest first, and lets you browse, share and\n\
    remove them.")]
#[command(after_help = "EXAMPLES:\n    \
    gallery login --name Ada                  Sign in\n    \
    gallery add cat.jpg --caption \"My cat\"    Save a photo\n    \
    gallery list                              List saved photos\n    \
    gallery show 17180                        View a photo by id prefix\n    \
    gallery remove 17180                      Delete a photo\n\n\
    For more information about a command, run 'gallery <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Sign in with a local profile
    Login(commands::login::Args),

    /// Sign out, optionally deleting the gallery
    Logout(commands::logout::Args),

    /// Show the signed-in user
    Whoami(commands::whoami::Args),

    /// Save a photo with a caption
    #[command(long_about = "Adds a photo to the top of the gallery. The caption can be typed\n\
        with --caption or taken from a speech recognizer transcript with\n\
        --dictate. On the browser platform the image is embedded into\n\
        the gallery as a data URI.")]
    Add(commands::add::Args),

    /// List saved photos, newest first
    List(commands::list::Args),

    /// Show a photo's details
    Show(commands::show::Args),

    /// Delete a photo
    Remove(commands::remove::Args),

    /// Print a photo's share payload
    Share(commands::share::Args),

    /// Delete every photo
    Clear(commands::clear::Args),

    /// View and manage configuration settings
    #[command(long_about = "Provides subcommands to show, get, and set configuration values.\n\
        Configuration is stored in ~/.gallery/config.yaml, or in\n\
        $GALLERY_HOME/config.yaml when GALLERY_HOME is set.")]
    Config(commands::config::Args),

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "gallery_cli=debug"
    } else {
        "gallery_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Login(args) => commands::login::run(args),
        Commands::Logout(args) => commands::logout::run(args),
        Commands::Whoami(args) => commands::whoami::run(args),
        Commands::Add(args) => commands::add::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Remove(args) => commands::remove::run(args),
        Commands::Share(args) => commands::share::run(args),
        Commands::Clear(args) => commands::clear::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Completions(args) => {
            commands::completions::generate_completions(&mut Cli::command(), args.shell);
            Ok(())
        }
    }
}
