//! Completions command - generate shell completion scripts.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    gallery completions bash > ~/.local/share/bash-completion/completions/gallery\n    \
    gallery completions zsh > ~/.zfunc/_gallery\n    \
    gallery completions fish > ~/.config/fish/completions/gallery.fish")]
pub struct Args {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Generates completions using a provided clap Command.
///
/// Called from main.rs, which owns the top-level `Cli` definition.
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    generate(shell, cmd, "gallery", &mut io::stdout());
}
