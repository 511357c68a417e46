//! CLI commands for the gallery.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Save a captioned photo.
pub mod add;

/// Delete every photo.
pub mod clear;

/// Shell completion scripts.
pub mod completions;

/// Configuration viewing and management.
pub mod config;

/// List saved photos.
pub mod list;

/// Sign in with a local profile.
pub mod login;

/// Sign out, optionally deleting the gallery.
pub mod logout;

/// Delete a single photo.
pub mod remove;

/// Print a photo's share payload.
pub mod share;

/// Display one photo.
pub mod show;

/// Show the signed-in user.
pub mod whoami;
