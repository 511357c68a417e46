//! Command-line interface for the gallery.
//!
//! Provides the CLI commands for signing in, adding captioned photos and
//! browsing the saved gallery.

/// Individual CLI command implementations.
pub mod commands;

/// Output formatting helpers shared by commands.
pub mod format;

use anyhow::{bail, Context, Result};
use std::future::Future;

use crate::config::{self, Config};
use crate::gallery::GalleryStore;
use crate::session::SessionStore;
use crate::storage::{GalleryEntry, SqliteStorage, Storage};

pub use format::OutputFormat;

/// Everything a command needs, built from the config file.
pub struct AppContext {
    pub config: Config,
    pub gallery: GalleryStore<SqliteStorage>,
    pub sessions: SessionStore,
}

impl AppContext {
    /// Loads config and opens the database and session store.
    pub fn open() -> Result<Self> {
        let config = Config::load()?;
        let db_path = config.database_path()?;
        tracing::debug!(path = %db_path.display(), "Opening gallery database");

        let storage = SqliteStorage::open(&db_path)?;
        let sessions = SessionStore::new(&config::gallery_home()?, config.use_keyring);

        Ok(Self {
            gallery: GalleryStore::new(storage),
            sessions,
            config,
        })
    }
}

/// Runs a future to completion on a fresh tokio runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    Ok(rt.block_on(future))
}

/// Finds the single entry identified by an id or id prefix.
///
/// An exact id match wins over prefix matches.
pub async fn resolve_entry<S: Storage>(
    gallery: &GalleryStore<S>,
    id_or_prefix: &str,
) -> Result<GalleryEntry> {
    if let Some(entry) = gallery.get(id_or_prefix).await {
        return Ok(entry);
    }

    let mut matching = gallery.find_by_prefix(id_or_prefix).await;

    match matching.len() {
        0 => {
            if gallery.load().await.is_empty() {
                bail!(
                    "No photo found matching '{id_or_prefix}'. The gallery is empty. \
                     Run 'gallery add <IMAGE>' to add one."
                );
            }
            bail!(
                "No photo found matching '{id_or_prefix}'. \
                 Run 'gallery list' to see saved photos."
            );
        }
        1 => Ok(matching.remove(0)),
        _ => {
            let candidates: Vec<String> = matching
                .iter()
                .map(|e| format!("  {} - {}", e.id, e.caption_or("(no caption)")))
                .collect();
            bail!(
                "Multiple photos match '{id_or_prefix}':\n{}\n\
                 Please use a more specific prefix.",
                candidates.join("\n")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, NewEntry};

    async fn seeded_gallery() -> GalleryStore<MemoryStorage> {
        let gallery = GalleryStore::new(MemoryStorage::new());
        for id in ["1700-aa", "1700-ab", "1800-cc", "1800"] {
            gallery
                .add(NewEntry::new(format!("file://{id}.jpg")).with_id(id))
                .await
                .unwrap();
        }
        gallery
    }

    #[tokio::test]
    async fn test_resolve_unique_prefix() {
        let gallery = seeded_gallery().await;
        let entry = resolve_entry(&gallery, "1700-aa").await.unwrap();
        assert_eq!(entry.image_uri, "file://1700-aa.jpg");
    }

    #[tokio::test]
    async fn test_resolve_exact_match_beats_prefix() {
        let gallery = seeded_gallery().await;
        let entry = resolve_entry(&gallery, "1800").await.unwrap();
        assert_eq!(entry.id, "1800");
    }

    #[tokio::test]
    async fn test_resolve_ambiguous_prefix_fails() {
        let gallery = seeded_gallery().await;
        let err = resolve_entry(&gallery, "1700").await.unwrap_err().to_string();
        assert!(err.contains("Multiple photos"));
        assert!(err.contains("1700-aa"));
        assert!(err.contains("1700-ab"));
        assert!(!err.contains("1800-cc"));
    }

    #[tokio::test]
    async fn test_resolve_missing() {
        let gallery = seeded_gallery().await;
        let err = resolve_entry(&gallery, "9").await.unwrap_err();
        assert!(err.to_string().contains("gallery list"));

        let empty = GalleryStore::new(MemoryStorage::new());
        let err = resolve_entry(&empty, "9").await.unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
