//! The gallery store.
//!
//! Keeps the ordered list of saved photos as one JSON document in a single
//! storage slot. Every operation reads the whole document, computes the new
//! list in memory and writes the whole list back. Nothing is cached between
//! calls.
//!
//! Mutations against the same store are serialized so that a second
//! `add`/`remove` always reads what the first one wrote.

mod ids;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::storage::{GalleryEntry, NewEntry, Storage, StorageError};

pub use ids::generate_id;

/// Storage key of the gallery document.
pub const GALLERY_KEY: &str = "gallery";

/// Errors returned by gallery mutations.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// The entry was rejected before touching storage.
    #[error("Invalid entry: {0}")]
    MalformedEntry(String),

    /// An entry with the supplied id is already in the gallery.
    #[error("An entry with id '{0}' already exists")]
    DuplicateId(String),

    /// The document could not be read or persisted. The stored gallery is
    /// unchanged.
    #[error("Gallery storage failed: {0}")]
    Persistence(#[from] StorageError),

    /// The stored document does not parse, so a mutation would overwrite it.
    #[error("Gallery document is corrupt ({0}). Run 'gallery clear' to reset it.")]
    CorruptDocument(String),

    #[error("Failed to encode gallery: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Newest-first collection of photo entries backed by a storage slot.
pub struct GalleryStore<S> {
    storage: Arc<S>,
    key: String,
    write_lock: Arc<Mutex<()>>,
}

impl<S> Clone for GalleryStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            key: self.key.clone(),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<S: Storage> GalleryStore<S> {
    /// Creates a store over the default `gallery` slot.
    pub fn new(storage: S) -> Self {
        Self::from_shared(Arc::new(storage))
    }

    /// Creates a store over storage the caller keeps a handle to.
    pub fn from_shared(storage: Arc<S>) -> Self {
        Self::with_key(storage, GALLERY_KEY)
    }

    /// Creates a store over an arbitrary slot.
    pub fn with_key(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// The storage slot this store owns.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying persistence provider.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the stored entries, newest first.
    ///
    /// An empty, unreadable or corrupt slot reads as an empty gallery.
    pub async fn load(&self) -> Vec<GalleryEntry> {
        let raw = match self.storage.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, "Could not read gallery, showing it empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<GalleryEntry>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(key = %self.key, "Gallery document is corrupt, showing it empty: {e}");
                Vec::new()
            }
        }
    }

    /// Finds an entry by its exact id.
    pub async fn get(&self, id: &str) -> Option<GalleryEntry> {
        self.load().await.into_iter().find(|e| e.id == id)
    }

    /// Returns every entry whose id starts with `prefix`, newest first.
    pub async fn find_by_prefix(&self, prefix: &str) -> Vec<GalleryEntry> {
        self.load()
            .await
            .into_iter()
            .filter(|e| e.id.starts_with(prefix))
            .collect()
    }

    /// Saves a new entry at the head of the gallery and returns the new list.
    ///
    /// The returned list has the new entry at index 0 followed by the
    /// previous entries in their original order.
    ///
    /// # Errors
    ///
    /// - `MalformedEntry` if the image URI is blank; storage is not touched.
    /// - `DuplicateId` if an explicit id is already in use.
    /// - `Persistence` if the read or the write fails; the stored gallery is
    ///   unchanged.
    /// - `CorruptDocument` if the stored document does not parse.
    pub async fn add(&self, entry: NewEntry) -> Result<Vec<GalleryEntry>, GalleryError> {
        if entry.image_uri.trim().is_empty() {
            return Err(GalleryError::MalformedEntry(
                "an image URI is required".to_string(),
            ));
        }
        if matches!(entry.id.as_deref(), Some(id) if id.trim().is_empty()) {
            return Err(GalleryError::MalformedEntry(
                "an explicit id must not be blank".to_string(),
            ));
        }

        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_document().await?;

        let id = match entry.id {
            Some(id) => {
                if entries.iter().any(|e| e.id == id) {
                    return Err(GalleryError::DuplicateId(id));
                }
                id
            }
            None => loop {
                let candidate = generate_id();
                if !entries.iter().any(|e| e.id == candidate) {
                    break candidate;
                }
            },
        };

        tracing::debug!(key = %self.key, id = %id, "Adding gallery entry");
        entries.insert(
            0,
            GalleryEntry {
                id,
                image_uri: entry.image_uri,
                caption: entry.caption,
            },
        );

        self.write(&entries).await?;
        Ok(entries)
    }

    /// Removes every entry with the given id and returns the new list.
    ///
    /// Removing an id that is not present leaves the gallery unchanged and
    /// does not write.
    pub async fn remove(&self, id: &str) -> Result<Vec<GalleryEntry>, GalleryError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_document().await?;

        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            tracing::debug!(key = %self.key, id, "No gallery entry to remove");
            return Ok(entries);
        }
        tracing::debug!(key = %self.key, id, removed = before - entries.len(), "Removing gallery entry");

        self.write(&entries).await?;
        Ok(entries)
    }

    /// Deletes the whole gallery document.
    pub async fn clear(&self) -> Result<(), GalleryError> {
        let _guard = self.write_lock.lock().await;
        tracing::debug!(key = %self.key, "Clearing gallery");
        self.storage.remove(&self.key).await?;
        Ok(())
    }

    /// Reads the document for a read-modify-write cycle.
    ///
    /// Unlike `load`, read failures and unparsable documents are errors here
    /// so that a mutation never writes over entries it could not see.
    async fn read_document(&self) -> Result<Vec<GalleryEntry>, GalleryError> {
        match self.storage.get(&self.key).await? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| GalleryError::CorruptDocument(e.to_string())),
        }
    }

    async fn write(&self, entries: &[GalleryEntry]) -> Result<(), GalleryError> {
        let json = serde_json::to_string(entries)?;
        self.storage.set(&self.key, &json).await?;
        Ok(())
    }
}
