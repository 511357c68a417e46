//! Integration tests for the gallery library
//!
//! These tests exercise the gallery store, its storage backends and the
//! platform capabilities through the public API, using temporary
//! databases to ensure test isolation.

use gallery_cli::capture::{Capabilities, CaptureError, Platform};
use gallery_cli::gallery::{GalleryError, GalleryStore, GALLERY_KEY};
use gallery_cli::session::{sign_out_and_reset, SessionProvider, SessionStore, User};
use gallery_cli::storage::{MemoryStorage, NewEntry, SqliteStorage, Storage};
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::tempdir;

// =============================================================================
// Test Helpers
// =============================================================================

/// Creates a gallery over a SQLite database in a temporary directory.
/// Returns the store and the temp directory (which must be kept alive).
fn create_sqlite_gallery() -> (GalleryStore<SqliteStorage>, tempfile::TempDir) {
    let dir = tempdir().expect("Failed to create temp directory");
    let storage = SqliteStorage::open(&dir.path().join("gallery.db"))
        .expect("Failed to open test database");
    (GalleryStore::new(storage), dir)
}

/// Creates a gallery over an in-memory SQLite database.
fn create_in_memory_sqlite_gallery() -> GalleryStore<SqliteStorage> {
    GalleryStore::new(SqliteStorage::open_in_memory().expect("Failed to open in-memory database"))
}

/// Creates a gallery over memory storage the test keeps a handle to.
fn create_memory_gallery() -> (GalleryStore<MemoryStorage>, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (GalleryStore::from_shared(Arc::clone(&storage)), storage)
}

// =============================================================================
// Gallery Scenario Tests
// =============================================================================

mod scenario_tests {
    use super::*;

    #[tokio::test]
    async fn test_cat_and_dog_scenario() {
        let (gallery, _dir) = create_sqlite_gallery();

        gallery
            .add(NewEntry::new("file://a.jpg").with_caption("cat"))
            .await
            .expect("Failed to add cat");

        let after_cat = gallery.load().await;
        assert_eq!(after_cat.len(), 1);
        assert_eq!(after_cat[0].image_uri, "file://a.jpg");
        assert_eq!(after_cat[0].caption, "cat");
        assert!(!after_cat[0].id.is_empty(), "An id should be generated");
        let id_of_a = after_cat[0].id.clone();

        gallery
            .add(NewEntry::new("file://b.jpg").with_caption("dog"))
            .await
            .expect("Failed to add dog");

        let after_dog = gallery.load().await;
        assert_eq!(after_dog.len(), 2);
        assert_eq!(
            (after_dog[0].image_uri.as_str(), after_dog[0].caption.as_str()),
            ("file://b.jpg", "dog")
        );
        assert_eq!(
            (after_dog[1].image_uri.as_str(), after_dog[1].caption.as_str()),
            ("file://a.jpg", "cat")
        );

        gallery.remove(&id_of_a).await.expect("Failed to remove cat");

        let after_remove = gallery.load().await;
        assert_eq!(after_remove.len(), 1);
        assert_eq!(after_remove[0].image_uri, "file://b.jpg");
        assert_eq!(after_remove[0].caption, "dog");
    }

    #[tokio::test]
    async fn test_load_matches_document_built_by_operations() {
        let (gallery, _dir) = create_sqlite_gallery();

        let mut last = Vec::new();
        for (i, caption) in ["one", "two", "three", "four"].iter().enumerate() {
            last = gallery
                .add(NewEntry::new(format!("file://{i}.jpg")).with_caption(*caption))
                .await
                .expect("Failed to add");
        }
        let second_id = last[2].id.clone();
        last = gallery.remove(&second_id).await.expect("Failed to remove");

        let loaded = gallery.load().await;
        assert_eq!(loaded, last);
        let captions: Vec<_> = loaded.iter().map(|e| e.caption.as_str()).collect();
        assert_eq!(captions, vec!["four", "three", "one"]);
    }

    #[tokio::test]
    async fn test_remove_twice_is_noop() {
        let gallery = create_in_memory_sqlite_gallery();
        let entries = gallery
            .add(NewEntry::new("file://a.jpg"))
            .await
            .expect("Failed to add");
        gallery
            .add(NewEntry::new("file://b.jpg"))
            .await
            .expect("Failed to add");

        let once = gallery.remove(&entries[0].id).await.expect("First remove");
        let twice = gallery.remove(&entries[0].id).await.expect("Second remove");

        assert_eq!(once, twice);
        assert_eq!(gallery.load().await, once);
    }

    #[tokio::test]
    async fn test_generated_ids_are_distinct() {
        let gallery = create_in_memory_sqlite_gallery();

        for i in 0..25 {
            gallery
                .add(NewEntry::new(format!("file://{i}.jpg")))
                .await
                .expect("Failed to add");
        }

        let ids: HashSet<_> = gallery.load().await.into_iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 25);
    }

    #[tokio::test]
    async fn test_gallery_survives_reopen() {
        let dir = tempdir().expect("Failed to create temp directory");
        let db_path = dir.path().join("gallery.db");

        {
            let gallery = GalleryStore::new(SqliteStorage::open(&db_path).unwrap());
            gallery
                .add(NewEntry::new("file://a.jpg").with_caption("kept"))
                .await
                .expect("Failed to add");
        }

        let reopened = GalleryStore::new(SqliteStorage::open(&db_path).unwrap());
        let entries = reopened.load().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].caption, "kept");
    }
}

// =============================================================================
// Failure Handling Tests
// =============================================================================

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_corrupt_sqlite_slot_reads_empty() {
        let (gallery, _dir) = create_sqlite_gallery();
        gallery
            .storage()
            .set(GALLERY_KEY, "[{\"id\": ")
            .await
            .expect("Failed to write raw value");

        assert!(gallery.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_original_document_format_loads() {
        let (gallery, _dir) = create_sqlite_gallery();
        let stored = r#"[{"id":"1718000000001","imageUri":"data:image/jpeg;base64,/9j/","caption":"dog"},{"id":"1718000000000","imageUri":"file:///a.jpg","caption":""}]"#;
        gallery
            .storage()
            .set(GALLERY_KEY, stored)
            .await
            .expect("Failed to write raw value");

        let entries = gallery.load().await;

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].caption, "dog");
        assert_eq!(entries[1].image_uri, "file:///a.jpg");
    }

    #[tokio::test]
    async fn test_write_failure_leaves_last_good_document() {
        let (gallery, storage) = create_memory_gallery();
        let good = gallery
            .add(NewEntry::new("file://a.jpg"))
            .await
            .expect("Failed to add");

        storage.fail_writes(true);
        let err = gallery
            .add(NewEntry::new("file://b.jpg"))
            .await
            .expect_err("Write should fail");
        assert!(matches!(err, GalleryError::Persistence(_)));

        storage.fail_writes(false);
        assert_eq!(gallery.load().await, good);
    }

    #[tokio::test]
    async fn test_read_failure_never_overwrites_gallery() {
        let (gallery, storage) = create_memory_gallery();
        for caption in ["one", "two", "three", "four", "five"] {
            gallery
                .add(NewEntry::new("file://a.jpg").with_caption(caption))
                .await
                .expect("Failed to add");
        }
        let stored = storage.get(GALLERY_KEY).await.unwrap();

        storage.fail_reads(true);
        assert!(gallery.load().await.is_empty());
        let err = gallery
            .add(NewEntry::new("file://new.jpg"))
            .await
            .expect_err("Add must not proceed without reading the gallery");
        assert!(matches!(err, GalleryError::Persistence(_)));
        storage.fail_reads(false);

        assert_eq!(storage.get(GALLERY_KEY).await.unwrap(), stored);
        assert_eq!(gallery.load().await.len(), 5);
    }

    #[tokio::test]
    async fn test_repeat_remove_succeeds_while_writes_fail() {
        let (gallery, storage) = create_memory_gallery();
        let entries = gallery
            .add(NewEntry::new("file://a.jpg"))
            .await
            .expect("Failed to add");
        gallery
            .add(NewEntry::new("file://b.jpg"))
            .await
            .expect("Failed to add");
        let once = gallery.remove(&entries[0].id).await.expect("First remove");

        storage.fail_writes(true);
        let twice = gallery
            .remove(&entries[0].id)
            .await
            .expect("Repeat remove should be a no-op");

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_malformed_entry_is_rejected() {
        let (gallery, storage) = create_memory_gallery();

        let err = gallery
            .add(NewEntry::new("").with_caption("no image"))
            .await
            .expect_err("Blank image URI should be rejected");

        assert!(matches!(err, GalleryError::MalformedEntry(_)));
        assert_eq!(storage.write_count(), 0);
    }
}

// =============================================================================
// Concurrency Tests
// =============================================================================

mod concurrency_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_interleaved_adds_and_removes_on_sqlite() {
        let (gallery, _dir) = create_sqlite_gallery();
        let seeded = gallery
            .add(NewEntry::new("file://seed.jpg").with_id("seed"))
            .await
            .expect("Failed to seed");
        assert_eq!(seeded.len(), 1);

        let mut handles = Vec::new();
        for i in 0..16 {
            let gallery = gallery.clone();
            handles.push(tokio::spawn(async move {
                gallery
                    .add(NewEntry::new(format!("file://{i}.jpg")))
                    .await
                    .map(|_| ())
            }));
        }
        let remover = gallery.clone();
        handles.push(tokio::spawn(async move {
            remover.remove("seed").await.map(|_| ())
        }));

        for handle in handles {
            handle.await.expect("task panicked").expect("operation failed");
        }

        let entries = gallery.load().await;
        assert_eq!(entries.len(), 16, "No add may be lost");
        assert!(entries.iter().all(|e| e.id != "seed"));
    }
}

// =============================================================================
// Capability Tests
// =============================================================================

mod capability_tests {
    use super::*;

    #[tokio::test]
    async fn test_browser_capture_feeds_gallery() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("snap.jpeg");
        std::fs::write(&image, [0xff, 0xd8, 0xff]).unwrap();
        let caps = Capabilities::for_platform(Platform::Browser, "en-US");
        let (gallery, _) = create_memory_gallery();

        let uri = caps.capture.pick(&image).expect("Failed to capture");
        let entries = gallery.add(NewEntry::new(uri)).await.unwrap();

        assert!(entries[0].image_uri.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_native_dictation_and_browser_refusal() {
        let dir = tempdir().unwrap();
        let transcript = dir.path().join("speech.txt");
        std::fs::write(&transcript, "a dog in the park\n").unwrap();

        let native = Capabilities::for_platform(Platform::Native, "en-US");
        assert_eq!(
            native.dictation.transcribe(&transcript).unwrap(),
            "a dog in the park"
        );

        let browser = Capabilities::for_platform(Platform::Browser, "en-US");
        assert!(matches!(
            browser.dictation.transcribe(&transcript),
            Err(CaptureError::Unsupported(_))
        ));
    }
}

// =============================================================================
// Session Tests
// =============================================================================

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_purge_on_sign_out_clears_sqlite_gallery() {
        let (gallery, dir) = create_sqlite_gallery();
        let sessions = SessionStore::file_only(dir.path());
        sessions.sign_in(&User::guest("Ada")).unwrap();
        gallery.add(NewEntry::new("file://a.jpg")).await.unwrap();

        let user = sign_out_and_reset(&sessions, &gallery, true)
            .await
            .expect("Sign-out should succeed");

        assert_eq!(user.map(|u| u.label().to_string()), Some("Ada".to_string()));
        assert!(gallery.load().await.is_empty());
        assert!(gallery.storage().get(GALLERY_KEY).await.unwrap().is_none());
    }
}
