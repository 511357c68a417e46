//! Core data models for the gallery
//!
//! Field names are serialized in camelCase so that documents keep the
//! `{ id, imageUri, caption }` shape on disk.

use serde::{Deserialize, Serialize};

/// One saved photo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntry {
    /// Unique identifier within the gallery document
    pub id: String,

    /// Opaque reference to the image bytes (file path, URI or data URI).
    /// Never interpreted by the store.
    pub image_uri: String,

    /// Free-text caption, typed or dictated. May be empty.
    #[serde(default)]
    pub caption: String,
}

impl GalleryEntry {
    /// Returns the caption, or a placeholder when it is empty.
    pub fn caption_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.caption.is_empty() {
            placeholder
        } else {
            &self.caption
        }
    }
}

/// Caller-supplied data for a new gallery entry.
///
/// The store assigns an id when `id` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    /// Explicit id, or `None` to have one generated
    pub id: Option<String>,

    /// Required, non-blank image reference
    pub image_uri: String,

    /// Caption text; empty when not given
    pub caption: String,
}

impl NewEntry {
    /// Creates a new entry for the given image with an empty caption.
    pub fn new(image_uri: impl Into<String>) -> Self {
        Self {
            id: None,
            image_uri: image_uri.into(),
            caption: String::new(),
        }
    }

    /// Sets the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Sets an explicit id instead of a generated one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_uses_camel_case_fields() {
        let entry = GalleryEntry {
            id: "1".to_string(),
            image_uri: "file:///a.jpg".to_string(),
            caption: "cat".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["imageUri"], "file:///a.jpg");
        assert!(json.get("image_uri").is_none());
    }

    #[test]
    fn test_entry_caption_defaults_to_empty() {
        let json = r#"{"id":"1718000000000","imageUri":"data:image/jpeg;base64,AAAA"}"#;
        let entry: GalleryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.caption, "");
        assert_eq!(entry.caption_or("(no caption)"), "(no caption)");
    }

    #[test]
    fn test_new_entry_builder() {
        let entry = NewEntry::new("file:///b.jpg").with_caption("dog").with_id("x");
        assert_eq!(entry.id.as_deref(), Some("x"));
        assert_eq!(entry.image_uri, "file:///b.jpg");
        assert_eq!(entry.caption, "dog");
    }
}
