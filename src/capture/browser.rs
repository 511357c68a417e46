//! Browser capabilities.
//!
//! A browser build cannot hand out file paths, so captured images are
//! embedded into the entry as base64 `data:` URIs. Speech recognition is
//! not available.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::path::Path;

use super::{ensure_image_file, CaptureError, CaptureProvider, DictationProvider, ProviderInfo};

/// Embeds images as `data:<mime>;base64,...` URIs.
pub struct DataUriCapture;

impl CaptureProvider for DataUriCapture {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "data-uri",
            description: "Embed images in the gallery as data: URIs",
        }
    }

    fn pick(&self, path: &Path) -> Result<String, CaptureError> {
        let mime = ensure_image_file(path)?;
        let bytes = fs::read(path)?;
        Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }
}

/// Placeholder dictation provider for platforms without speech input.
pub struct NoDictation;

impl DictationProvider for NoDictation {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "unavailable",
            description: "Voice captions are not supported on this platform",
        }
    }

    fn transcribe(&self, _transcript: &Path) -> Result<String, CaptureError> {
        Err(CaptureError::Unsupported(
            "Voice captions are only available on native builds".to_string(),
        ))
    }
}
