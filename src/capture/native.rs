//! Native capabilities.
//!
//! Images stay where the picker left them and are referenced by `file://`
//! URI. Dictation reads the transcript the platform recognizer wrote, one
//! alternative per line, best first.

use std::fs;
use std::path::Path;

use super::{ensure_image_file, CaptureError, CaptureProvider, DictationProvider, ProviderInfo};

/// References picked images by absolute `file://` URI.
pub struct FileCapture;

impl CaptureProvider for FileCapture {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "file",
            description: "Reference images in place by file:// URI",
        }
    }

    fn pick(&self, path: &Path) -> Result<String, CaptureError> {
        ensure_image_file(path)?;
        let absolute = fs::canonicalize(path)?;
        Ok(format!("file://{}", absolute.display()))
    }
}

/// Reads captions from speech recognition transcripts.
pub struct TranscriptDictation {
    locale: String,
}

impl TranscriptDictation {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl DictationProvider for TranscriptDictation {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "transcript",
            description: "Use the top result of the platform speech recognizer",
        }
    }

    fn transcribe(&self, transcript: &Path) -> Result<String, CaptureError> {
        if !transcript.is_file() {
            return Err(CaptureError::NotFound(transcript.display().to_string()));
        }

        let contents = fs::read_to_string(transcript)?;
        let best = contents
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| CaptureError::EmptyTranscript(transcript.display().to_string()))?;

        tracing::debug!(locale = %self.locale, "Using dictated caption");
        Ok(best.to_string())
    }
}
