//! Photo capture and caption dictation.
//!
//! Image acquisition and speech recognition are done by the platform. This
//! module only turns their results into the strings the gallery stores: an
//! image URI and a caption. Each platform provides one implementation of
//! each capability; the pair is chosen once at startup.
//!
//! # Platforms
//!
//! - `native` - images are referenced by `file://` URI; dictation reads the
//!   recognizer's transcript
//! - `browser` - images are embedded as `data:` URIs; dictation is not
//!   available

pub mod browser;
pub mod native;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Extensions accepted as images, with their MIME types.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("bmp", "image/bmp"),
];

/// Errors raised while capturing a photo or dictating a caption.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("No file at {0}")]
    NotFound(String),

    #[error("{0} is not a supported image (expected one of: jpg, jpeg, png, gif, webp, heic, heif, bmp)")]
    NotAnImage(String),

    #[error("Transcript {0} contains no speech results")]
    EmptyTranscript(String),

    /// The capability does not exist on this platform.
    #[error("{0}")]
    Unsupported(String),

    #[error("Unknown platform '{0}' (expected native or browser)")]
    UnknownPlatform(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Target platform, selecting which capture and dictation variants are used.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Device build with file access and speech recognition.
    #[default]
    Native,
    /// Web build without speech recognition.
    Browser,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Native => write!(f, "native"),
            Platform::Browser => write!(f, "browser"),
        }
    }
}

impl FromStr for Platform {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(Platform::Native),
            "browser" | "web" => Ok(Platform::Browser),
            other => Err(CaptureError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Name and description of a provider, for display.
#[derive(Debug, Clone, Copy)]
pub struct ProviderInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Turns a picked or captured image file into an image URI.
pub trait CaptureProvider: Send + Sync {
    fn info(&self) -> ProviderInfo;

    /// Returns the URI to store for the image at `path`.
    fn pick(&self, path: &Path) -> Result<String, CaptureError>;
}

/// Produces caption text from a speech recognizer's output.
pub trait DictationProvider: Send + Sync {
    fn info(&self) -> ProviderInfo;

    /// Returns the best transcription found in `transcript`.
    fn transcribe(&self, transcript: &Path) -> Result<String, CaptureError>;
}

/// The capture and dictation pair for one platform.
pub struct Capabilities {
    pub platform: Platform,
    pub capture: Box<dyn CaptureProvider>,
    pub dictation: Box<dyn DictationProvider>,
}

impl Capabilities {
    /// Builds the providers for `platform`.
    pub fn for_platform(platform: Platform, locale: &str) -> Self {
        match platform {
            Platform::Native => Self {
                platform,
                capture: Box::new(native::FileCapture),
                dictation: Box::new(native::TranscriptDictation::new(locale)),
            },
            Platform::Browser => Self {
                platform,
                capture: Box::new(browser::DataUriCapture),
                dictation: Box::new(browser::NoDictation),
            },
        }
    }
}

/// Returns the MIME type for an image path, based on its extension.
pub fn image_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

/// Checks that `path` is an existing file with an image extension.
fn ensure_image_file(path: &Path) -> Result<&'static str, CaptureError> {
    if !path.is_file() {
        return Err(CaptureError::NotFound(path.display().to_string()));
    }
    image_mime_type(path).ok_or_else(|| CaptureError::NotAnImage(path.display().to_string()))
}
