//! Signed-in user session.
//!
//! The identity provider is external: all the gallery needs is the profile
//! of the current user and a way to end the session. The profile is kept in
//! the OS keychain when available, with a file fallback in the gallery
//! home.
//!
//! Components that need the current user take a `SessionProvider` as a
//! parameter; there is no process-wide session state.

pub mod store;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::gallery::GalleryStore;
use crate::storage::Storage;

pub use store::SessionStore;

/// Service name for keyring storage.
pub const KEYRING_SERVICE: &str = "gallery-session";

/// User identifier for the profile entry in keyring.
pub const KEYRING_PROFILE_USER: &str = "profile";

/// Errors raised by session storage.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Not signed in. Run 'gallery login' first.")]
    NotSignedIn,

    #[error("Credential storage error: {0}")]
    Keyring(String),

    #[error("Session file error: {0}")]
    File(String),
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,

    pub display_name: Option<String>,

    pub email: Option<String>,

    pub photo_url: Option<String>,
}

impl User {
    /// Creates a local guest profile with a fresh uid.
    pub fn guest(display_name: impl Into<String>) -> Self {
        Self {
            uid: uuid::Uuid::new_v4().to_string(),
            display_name: Some(display_name.into()),
            email: None,
            photo_url: None,
        }
    }

    /// Display name, falling back to email and then uid.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }
}

/// Source of the current user.
pub trait SessionProvider: Send + Sync {
    /// Returns the signed-in user, if any.
    fn current_user(&self) -> Result<Option<User>, SessionError>;

    /// Records `user` as signed in.
    fn sign_in(&self, user: &User) -> Result<(), SessionError>;

    /// Forgets the signed-in user. Signing out twice is not an error.
    fn sign_out(&self) -> Result<(), SessionError>;
}

/// Requires a signed-in user, returning an error otherwise.
pub fn require_user(provider: &dyn SessionProvider) -> Result<User, SessionError> {
    provider.current_user()?.ok_or(SessionError::NotSignedIn)
}

/// Signs out and optionally deletes the gallery document.
///
/// The session is ended even if clearing the gallery fails; the gallery
/// error is returned afterwards.
pub async fn sign_out_and_reset<S: Storage>(
    provider: &dyn SessionProvider,
    gallery: &GalleryStore<S>,
    clear_gallery: bool,
) -> Result<Option<User>> {
    let user = provider.current_user()?;
    provider.sign_out()?;

    if let Some(ref u) = user {
        tracing::info!(uid = %u.uid, "Signed out");
    }

    if clear_gallery {
        gallery.clear().await?;
        tracing::info!("Cleared gallery on sign-out");
    }

    Ok(user)
}
