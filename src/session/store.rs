//! Session profile storage.
//!
//! Uses the OS keychain when available, with a fallback to a JSON file in
//! the gallery home for systems where the keychain is not accessible.

use keyring::Entry;
use std::fs;
use std::path::{Path, PathBuf};

use super::{SessionError, SessionProvider, User, KEYRING_PROFILE_USER, KEYRING_SERVICE};

/// Keychain-backed profile storage with a file fallback.
pub struct SessionStore {
    /// Whether keyring is available on this system.
    keyring_available: bool,

    /// Fallback profile file.
    profile_path: PathBuf,
}

impl SessionStore {
    /// Creates a store rooted at `home`.
    ///
    /// When `use_keyring` is set, detects whether the OS keychain works.
    pub fn new(home: &Path, use_keyring: bool) -> Self {
        let keyring_available = use_keyring && Self::test_keyring_available();
        tracing::debug!(keyring_available, "Opened session store");
        Self {
            keyring_available,
            profile_path: home.join("session.json"),
        }
    }

    /// Creates a store that only uses the profile file.
    pub fn file_only(home: &Path) -> Self {
        Self {
            keyring_available: false,
            profile_path: home.join("session.json"),
        }
    }

    /// Where the profile is kept, for display.
    pub fn location(&self) -> String {
        if self.keyring_available {
            format!("OS keychain ({KEYRING_SERVICE})")
        } else {
            self.profile_path.display().to_string()
        }
    }

    /// Tests whether the keyring is available by attempting a dummy operation.
    fn test_keyring_available() -> bool {
        match Entry::new(KEYRING_SERVICE, "test-availability") {
            Ok(entry) => match entry.get_password() {
                Ok(_) => true,
                Err(keyring::Error::NoEntry) => true,
                Err(_) => false,
            },
            Err(_) => false,
        }
    }

    fn entry() -> Result<Entry, SessionError> {
        Entry::new(KEYRING_SERVICE, KEYRING_PROFILE_USER)
            .map_err(|e| SessionError::Keyring(e.to_string()))
    }

    // ==================== Keyring operations ====================

    fn store_to_keyring(&self, user: &User) -> Result<(), SessionError> {
        let json = serde_json::to_string(user)
            .map_err(|e| SessionError::Keyring(format!("Serialization error: {e}")))?;

        Self::entry()?
            .set_password(&json)
            .map_err(|e| SessionError::Keyring(e.to_string()))
    }

    fn load_from_keyring(&self) -> Result<Option<User>, SessionError> {
        match Self::entry()?.get_password() {
            Ok(json) => {
                let user = serde_json::from_str(&json)
                    .map_err(|e| SessionError::Keyring(format!("Deserialization error: {e}")))?;
                Ok(Some(user))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(SessionError::Keyring(e.to_string())),
        }
    }

    fn delete_from_keyring(&self) -> Result<(), SessionError> {
        match Self::entry()?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(SessionError::Keyring(e.to_string())),
        }
    }

    // ==================== File operations ====================

    fn store_to_file(&self, user: &User) -> Result<(), SessionError> {
        if let Some(parent) = self.profile_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SessionError::File(format!("Failed to create gallery directory: {e}"))
            })?;
        }

        let json = serde_json::to_string_pretty(user)
            .map_err(|e| SessionError::File(format!("Serialization error: {e}")))?;

        fs::write(&self.profile_path, json)
            .map_err(|e| SessionError::File(format!("Failed to write session file: {e}")))?;

        // Set restrictive permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.profile_path, perms).map_err(|e| {
                SessionError::File(format!("Failed to set file permissions: {e}"))
            })?;
        }

        Ok(())
    }

    fn load_from_file(&self) -> Result<Option<User>, SessionError> {
        if !self.profile_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.profile_path)
            .map_err(|e| SessionError::File(format!("Failed to read session file: {e}")))?;

        let user = serde_json::from_str(&json)
            .map_err(|e| SessionError::File(format!("Invalid session file: {e}")))?;

        Ok(Some(user))
    }

    fn delete_from_file(&self) -> Result<(), SessionError> {
        if self.profile_path.exists() {
            fs::remove_file(&self.profile_path)
                .map_err(|e| SessionError::File(format!("Failed to delete session file: {e}")))?;
        }
        Ok(())
    }
}

impl SessionProvider for SessionStore {
    fn current_user(&self) -> Result<Option<User>, SessionError> {
        if self.keyring_available {
            if let Some(user) = self.load_from_keyring()? {
                return Ok(Some(user));
            }
        }

        self.load_from_file()
    }

    fn sign_in(&self, user: &User) -> Result<(), SessionError> {
        if self.keyring_available {
            self.store_to_keyring(user)?;
        } else {
            self.store_to_file(user)?;
        }
        tracing::info!(uid = %user.uid, "Signed in");
        Ok(())
    }

    fn sign_out(&self) -> Result<(), SessionError> {
        if self.keyring_available {
            self.delete_from_keyring()?;
        }
        self.delete_from_file()
    }
}
