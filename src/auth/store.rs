//! File-backed local auth store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::auth::error::AuthError;
use crate::auth::LocalAuthSource;
use crate::domain::TeacherProfile;

/// Stores the logged-in teacher's profile as a TOML file.
///
/// Lives at `~/.config/sweepcheck/teacher.toml` (or the platform
/// equivalent via `dirs::config_dir()`). Saves go through a temp file
/// plus rename so a concurrent reader never sees a half-written
/// profile.
pub struct AuthFileStore {
    path: PathBuf,
}

impl AuthFileStore {
    /// Store at the default platform config location.
    ///
    /// Falls back to the current directory if no config dir is
    /// available.
    pub fn open_default() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: config_dir.join("sweepcheck").join("teacher.toml"),
        }
    }

    /// Store at an explicit path. Used by tests and non-default setups.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_profile(&self) -> Result<TeacherProfile, AuthError> {
        if !self.path.exists() {
            return Err(AuthError::NotFound);
        }

        let content = fs::read_to_string(&self.path).map_err(|source| AuthError::StorageRead {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| AuthError::StorageParse {
            path: self.path.clone(),
            source,
        })
    }
}

impl LocalAuthSource for AuthFileStore {
    fn is_token_empty(&self) -> bool {
        match self.read_profile() {
            Ok(profile) => profile.token.is_empty(),
            Err(AuthError::NotFound) => true,
            Err(err) => {
                // Unreadable store counts as logged out rather than
                // surfacing a fault at screen entry.
                tracing::warn!(error = %err, "auth store unreadable, treating as empty");
                true
            }
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "auth store cleared"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(error = %err, path = %self.path.display(), "failed to clear auth store");
            }
        }
    }

    fn save(&self, profile: &TeacherProfile) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| AuthError::StorageWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content =
            toml::to_string_pretty(profile).map_err(|source| AuthError::StorageEncode { source })?;

        // Write-then-rename keeps the swap atomic for readers.
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content).map_err(|source| AuthError::StorageWrite {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| AuthError::StorageWrite {
            path: self.path.clone(),
            source,
        })
    }

    fn fetch(&self) -> Result<TeacherProfile, AuthError> {
        self.read_profile()
    }
}
