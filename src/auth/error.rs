use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the authentication data layer.
///
/// Every variant is translated into a user-facing side effect at the
/// view-model boundary; none propagates to the view as a fault and none
/// is retried automatically.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the supplied credentials.
    #[error("invalid credentials")]
    Unauthorized,

    /// Transport-level failure talking to the backend.
    #[error("network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status other than an auth
    /// rejection.
    #[error("server error: status {status}")]
    Server { status: u16 },

    /// No profile has ever been saved locally.
    #[error("no saved teacher profile")]
    NotFound,

    #[error("failed to read auth store '{path}': {source}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write auth store '{path}': {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse auth store '{path}': {source}")]
    StorageParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode teacher profile: {source}")]
    StorageEncode {
        #[source]
        source: toml::ser::Error,
    },
}
