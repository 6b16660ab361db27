use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the persistence layer.
///
/// Read-side failures are usually swallowed by the stores (a broken store
/// degrades to an empty one); write-side failures propagate to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store lock timed out after {waited:?} at {path}")]
    LockTimeout { path: PathBuf, waited: Duration },

    #[error("failed to serialize stored value: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors from the mock authentication flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Deliberately generic: the message never reveals which credential was
    /// wrong.
    #[error("Invalid credentials. Try demo@test.com / password123")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),
}
