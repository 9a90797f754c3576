use std::path::PathBuf;

use thiserror::Error;

use invcalc_core::DomainError;

/// Store operation error.
///
/// Wraps domain rejections (validation, duplicates, unknown ids) and keeps
/// storage failures distinguishable so callers can pick their own messaging.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }

    /// True for failures of the backing storage rather than of the request.
    pub fn is_storage_failure(&self) -> bool {
        !matches!(self, StoreError::Domain(_))
    }
}
