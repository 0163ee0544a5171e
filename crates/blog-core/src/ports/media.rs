//! Media storage port - where uploaded images and videos live.

use async_trait::async_trait;

use crate::domain::MediaKind;

/// Result of a successful store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    /// Final file name, possibly suffixed to avoid a collision.
    pub file_name: String,
    /// Public path the file is served at, e.g. `/uploads/blogs/1700000000000.png`.
    pub url: String,
}

/// Media storage trait - abstraction over where uploaded files are kept.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store `bytes` under `file_name` in the directory for `kind`.
    async fn store(
        &self,
        kind: MediaKind,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaError>;

    /// Remove the file behind a public media path.
    async fn remove(&self, public_path: &str) -> Result<(), MediaError>;
}

/// Media storage errors.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Invalid media path: {0}")]
    InvalidPath(String),

    #[error("Media not found: {0}")]
    NotFound(String),

    #[error("Storage failed: {0}")]
    Storage(String),
}
