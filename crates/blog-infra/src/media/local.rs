//! Local-disk media storage - uploads live under a root directory that is
//! also served statically at `/uploads`.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use blog_core::domain::MediaKind;
use blog_core::domain::validation::MEDIA_URL_PREFIX;
use blog_core::ports::{MediaError, MediaStorage, StoredMedia};

/// Gives up on finding a free name after this many suffixed attempts.
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Media storage on the local filesystem.
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the root and one directory per media kind.
    pub async fn ensure_dirs(&self) -> std::io::Result<()> {
        for kind in [MediaKind::Image, MediaKind::Video] {
            let dir = self.root.join(kind.dir_name());
            if fs::metadata(&dir).await.is_err() {
                fs::create_dir_all(&dir).await?;
                tracing::info!(dir = %dir.display(), "Created upload directory");
            }
        }
        Ok(())
    }

    /// Map a public path like `/uploads/blogs/1.png` onto the root.
    /// Anything outside the prefix or climbing out of the root is rejected.
    fn resolve(&self, public_path: &str) -> Result<PathBuf, MediaError> {
        let relative = public_path
            .strip_prefix(MEDIA_URL_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| MediaError::InvalidPath(public_path.to_string()))?;

        let relative = Path::new(relative);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes || relative.as_os_str().is_empty() {
            return Err(MediaError::InvalidPath(public_path.to_string()));
        }

        Ok(self.root.join(relative))
    }

    fn candidate_name(file_name: &str, attempt: u32) -> String {
        if attempt == 0 {
            return file_name.to_string();
        }
        match file_name.rsplit_once('.') {
            Some((stem, ext)) => format!("{}-{}.{}", stem, attempt, ext),
            None => format!("{}-{}", file_name, attempt),
        }
    }
}

/// Write `bytes` to a freshly claimed file. On failure the partial file at
/// `path` is removed so it is never served.
async fn write_or_discard<W>(path: &Path, mut writer: W, bytes: &[u8]) -> Result<(), MediaError>
where
    W: AsyncWrite + Unpin,
{
    let written: std::io::Result<()> = async {
        writer.write_all(bytes).await?;
        writer.flush().await
    }
    .await;

    if let Err(e) = written {
        drop(writer);
        if let Err(cleanup) = fs::remove_file(path).await {
            tracing::warn!(
                path = %path.display(),
                error = %cleanup,
                "Failed to remove partial upload"
            );
        }
        return Err(MediaError::Storage(e.to_string()));
    }
    Ok(())
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(
        &self,
        kind: MediaKind,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaError> {
        if file_name.contains(['/', '\\']) || file_name.starts_with('.') {
            return Err(MediaError::InvalidPath(file_name.to_string()));
        }

        let dir = self.root.join(kind.dir_name());

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = Self::candidate_name(file_name, attempt);
            let path = dir.join(&name);

            let file = match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(MediaError::Storage(e.to_string())),
            };

            write_or_discard(&path, file, bytes).await?;

            tracing::debug!(path = %path.display(), size = bytes.len(), "Stored media file");

            return Ok(StoredMedia {
                url: format!("{}/{}/{}", MEDIA_URL_PREFIX, kind.dir_name(), name),
                file_name: name,
            });
        }

        Err(MediaError::Storage(format!(
            "no free file name for {}",
            file_name
        )))
    }

    async fn remove(&self, public_path: &str) -> Result<(), MediaError> {
        let path = self.resolve(public_path)?;

        fs::remove_file(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => MediaError::NotFound(public_path.to_string()),
            _ => MediaError::Storage(e.to_string()),
        })?;

        tracing::debug!(path = %path.display(), "Removed media file");
        Ok(())
    }
}
