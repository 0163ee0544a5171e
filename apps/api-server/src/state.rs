//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use blog_core::ports::{BlogRepository, MediaStorage};
use blog_infra::database::{DatabaseConnections, InMemoryBlogRepository};
use blog_infra::media::LocalMediaStorage;

#[cfg(feature = "postgres")]
use blog_infra::database::PostgresBlogRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub media: Arc<dyn MediaStorage>,
    pub db: Option<Arc<DatabaseConnections>>,
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// A configured database that cannot be reached is a startup error;
    /// no `DATABASE_URL` at all selects the in-memory store.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let storage = LocalMediaStorage::new(&config.uploads.dir);
        storage.ensure_dirs().await.with_context(|| {
            format!(
                "failed to create upload directories under {}",
                config.uploads.dir.display()
            )
        })?;
        let media: Arc<dyn MediaStorage> = Arc::new(storage);

        let max_upload_bytes = config.uploads.max_file_bytes;

        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                let connections = DatabaseConnections::init(db_config)
                    .await
                    .context("failed to connect to database")?;
                let conn = Arc::new(connections);
                let blogs = Arc::new(PostgresBlogRepository::new(conn.main.clone()));
                tracing::info!(
                    storage = "postgres",
                    upload_dir = %config.uploads.dir.display(),
                    "Application state initialized"
                );
                return Ok(Self {
                    blogs,
                    media,
                    db: Some(conn),
                    max_upload_bytes,
                });
            }
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "postgres"))]
        {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
        }

        tracing::info!(
            storage = "memory",
            upload_dir = %config.uploads.dir.display(),
            "Application state initialized"
        );
        Ok(Self::in_memory(media, max_upload_bytes))
    }

    /// State over the in-memory store, used when no database is wanted.
    pub fn in_memory(media: Arc<dyn MediaStorage>, max_upload_bytes: usize) -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            media,
            db: None,
            max_upload_bytes,
        }
    }

    /// Name of the backing store, reported by the health check.
    pub fn storage(&self) -> &'static str {
        if self.db.is_some() { "postgres" } else { "memory" }
    }

    /// Whether the backing store answers. Always true for the in-memory store.
    pub async fn storage_healthy(&self) -> bool {
        #[cfg(feature = "postgres")]
        {
            if let Some(db) = &self.db {
                return match db.ping().await {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::warn!(error = %e, "Database ping failed");
                        false
                    }
                };
            }
        }
        true
    }

    /// Release the database pool, if any.
    pub async fn close(&self) -> anyhow::Result<()> {
        #[cfg(feature = "postgres")]
        {
            if let Some(db) = &self.db {
                db.close().await.context("failed to close database")?;
            }
        }
        Ok(())
    }
}
