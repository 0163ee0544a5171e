//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blog_infra::database::DatabaseConfig;

/// Upload handling configuration.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Root directory; images go to `<dir>/blogs`, videos to `<dir>/videos`.
    pub dir: PathBuf,
    /// Largest accepted file, in bytes.
    pub max_file_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads"),
            max_file_bytes: 50 * 1024 * 1024,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub uploads: UploadConfig,
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parsed("DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parsed("DB_MIN_CONNECTIONS").unwrap_or(2),
            sqlx_logging: parsed("DB_SQLX_LOGGING").unwrap_or(false),
        });

        let defaults = UploadConfig::default();
        let uploads = UploadConfig {
            dir: env::var("UPLOAD_DIR").map(PathBuf::from).unwrap_or(defaults.dir),
            max_file_bytes: parsed("MAX_UPLOAD_BYTES").unwrap_or(defaults.max_file_bytes),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT").unwrap_or(5000),
            database,
            uploads,
        }
    }
}
