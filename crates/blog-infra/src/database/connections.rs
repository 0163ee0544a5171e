#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Log every statement sqlx executes.
    pub sqlx_logging: bool,
}

/// Database connection handle, created once at startup and shared by the
/// repositories built on top of it.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&config).await?;
/// let blogs = PostgresBlogRepository::new(db.main.clone());
/// // ... serve requests ...
/// db.close().await?;
/// ```
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    /// Primary database pool.
    pub main: DbConn,
}

#[cfg(not(feature = "postgres"))]
pub struct DatabaseConnections;

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Open the connection pool from configuration.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(config.sqlx_logging)
            .to_owned();

        let main = Database::connect(opts).await?;
        main.ping().await?;
        tracing::info!(
            pool = config.max_connections,
            "Blog database connected"
        );

        Ok(Self { main })
    }

    /// Round-trip to the database.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }

    /// Close the pool. Clones of `main` held elsewhere stop working too.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.main.close_by_ref().await?;
        tracing::info!("Blog database connection closed");
        Ok(())
    }
}
