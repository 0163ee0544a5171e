//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate contains the blog post stores and local media storage.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL document store via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;
pub mod media;

pub use database::{DatabaseConfig, DatabaseConnections, InMemoryBlogRepository};
pub use media::LocalMediaStorage;

#[cfg(feature = "postgres")]
pub use database::PostgresBlogRepository;
