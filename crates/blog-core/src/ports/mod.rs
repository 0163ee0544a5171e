//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod media;
mod repository;

pub use media::{MediaError, MediaStorage, StoredMedia};
pub use repository::{BaseRepository, BlogRepository, Page, PageRequest};
