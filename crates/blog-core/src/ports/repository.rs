use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, Category};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Replace a stored entity. `RepoError::NotFound` if it no longer exists.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// One page of a listing request. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 10;

    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Coerce raw query values; anything that is not a positive integer
    /// falls back to the default. A valid limit is honoured as sent.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        fn positive(raw: Option<&str>) -> Option<u64> {
            raw.and_then(|s| s.trim().parse::<i64>().ok())
                .filter(|n| *n > 0)
                .map(|n| n as u64)
        }

        Self::new(
            positive(page).unwrap_or(Self::DEFAULT_PAGE),
            positive(limit).unwrap_or(Self::DEFAULT_LIMIT),
        )
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_LIMIT)
    }
}

/// A slice of results plus the size of the whole collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// Blog post repository. Every listing is ordered newest first.
#[async_trait]
pub trait BlogRepository: BaseRepository<BlogPost, Uuid> {
    async fn list_recent(&self) -> Result<Vec<BlogPost>, RepoError>;

    async fn list_page(&self, request: PageRequest) -> Result<Page<BlogPost>, RepoError>;

    async fn find_by_category(&self, category: Category) -> Result<Vec<BlogPost>, RepoError>;

    async fn find_featured(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Categories actually in use, in declaration order.
    async fn distinct_categories(&self) -> Result<Vec<Category>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;
}
