//! In-memory blog store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, Category};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogRepository, Page, PageRequest};

/// Blog repository backed by a `HashMap` behind an async `RwLock`.
///
/// Note: Data is lost on process restart.
pub struct InMemoryBlogRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    async fn newest_first<F>(&self, keep: F) -> Vec<BlogPost>
    where
        F: Fn(&BlogPost) -> bool,
    {
        let store = self.store.read().await;
        let mut posts: Vec<BlogPost> = store.values().filter(|p| keep(p)).cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        posts
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        match store.get_mut(&post.id) {
            Some(slot) => {
                *slot = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list_recent(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.newest_first(|_| true).await)
    }

    async fn list_page(&self, request: PageRequest) -> Result<Page<BlogPost>, RepoError> {
        let posts = self.newest_first(|_| true).await;
        let total = posts.len() as u64;
        let items = posts
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.limit as usize)
            .collect();

        Ok(Page { items, total })
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.newest_first(|p| p.category == category).await)
    }

    async fn find_featured(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.newest_first(|p| p.featured).await)
    }

    async fn distinct_categories(&self) -> Result<Vec<Category>, RepoError> {
        let store = self.store.read().await;
        let mut categories: Vec<Category> = store.values().map(|p| p.category).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }
}
