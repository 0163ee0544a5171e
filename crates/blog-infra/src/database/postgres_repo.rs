//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use blog_core::domain::{BlogPost, Category};
use blog_core::error::RepoError;
use blog_core::ports::{BlogRepository, Page, PageRequest};

use super::entity::blog_post::{self, CategoryColumn, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL blog post repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogPostEntity>;

/// Base query for every listing: newest first, ties broken on id so pages
/// are stable across requests.
pub(crate) fn newest_first() -> Select<BlogPostEntity> {
    BlogPostEntity::find()
        .order_by_desc(blog_post::Column::CreatedAt)
        .order_by_desc(blog_post::Column::Id)
}

fn into_posts(models: Vec<blog_post::Model>) -> Vec<BlogPost> {
    models.into_iter().map(Into::into).collect()
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn list_recent(&self) -> Result<Vec<BlogPost>, RepoError> {
        let models = newest_first()
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(into_posts(models))
    }

    async fn list_page(&self, request: PageRequest) -> Result<Page<BlogPost>, RepoError> {
        tracing::debug!(
            page = request.page,
            limit = request.limit,
            "Fetching blog page"
        );

        let total = self.count().await?;
        let models = newest_first()
            .offset(request.offset())
            .limit(request.limit)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(Page {
            items: into_posts(models),
            total,
        })
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<BlogPost>, RepoError> {
        let models = newest_first()
            .filter(blog_post::Column::Category.eq(CategoryColumn::from(category)))
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(into_posts(models))
    }

    async fn find_featured(&self) -> Result<Vec<BlogPost>, RepoError> {
        let models = newest_first()
            .filter(blog_post::Column::Featured.eq(true))
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(into_posts(models))
    }

    async fn distinct_categories(&self) -> Result<Vec<Category>, RepoError> {
        let columns: Vec<CategoryColumn> = BlogPostEntity::find()
            .select_only()
            .column(blog_post::Column::Category)
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(query_error)?;

        let mut categories: Vec<Category> = columns.into_iter().map(Into::into).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        BlogPostEntity::find()
            .count(&self.db)
            .await
            .map_err(query_error)
    }
}
