//! Blog post handlers.

use std::sync::Arc;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{BlogInput, BlogPost, BlogSummary, Category};
use blog_core::error::DomainError;
use blog_core::ports::{MediaError, MediaStorage, PageRequest};
use blog_shared::dto::{
    BlogEnvelope, BlogList, CategoryGroups, CategoryList, ListQuery, PaginatedBlogs,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn parse_blog_id(raw: &str) -> AppResult<Uuid> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::BadRequest("Blog ID is required".to_string()));
    }
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid blog ID: {raw}")))
}

async fn load(state: &AppState, id: Uuid) -> AppResult<BlogPost> {
    state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| {
            DomainError::NotFound {
                entity_type: "Blog",
                id,
            }
            .into()
        })
}

/// GET /api/blogs
pub async fn list_blogs(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let query = ListQuery::from_pairs(query.into_inner());
    if !query.is_paginated() {
        let blogs = state.blogs.list_recent().await?;
        return Ok(HttpResponse::Ok().json(BlogList { blogs }));
    }

    let request = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());
    let page = state.blogs.list_page(request).await?;

    Ok(HttpResponse::Ok().json(PaginatedBlogs {
        blogs: page.items,
        current_page: request.page,
        total_pages: request.total_pages(page.total),
        total_blogs: page.total,
    }))
}

/// GET /api/blogs/summary
pub async fn list_summaries(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs: Vec<BlogSummary> = state
        .blogs
        .list_recent()
        .await?
        .iter()
        .map(BlogPost::summary)
        .collect();

    Ok(HttpResponse::Ok().json(BlogList { blogs }))
}

/// GET /api/blogs/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_blog_id(&path)?;
    let blog = load(&state, id).await?;

    Ok(HttpResponse::Ok().json(BlogEnvelope::new(blog)))
}

/// GET /api/blogs/category/{category}
///
/// Unknown categories have no posts, so they answer with empty groups.
pub async fn get_by_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw = path.trim();
    if raw.is_empty() {
        return Err(AppError::BadRequest("Category is required".to_string()));
    }

    let Some(category) = Category::parse_ignore_case(raw) else {
        tracing::debug!(category = %raw, "Unknown category requested");
        return Ok(HttpResponse::Ok().json(CategoryGroups::<BlogPost>::default()));
    };

    let (featured, others): (Vec<BlogPost>, Vec<BlogPost>) = state
        .blogs
        .find_by_category(category)
        .await?
        .into_iter()
        .partition(|blog| blog.featured);

    Ok(HttpResponse::Ok().json(CategoryGroups { featured, others }))
}

/// GET /api/blogs/featured
pub async fn list_featured(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_featured().await?;
    Ok(HttpResponse::Ok().json(BlogList { blogs }))
}

/// GET /api/blogs/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state
        .blogs
        .distinct_categories()
        .await?
        .into_iter()
        .map(|c| c.as_str().to_string())
        .collect();

    Ok(HttpResponse::Ok().json(CategoryList { categories }))
}

/// POST /api/blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<BlogInput>,
) -> AppResult<HttpResponse> {
    let blog = BlogPost::create(body.into_inner())?;
    let blog = state.blogs.insert(blog).await?;

    tracing::info!(blog_id = %blog.id, category = %blog.category, "Blog created");

    Ok(HttpResponse::Created().json(BlogEnvelope::with_message(
        "Blog created successfully",
        blog,
    )))
}

/// PUT /api/blogs/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogInput>,
) -> AppResult<HttpResponse> {
    let id = parse_blog_id(&path)?;
    let blog = load(&state, id).await?.apply(body.into_inner())?;
    let blog = state.blogs.update(blog).await?;

    tracing::info!(blog_id = %blog.id, "Blog updated");

    Ok(HttpResponse::Ok().json(BlogEnvelope::with_message(
        "Blog updated successfully",
        blog,
    )))
}

/// DELETE /api/blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_blog_id(&path)?;
    let blog = load(&state, id).await?;
    state.blogs.delete(id).await?;

    tracing::info!(blog_id = %id, "Blog deleted");

    let paths: Vec<String> = blog
        .local_media_paths()
        .into_iter()
        .map(str::to_string)
        .collect();
    if !paths.is_empty() {
        actix_web::rt::spawn(remove_local_media(state.media.clone(), paths));
    }

    Ok(HttpResponse::Ok().json(BlogEnvelope::with_message(
        "Blog deleted successfully",
        blog,
    )))
}

/// Best-effort cleanup of files a deleted post referenced.
async fn remove_local_media(media: Arc<dyn MediaStorage>, paths: Vec<String>) {
    for path in paths {
        match media.remove(&path).await {
            Ok(()) => tracing::debug!(path = %path, "Deleted local media"),
            Err(MediaError::NotFound(_)) => {
                tracing::debug!(path = %path, "Local media already gone")
            }
            Err(e) => tracing::warn!(path = %path, error = %e, "Failed to delete local media"),
        }
    }
}

/// PATCH|PUT /api/blogs/{id}/feature
pub async fn toggle_featured(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_blog_id(&path)?;
    let mut blog = load(&state, id).await?;
    let featured = blog.toggle_featured();
    blog.validate()?;
    let blog = state.blogs.update(blog).await?;

    let message = if featured {
        "Blog featured successfully"
    } else {
        "Blog unfeatured successfully"
    };
    tracing::info!(blog_id = %id, featured, "Blog featured flag toggled");

    Ok(HttpResponse::Ok().json(BlogEnvelope::with_message(message, blog)))
}
