//! Data Transfer Objects - request/response types for the API.
//!
//! Every list comes back under `blogs`, a single document under `blog`
//! (with a `message` on mutations).

use serde::{Deserialize, Serialize};

/// Query string accepted by `GET /api/blogs`. Values are kept raw so that
/// garbage falls back to defaults instead of failing extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    /// Build from decoded query pairs. A repeated key keeps its first value
    /// and unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn is_paginated(&self) -> bool {
        self.page.is_some() || self.limit.is_some()
    }
}

/// A list of blog posts (full documents or summaries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogList<T> {
    pub blogs: Vec<T>,
}

/// One page of blog posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedBlogs<T> {
    pub blogs: Vec<T>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_blogs: u64,
}

/// A single blog post, with a message when it was just changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogEnvelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub blog: T,
}

impl<T> BlogEnvelope<T> {
    pub fn new(blog: T) -> Self {
        Self {
            message: None,
            blog,
        }
    }

    pub fn with_message(message: impl Into<String>, blog: T) -> Self {
        Self {
            message: Some(message.into()),
            blog,
        }
    }
}

/// Posts in one category, split on the featured flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroups<T> {
    pub featured: Vec<T>,
    pub others: Vec<T>,
}

impl<T> Default for CategoryGroups<T> {
    fn default() -> Self {
        Self {
            featured: Vec::new(),
            others: Vec::new(),
        }
    }
}

/// Categories in use across stored posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

/// Response to a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    /// Public path to reference from `feature_image`, `image` or `video_url`.
    pub url: String,
    pub file_name: String,
}
