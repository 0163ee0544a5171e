use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::validation::{
    check_media_path, check_video_url, is_local_media, non_empty, require_text,
};
use crate::error::ValidationErrors;

pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// One block of a post's body, optionally illustrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Blog post entity - a single article and its embedded sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub category: Category,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub sections: Vec<Section>,
    pub featured: bool,
    #[serde(rename = "isPublished")]
    pub is_published: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Section as submitted by a client, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionInput {
    pub heading: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub caption: Option<String>,
}

/// Write payload for both create and update. Absent fields are left to
/// defaults on create and left untouched on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogInput {
    pub title: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub feature_image: Option<String>,
    pub video_url: Option<String>,
    pub sections: Option<Vec<SectionInput>>,
    pub featured: Option<bool>,
    #[serde(rename = "isPublished", alias = "is_published")]
    pub is_published: Option<bool>,
}

/// Listing projection without section bodies.
#[derive(Debug, Clone, Serialize)]
pub struct BlogSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub category: Category,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_image: Option<String>,
    pub featured: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<SectionInput> for Section {
    fn from(input: SectionInput) -> Self {
        Self {
            heading: input.heading.unwrap_or_default(),
            content: input.content.unwrap_or_default(),
            image: non_empty(input.image),
            caption: non_empty(input.caption),
        }
    }
}

impl From<&BlogPost> for BlogSummary {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            category: post.category,
            author: post.author.clone(),
            feature_image: post.feature_image.clone(),
            featured: post.featured,
            created_at: post.created_at,
        }
    }
}

fn parse_category(errors: &mut ValidationErrors, raw: &str) -> Option<Category> {
    match raw.parse() {
        Ok(category) => Some(category),
        Err(e) => {
            errors.add(
                "category",
                format!(
                    "{}; expected one of {}",
                    e,
                    Category::ALL.map(|c| c.as_str()).join(", ")
                ),
            );
            None
        }
    }
}

fn replacement_sections(
    errors: &mut ValidationErrors,
    sections: Vec<SectionInput>,
) -> Option<Vec<Section>> {
    if sections.is_empty() {
        errors.add("sections", "at least one section is required");
        return None;
    }
    Some(sections.into_iter().map(Section::from).collect())
}

impl BlogPost {
    /// Build a new post from a create payload, applying defaults.
    ///
    /// Requires a title and at least one section. The category falls back to
    /// `Other` only when it is absent; an unknown category is rejected.
    pub fn create(input: BlogInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let category = match input.category.as_deref() {
            None => Category::default(),
            Some(raw) => parse_category(&mut errors, raw).unwrap_or_default(),
        };
        let sections = replacement_sections(&mut errors, input.sections.unwrap_or_default())
            .unwrap_or_default();

        let now = Utc::now();
        let post = Self {
            id: Uuid::new_v4(),
            title: input.title.unwrap_or_default(),
            category,
            author: input.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            feature_image: non_empty(input.feature_image),
            video_url: non_empty(input.video_url),
            sections,
            featured: input.featured.unwrap_or(false),
            is_published: input.is_published.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        errors.extend(post.check());
        errors.into_result(post)
    }

    /// Apply a partial update. Present fields replace the stored ones and
    /// `sections` replaces the whole list. An empty string clears an optional
    /// media field.
    pub fn apply(mut self, input: BlogInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if let Some(title) = input.title {
            self.title = title;
        }
        if let Some(category) = input
            .category
            .as_deref()
            .and_then(|raw| parse_category(&mut errors, raw))
        {
            self.category = category;
        }
        if let Some(author) = input.author {
            self.author = author;
        }
        if input.feature_image.is_some() {
            self.feature_image = non_empty(input.feature_image);
        }
        if input.video_url.is_some() {
            self.video_url = non_empty(input.video_url);
        }
        if let Some(sections) = input
            .sections
            .and_then(|sections| replacement_sections(&mut errors, sections))
        {
            self.sections = sections;
        }
        if let Some(featured) = input.featured {
            self.featured = featured;
        }
        if let Some(is_published) = input.is_published {
            self.is_published = is_published;
        }

        errors.extend(self.check());
        self.updated_at = Utc::now();
        errors.into_result(self)
    }

    /// Check every field constraint. Run before each write.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.check().into_result(())
    }

    fn check(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        require_text(&mut errors, "title", &self.title);
        require_text(&mut errors, "author", &self.author);
        check_media_path(&mut errors, "feature_image", self.feature_image.as_deref());
        check_video_url(&mut errors, "video_url", self.video_url.as_deref());

        for (i, section) in self.sections.iter().enumerate() {
            require_text(&mut errors, &format!("sections[{}].heading", i), &section.heading);
            require_text(&mut errors, &format!("sections[{}].content", i), &section.content);
            check_media_path(
                &mut errors,
                &format!("sections[{}].image", i),
                section.image.as_deref(),
            );
        }

        errors
    }

    /// Flip the featured flag, returning the new value.
    pub fn toggle_featured(&mut self) -> bool {
        self.featured = !self.featured;
        self.updated_at = Utc::now();
        self.featured
    }

    /// Feature and section images stored on local disk.
    pub fn local_media_paths(&self) -> Vec<&str> {
        self.feature_image
            .iter()
            .chain(self.sections.iter().filter_map(|s| s.image.as_ref()))
            .map(String::as_str)
            .filter(|path| is_local_media(path))
            .collect()
    }

    pub fn summary(&self) -> BlogSummary {
        BlogSummary::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: &str, content: &str) -> SectionInput {
        SectionInput {
            heading: Some(heading.to_string()),
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    fn input() -> BlogInput {
        BlogInput {
            title: Some("Test Blog".to_string()),
            category: Some("NBA".to_string()),
            author: Some("Test Author".to_string()),
            sections: Some(vec![section("Intro", "Tip-off")]),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let post = BlogPost::create(BlogInput {
            category: None,
            author: None,
            ..input()
        })
        .unwrap();

        assert_eq!(post.category, Category::Other);
        assert_eq!(post.author, DEFAULT_AUTHOR);
        assert!(!post.featured);
        assert!(post.is_published);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let err = BlogPost::create(BlogInput {
            category: Some("Cricket".to_string()),
            ..input()
        })
        .unwrap_err();

        assert!(err.has_field("category"));
    }

    #[test]
    fn test_create_requires_sections() {
        let err = BlogPost::create(BlogInput {
            sections: Some(vec![]),
            ..input()
        })
        .unwrap_err();
        assert!(err.has_field("sections"));

        let err = BlogPost::create(BlogInput {
            sections: None,
            ..input()
        })
        .unwrap_err();
        assert!(err.has_field("sections"));
    }

    #[test]
    fn test_create_requires_section_heading_and_content() {
        let err = BlogPost::create(BlogInput {
            sections: Some(vec![SectionInput {
                content: Some("body".to_string()),
                ..Default::default()
            }]),
            ..input()
        })
        .unwrap_err();
        assert!(err.has_field("sections[0].heading"));

        let err = BlogPost::create(BlogInput {
            sections: Some(vec![section("Intro", "   ")]),
            ..input()
        })
        .unwrap_err();
        assert!(err.has_field("sections[0].content"));
    }

    #[test]
    fn test_create_collects_every_violation() {
        let err = BlogPost::create(BlogInput {
            title: None,
            feature_image: Some("ftp://nope".to_string()),
            video_url: Some("/uploads/videos/1.mp4".to_string()),
            ..input()
        })
        .unwrap_err();

        assert!(err.has_field("title"));
        assert!(err.has_field("feature_image"));
        assert!(err.has_field("video_url"));
    }

    #[test]
    fn test_create_keeps_section_media() {
        let post = BlogPost::create(BlogInput {
            feature_image: Some("/uploads/blogs/feature.jpg".to_string()),
            sections: Some(vec![SectionInput {
                image: Some("/uploads/blogs/s1.jpg".to_string()),
                caption: Some("Caption".to_string()),
                ..section("Intro", "Body")
            }]),
            ..input()
        })
        .unwrap();

        assert_eq!(post.sections[0].image.as_deref(), Some("/uploads/blogs/s1.jpg"));
        assert_eq!(post.sections[0].caption.as_deref(), Some("Caption"));
    }

    #[test]
    fn test_apply_replaces_sections_wholesale() {
        let post = BlogPost::create(BlogInput {
            sections: Some(vec![section("One", "1"), section("Two", "2")]),
            ..input()
        })
        .unwrap();

        let updated = post
            .apply(BlogInput {
                sections: Some(vec![section("Only", "just one")]),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.sections.len(), 1);
        assert_eq!(updated.sections[0].heading, "Only");
        assert_eq!(updated.title, "Test Blog");
    }

    #[test]
    fn test_apply_rejects_empty_sections_and_bad_category() {
        let post = BlogPost::create(input()).unwrap();

        let err = post
            .clone()
            .apply(BlogInput {
                sections: Some(vec![]),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.has_field("sections"));

        let err = post
            .apply(BlogInput {
                category: Some("Curling".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.has_field("category"));
    }

    #[test]
    fn test_apply_empty_string_clears_feature_image() {
        let post = BlogPost::create(BlogInput {
            feature_image: Some("https://cdn.example.com/a.png".to_string()),
            ..input()
        })
        .unwrap();

        let updated = post
            .apply(BlogInput {
                feature_image: Some(String::new()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.feature_image, None);
    }

    #[test]
    fn test_toggle_featured_twice_restores() {
        let mut post = BlogPost::create(input()).unwrap();
        let original = post.featured;

        assert_eq!(post.toggle_featured(), !original);
        assert_eq!(post.toggle_featured(), original);
    }

    #[test]
    fn test_local_media_paths_skip_external_urls() {
        let post = BlogPost::create(BlogInput {
            feature_image: Some("/uploads/blogs/feature.jpg".to_string()),
            sections: Some(vec![
                SectionInput {
                    image: Some("https://cdn.example.com/remote.jpg".to_string()),
                    ..section("A", "a")
                },
                SectionInput {
                    image: Some("/uploads/blogs/local.jpg".to_string()),
                    ..section("B", "b")
                },
                section("C", "c"),
            ]),
            ..input()
        })
        .unwrap();

        assert_eq!(
            post.local_media_paths(),
            vec!["/uploads/blogs/feature.jpg", "/uploads/blogs/local.jpg"]
        );
    }

    #[test]
    fn test_wire_names() {
        let post = BlogPost::create(input()).unwrap();
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["_id"], post.id.to_string());
        assert_eq!(json["category"], "NBA");
        assert_eq!(json["isPublished"], true);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("feature_image").is_none());

        let summary = serde_json::to_value(post.summary()).unwrap();
        assert!(summary.get("sections").is_none());
        assert_eq!(summary["title"], "Test Blog");
    }
}
