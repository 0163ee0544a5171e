//! Blog post entity for SeaORM.
//!
//! Sections are embedded in the row as a JSONB document rather than split
//! into their own table: they have no identity outside their post and are
//! always read and replaced as a whole.

use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

use blog_core::domain::{BlogPost, Category, Section};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub category: CategoryColumn,
    pub author: String,
    pub feature_image: Option<String>,
    pub video_url: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub sections: Sections,
    pub featured: bool,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Category as stored in the `category` text column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum CategoryColumn {
    #[sea_orm(string_value = "NBA")]
    Nba,
    #[sea_orm(string_value = "NHL")]
    Nhl,
    #[sea_orm(string_value = "NFL")]
    Nfl,
    #[sea_orm(string_value = "MLB")]
    Mlb,
    #[sea_orm(string_value = "Esports")]
    Esports,
    #[sea_orm(string_value = "Footy")]
    Footy,
    #[sea_orm(string_value = "Other")]
    Other,
}

/// One embedded section inside the `sections` document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub heading: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Sections(pub Vec<SectionRecord>);

impl From<Category> for CategoryColumn {
    fn from(category: Category) -> Self {
        match category {
            Category::Nba => Self::Nba,
            Category::Nhl => Self::Nhl,
            Category::Nfl => Self::Nfl,
            Category::Mlb => Self::Mlb,
            Category::Esports => Self::Esports,
            Category::Footy => Self::Footy,
            Category::Other => Self::Other,
        }
    }
}

impl From<CategoryColumn> for Category {
    fn from(column: CategoryColumn) -> Self {
        match column {
            CategoryColumn::Nba => Self::Nba,
            CategoryColumn::Nhl => Self::Nhl,
            CategoryColumn::Nfl => Self::Nfl,
            CategoryColumn::Mlb => Self::Mlb,
            CategoryColumn::Esports => Self::Esports,
            CategoryColumn::Footy => Self::Footy,
            CategoryColumn::Other => Self::Other,
        }
    }
}

impl From<Section> for SectionRecord {
    fn from(section: Section) -> Self {
        Self {
            heading: section.heading,
            content: section.content,
            image: section.image,
            caption: section.caption,
        }
    }
}

impl From<SectionRecord> for Section {
    fn from(record: SectionRecord) -> Self {
        Self {
            heading: record.heading,
            content: record.content,
            image: record.image,
            caption: record.caption,
        }
    }
}

/// Conversion from SeaORM Model to domain BlogPost.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            category: model.category.into(),
            author: model.author,
            feature_image: model.feature_image,
            video_url: model.video_url,
            sections: model.sections.0.into_iter().map(Into::into).collect(),
            featured: model.featured,
            is_published: model.is_published,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from domain BlogPost to SeaORM ActiveModel.
impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            category: Set(post.category.into()),
            author: Set(post.author),
            feature_image: Set(post.feature_image),
            video_url: Set(post.video_url),
            sections: Set(Sections(post.sections.into_iter().map(Into::into).collect())),
            featured: Set(post.featured),
            is_published: Set(post.is_published),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
