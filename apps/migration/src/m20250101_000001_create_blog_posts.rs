use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BlogPosts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(BlogPosts::Title).string().not_null())
                    .col(
                        ColumnDef::new(BlogPosts::Category)
                            .text()
                            .not_null()
                            .default("Other"),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::Author)
                            .string()
                            .not_null()
                            .default("Anonymous"),
                    )
                    .col(ColumnDef::new(BlogPosts::FeatureImage).string().null())
                    .col(ColumnDef::new(BlogPosts::VideoUrl).string().null())
                    .col(ColumnDef::new(BlogPosts::Sections).json_binary().not_null())
                    .col(
                        ColumnDef::new(BlogPosts::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::IsPublished)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Every listing sorts on created_at
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_created_at")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_category")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    Category,
    Author,
    FeatureImage,
    VideoUrl,
    Sections,
    Featured,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}
