use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ThemeImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ThemeImages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ThemeImages::ImageUrl)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ThemeImages::WebsiteType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ThemeImages::DesignTone)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ThemeImages::Status)
                            .string_len(20)
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(ThemeImages::UploadDate)
                            .timestamp_with_time_zone()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The browsing view always filters on status; the vendor view always
        // sorts on upload_date.
        manager
            .create_index(
                Index::create()
                    .name("idx_theme_images_status")
                    .table(ThemeImages::Table)
                    .col(ThemeImages::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_theme_images_upload_date")
                    .table(ThemeImages::Table)
                    .col(ThemeImages::UploadDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ThemeImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ThemeImages {
    Table,
    Id,
    ImageUrl,
    WebsiteType,
    DesignTone,
    Status,
    UploadDate,
}
