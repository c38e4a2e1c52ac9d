use crate::entity::theme_images;
use crate::error::GalleryError;
use chrono::Utc;
use gallery_shared::{ApprovedFilter, ImageStatus, NewThemeImage, ThemeImage, ThemeImageUpdate};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

/// The query surface over the theme_images collection. Every operation is a
/// single-document store call; the connection is owned here and handed to the
/// HTTP layer as part of its application state.
pub struct GalleryService {
    db: DatabaseConnection,
}

impl GalleryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Approved records matching the provided filters. Absent (or empty)
    /// filter keys are unconstrained. No sort order is guaranteed.
    pub async fn list_approved(
        &self,
        filter: &ApprovedFilter,
    ) -> Result<Vec<ThemeImage>, GalleryError> {
        let mut query = theme_images::Entity::find()
            .filter(theme_images::Column::Status.eq(ImageStatus::Approved.as_str()));

        if let Some(website_type) = filter.website_type {
            query = query.filter(theme_images::Column::WebsiteType.eq(website_type.as_str()));
        }
        if let Some(design_tone) = filter.design_tone {
            query = query.filter(theme_images::Column::DesignTone.eq(design_tone.as_str()));
        }

        let rows = query.all(&self.db).await?;
        rows.into_iter().map(Self::from_row).collect()
    }

    /// Every record regardless of status, newest upload first.
    pub async fn list_all(&self) -> Result<Vec<ThemeImage>, GalleryError> {
        let rows = theme_images::Entity::find()
            .order_by_desc(theme_images::Column::UploadDate)
            .all(&self.db)
            .await?;

        rows.into_iter().map(Self::from_row).collect()
    }

    /// Persist a new record. Status is always Pending and the upload date is
    /// always now, regardless of what the caller sent.
    pub async fn create(&self, input: NewThemeImage) -> Result<ThemeImage, GalleryError> {
        let model = theme_images::ActiveModel {
            image_url: Set(input.image_url),
            website_type: Set(input.website_type.as_str().to_string()),
            design_tone: Set(input.design_tone.as_str().to_string()),
            status: Set(ImageStatus::Pending.as_str().to_string()),
            upload_date: Set(Utc::now().into()),
            ..Default::default()
        };

        let saved = model.insert(&self.db).await?;
        Self::from_row(saved)
    }

    /// Overwrite the provided fields on an existing record and reset its
    /// upload date to now.
    pub async fn update(
        &self,
        id: i64,
        input: ThemeImageUpdate,
    ) -> Result<ThemeImage, GalleryError> {
        let existing = theme_images::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(GalleryError::NotFound(id))?;

        let mut model: theme_images::ActiveModel = existing.into();
        if let Some(image_url) = input.image_url {
            model.image_url = Set(image_url);
        }
        if let Some(website_type) = input.website_type {
            model.website_type = Set(website_type.as_str().to_string());
        }
        if let Some(design_tone) = input.design_tone {
            model.design_tone = Set(design_tone.as_str().to_string());
        }
        if let Some(status) = input.status {
            model.status = Set(status.as_str().to_string());
        }
        model.upload_date = Set(Utc::now().into());

        let saved = model.update(&self.db).await?;
        Self::from_row(saved)
    }

    /// Remove a record. Hard delete, no soft-delete or audit trail.
    pub async fn delete(&self, id: i64) -> Result<(), GalleryError> {
        let result = theme_images::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(GalleryError::NotFound(id));
        }
        Ok(())
    }

    fn from_row(row: theme_images::Model) -> Result<ThemeImage, GalleryError> {
        let website_type = row.website_type.parse().map_err(DbErr::Custom)?;
        let design_tone = row.design_tone.parse().map_err(DbErr::Custom)?;
        let status = row.status.parse().map_err(DbErr::Custom)?;

        Ok(ThemeImage {
            id: row.id,
            image_url: row.image_url,
            website_type,
            design_tone,
            status,
            upload_date: row.upload_date.with_timezone(&Utc),
        })
    }
}
