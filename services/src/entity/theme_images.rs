use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row of the theme_images table. Classification tags and status are stored
/// as their canonical strings; conversion to the typed enums happens at the
/// service boundary.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "theme_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub image_url: String,
    pub website_type: String,
    pub design_tone: String,
    pub status: String,
    pub upload_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
