use sea_orm::DbErr;
use thiserror::Error;

/// Error taxonomy of the gallery API: missing records and invalid input are
/// distinct from unexpected store failures so handlers can map them to
/// different status codes.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Image not found: {0}")]
    NotFound(i64),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}
