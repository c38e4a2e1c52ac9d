pub mod database;
pub mod entity;
pub mod error;
pub mod gallery_service;

pub use database::create_connection;
pub use error::GalleryError;
pub use gallery_service::GalleryService;

// Re-export entities for convenience
pub use entity::theme_images;
