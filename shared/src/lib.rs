pub mod models;

pub use models::{
    ApprovedFilter, DesignTone, ImageStatus, NewThemeImage, ThemeImage, ThemeImageUpdate,
    WebsiteType,
};
