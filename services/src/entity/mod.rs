pub mod theme_images;
