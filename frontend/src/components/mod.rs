pub mod image_card;

pub use image_card::ImageCard;
