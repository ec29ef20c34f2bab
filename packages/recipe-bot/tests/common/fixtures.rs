//! Shared inputs for workflow tests.

use std::io::Cursor;
use std::path::PathBuf;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use recipe_bot_core::Config;

/// A small solid-color PNG, standing in for the image host's response.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let canvas = RgbImage::from_pixel(width, height, Rgb([230, 180, 60]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(canvas)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode test png");
    bytes
}

/// Config that never touches real services or system fonts.
pub fn test_config() -> Config {
    Config {
        openai_api_key: "sk-test".to_string(),
        openai_base_url: "http://localhost:0/v1".to_string(),
        text_model: "gpt-3.5-turbo".to_string(),
        image_model: "dall-e-3".to_string(),
        wp_username: "editor".to_string(),
        wp_app_password: "abcd efgh ijkl".to_string(),
        wp_site: "https://blog.example.org".to_string(),
        output_path: PathBuf::from("title_image.jpg"),
        preferred_font: PathBuf::from("/nonexistent/fonts/DejaVuSans-Bold.ttf"),
    }
}
