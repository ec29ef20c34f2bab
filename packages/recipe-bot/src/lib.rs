//! Generates a recipe post with a language model, illustrates it, captions
//! the image, and publishes both to WordPress.

pub mod config;
pub mod domains;
pub mod error;
pub mod kernel;
pub mod storage;

pub use config::Config;
pub use error::{PipelineError, Stage};
