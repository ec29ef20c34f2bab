//! Publishing actions - one function per pipeline stage.
//!
//! Fatal stages return `Result<_, PipelineError>`; the upload and post stages
//! return outcome values and never fail.

pub mod compose_image;
pub mod extract_title;
pub mod generate_content;
pub mod generate_image;
pub mod publish_post;
pub mod upload_media;

pub use compose_image::{compose_title_image, CaptionFont, CaptionLayout};
pub use extract_title::extract_title;
pub use generate_content::{generate_recipe, RECIPE_PROMPT};
pub use generate_image::{generate_image, image_prompt};
pub use publish_post::publish_post;
pub use upload_media::upload_media;
