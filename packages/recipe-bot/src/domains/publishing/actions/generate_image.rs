//! ImageGenerator - draw the dish, then download the result.

use tracing::{debug, info};

use crate::domains::publishing::models::GeneratedImage;
use crate::error::PipelineError;
use crate::kernel::{BaseHttpFetcher, BaseImageModel};

/// Edge length of the square image requested from the model.
pub const IMAGE_EDGE: u32 = 1024;

pub fn image_prompt(title: &str) -> String {
    format!(
        "Professional food photography of {}, plated, high quality, soft lighting",
        title
    )
}

/// Generate and download one image for `title`.
///
/// Generation failures map to `ImageGeneration`, fetch failures to `Download`;
/// both abort the run.
pub async fn generate_image(
    title: &str,
    model: &dyn BaseImageModel,
    fetcher: &dyn BaseHttpFetcher,
) -> Result<GeneratedImage, PipelineError> {
    let prompt = image_prompt(title);
    debug!(prompt = %prompt, "Requesting image");

    let url = model
        .generate_image(&prompt)
        .await
        .map_err(PipelineError::ImageGeneration)?;

    let bytes = fetcher
        .fetch_bytes(&url)
        .await
        .map_err(PipelineError::Download)?;

    info!(bytes = bytes.len(), "Image downloaded");

    Ok(GeneratedImage {
        bytes,
        width: IMAGE_EDGE,
        height: IMAGE_EDGE,
    })
}
