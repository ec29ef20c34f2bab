use std::fmt;

use thiserror::Error;

use crate::storage::StorageError;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Generated,
    Titled,
    Imaged,
    Composed,
    Uploaded,
    Published,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Generated => "generated",
            Stage::Titled => "titled",
            Stage::Imaged => "imaged",
            Stage::Composed => "composed",
            Stage::Uploaded => "uploaded",
            Stage::Published => "published",
        };
        f.write_str(name)
    }
}

/// Errors that abort a run. Upload and post failures are never represented
/// here; see `MediaUpload` and `PublishResult`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Text generation failed: {0}")]
    Generation(#[source] anyhow::Error),

    #[error("Image generation failed: {0}")]
    ImageGeneration(#[source] anyhow::Error),

    #[error("Image download failed: {0}")]
    Download(#[source] anyhow::Error),

    #[error("Failed to compose caption image: {0}")]
    Compose(#[from] image::ImageError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PipelineError {
    /// The stage that was being entered when the run aborted.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Generation(_) => Stage::Generated,
            PipelineError::ImageGeneration(_) | PipelineError::Download(_) => Stage::Imaged,
            PipelineError::Compose(_) | PipelineError::Storage(_) => Stage::Composed,
        }
    }
}
