// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no pipeline logic.
// Stage behavior (status checks, fallbacks) lives in domains::publishing::actions.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseCms)

use anyhow::Result;
use async_trait::async_trait;
use wordpress::{NewPost, WpResponse};

// =============================================================================
// AI Trait (Infrastructure - text generation)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a single user prompt (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;
}

// =============================================================================
// Image Model Trait (Infrastructure - image generation)
// =============================================================================

#[async_trait]
pub trait BaseImageModel: Send + Sync {
    /// Generate one 1024x1024 image and return the URL it can be downloaded from
    async fn generate_image(&self, prompt: &str) -> Result<String>;
}

// =============================================================================
// HTTP Fetcher Trait (Infrastructure - plain GET)
// =============================================================================

#[async_trait]
pub trait BaseHttpFetcher: Send + Sync {
    /// GET a URL and return the body bytes (non-2xx is an error)
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

// =============================================================================
// CMS Trait (Infrastructure - WordPress REST)
// =============================================================================

#[async_trait]
pub trait BaseCms: Send + Sync {
    /// Upload a file to the media library. Any HTTP status is Ok; Err means transport failure.
    async fn upload_media(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<WpResponse>;

    /// Create a post. Any HTTP status is Ok; Err means transport failure.
    async fn create_post(&self, post: &NewPost) -> Result<WpResponse>;
}
