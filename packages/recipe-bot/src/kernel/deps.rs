use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, ImageRequest, Message, OpenAIClient};
use tracing::debug;
use wordpress::{NewPost, WordPressOptions, WordPressService, WpResponse};

use super::{BaseAI, BaseCms, BaseHttpFetcher, BaseImageModel};
use crate::config::Config;
use crate::storage::{ImageStore, LocalImageStore};

// =============================================================================
// OpenAI Adapter
// =============================================================================

/// Wrapper around OpenAIClient that implements the AI and image model traits
pub struct OpenAIAdapter {
    client: OpenAIClient,
    text_model: String,
    image_model: String,
}

impl OpenAIAdapter {
    pub fn new(client: OpenAIClient, text_model: String, image_model: String) -> Self {
        Self {
            client,
            text_model,
            image_model,
        }
    }
}

#[async_trait]
impl BaseAI for OpenAIAdapter {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .chat_completion(ChatRequest::new(&self.text_model).message(Message::user(prompt)))
            .await?;

        if let Some(usage) = &response.usage {
            debug!(
                model = %self.text_model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Text generation usage"
            );
        }

        Ok(response.content)
    }
}

#[async_trait]
impl BaseImageModel for OpenAIAdapter {
    async fn generate_image(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .create_image(ImageRequest::new(&self.image_model, prompt))
            .await?;

        if let Some(revised) = response.data.first().and_then(|d| d.revised_prompt.as_deref()) {
            debug!(revised_prompt = %revised, "Image model revised the prompt");
        }

        response
            .first_url()
            .map(str::to_string)
            .context("Image response contained no URL")
    }
}

// =============================================================================
// HTTP Fetcher
// =============================================================================

pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseHttpFetcher for ReqwestFetcher {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Image download request failed")?
            .error_for_status()?;

        let bytes = response.bytes().await.context("Failed to read image body")?;
        Ok(bytes.to_vec())
    }
}

// =============================================================================
// WordPress Adapter
// =============================================================================

/// Wrapper around WordPressService that implements BaseCms trait
pub struct WordPressAdapter(pub Arc<WordPressService>);

impl WordPressAdapter {
    pub fn new(service: Arc<WordPressService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseCms for WordPressAdapter {
    async fn upload_media(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<WpResponse> {
        self.0
            .upload_media(filename, content_type, bytes)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }

    async fn create_post(&self, post: &NewPost) -> Result<WpResponse> {
        self.0
            .create_post(post)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// PipelineDeps
// =============================================================================

/// Everything a run talks to (using traits for testability)
#[derive(Clone)]
pub struct PipelineDeps {
    pub ai: Arc<dyn BaseAI>,
    pub image_model: Arc<dyn BaseImageModel>,
    pub fetcher: Arc<dyn BaseHttpFetcher>,
    pub cms: Arc<dyn BaseCms>,
    pub store: Arc<dyn ImageStore>,
}

impl PipelineDeps {
    /// Wire the real services from configuration.
    pub fn from_config(config: &Config) -> Self {
        let openai = OpenAIClient::new(config.openai_api_key.clone())
            .with_base_url(config.openai_base_url.clone());
        let openai = Arc::new(OpenAIAdapter::new(
            openai,
            config.text_model.clone(),
            config.image_model.clone(),
        ));

        let wordpress = WordPressService::new(WordPressOptions {
            site: config.wp_site.clone(),
            username: config.wp_username.clone(),
            app_password: config.wp_app_password.clone(),
        });

        Self {
            ai: openai.clone(),
            image_model: openai,
            fetcher: Arc::new(ReqwestFetcher::new()),
            cms: Arc::new(WordPressAdapter::new(Arc::new(wordpress))),
            store: Arc::new(LocalImageStore::new(config.output_path.clone())),
        }
    }
}
