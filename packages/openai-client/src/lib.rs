//! Pure OpenAI REST API client
//!
//! A clean, minimal client for the OpenAI API with no domain-specific logic.
//! Supports chat completions and image generations.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{ChatRequest, ImageRequest, Message, OpenAIClient};
//!
//! let client = OpenAIClient::from_env()?;
//!
//! // Chat completion
//! let response = client.chat_completion(
//!     ChatRequest::new("gpt-3.5-turbo").message(Message::user("Hello!")),
//! ).await?;
//!
//! // Image generation
//! let images = client
//!     .create_image(ImageRequest::new("dall-e-3", "A bowl of ramen"))
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{OpenAIError, Result};
pub use types::*;

use reqwest::{Client, RequestBuilder};
use tracing::{debug, warn};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Pure OpenAI API client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new OpenAI client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| OpenAIError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Send messages to the chat completion API and get a response.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .chat_request(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(OpenAIError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| OpenAIError::EmptyResponse("no choices in chat completion".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "OpenAI chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }

    /// Image generation.
    ///
    /// Returns the raw response; callers pick the URL(s) they need.
    pub async fn create_image(&self, request: ImageRequest) -> Result<ImageResponse> {
        let start = std::time::Instant::now();

        let response = self
            .image_request(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Image generation request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI image error");
            return Err(OpenAIError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let image_response: ImageResponse = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        debug!(
            model = %request.model,
            size = %request.size,
            images = image_response.data.len(),
            duration_ms = start.elapsed().as_millis(),
            "OpenAI image generation"
        );

        Ok(image_response)
    }

    fn chat_request(&self, request: &ChatRequest) -> RequestBuilder {
        self.authorized_post("chat/completions").json(request)
    }

    fn image_request(&self, request: &ImageRequest) -> RequestBuilder {
        self.authorized_post("images/generations").json(request)
    }

    fn authorized_post(&self, path: &str) -> RequestBuilder {
        self.http_client
            .post(format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.api_key)
    }
}
