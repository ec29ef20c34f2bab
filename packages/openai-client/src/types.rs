//! OpenAI API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Chat Completion
// =============================================================================

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "gpt-3.5-turbo", "gpt-4o")
    pub model: String,

    /// Conversation messages
    pub messages: Vec<Message>,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens in completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for ChatRequest {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            messages: Vec::new(),
            temperature: None,
            max_tokens: None,
        }
    }
}

impl ChatRequest {
    /// Create a new chat request with the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Add a message to the conversation.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set max tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role: "system", "user", "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion response.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Response content
    pub content: String,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

/// Raw chat response from API (for internal parsing).
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseRaw {
    pub choices: Vec<ChatChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatMessageResponse {
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,

    /// Tokens in the completion
    pub completion_tokens: u32,

    /// Total tokens used
    pub total_tokens: u32,
}

// =============================================================================
// Image Generation
// =============================================================================

/// Square output size supported by every image model.
pub const IMAGE_SIZE_1024: &str = "1024x1024";

/// Image generation request.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    /// Model to use (e.g., "dall-e-3")
    pub model: String,

    /// Text description of the desired image
    pub prompt: String,

    /// Number of images to generate
    pub n: u8,

    /// Output resolution, "WIDTHxHEIGHT"
    pub size: String,
}

impl ImageRequest {
    /// Create a request for a single 1024x1024 image.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            n: 1,
            size: IMAGE_SIZE_1024.to_string(),
        }
    }
}

/// Image generation response.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    /// Generated images, in request order
    pub data: Vec<ImageData>,
}

impl ImageResponse {
    /// URL of the first generated image, if the API returned one.
    pub fn first_url(&self) -> Option<&str> {
        self.data.iter().find_map(|d| d.url.as_deref())
    }
}

/// A single generated image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    /// Temporary download URL
    #[serde(default)]
    pub url: Option<String>,

    /// Prompt after the model's own rewriting (dall-e-3 only)
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let sys = Message::system("You are helpful");
        assert_eq!(sys.role, "system");

        let user = Message::user("Hello");
        assert_eq!(user.role, "user");
    }

    #[test]
    fn test_chat_request_builder() {
        let req = ChatRequest::new("gpt-3.5-turbo")
            .message(Message::user("Hello"))
            .temperature(0.7)
            .max_tokens(100);

        assert_eq!(req.model, "gpt-3.5-turbo");
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.temperature, Some(0.7));
        assert_eq!(req.max_tokens, Some(100));
    }

    #[test]
    fn test_chat_request_omits_unset_options() {
        let req = ChatRequest::new("gpt-3.5-turbo").message(Message::user("Hi"));
        let body = serde_json::to_value(&req).unwrap();

        assert_eq!(body["messages"][0]["role"], "user");
        assert!(body.get("temperature").is_none());
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn test_image_request_defaults_to_one_square_image() {
        let req = ImageRequest::new("dall-e-3", "a bowl of soup");
        let body = serde_json::to_value(&req).unwrap();

        assert_eq!(body["model"], "dall-e-3");
        assert_eq!(body["prompt"], "a bowl of soup");
        assert_eq!(body["n"], 1);
        assert_eq!(body["size"], "1024x1024");
    }

    #[test]
    fn test_image_response_first_url_skips_missing() {
        let raw = r#"{"data":[{"b64_json":"..."},{"url":"https://img.example/a.png"}]}"#;
        let response: ImageResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response.first_url(), Some("https://img.example/a.png"));
    }

    #[test]
    fn test_image_response_without_urls() {
        let response: ImageResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(response.first_url(), None);
    }
}
