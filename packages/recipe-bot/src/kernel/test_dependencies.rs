// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into PipelineDeps for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use wordpress::{NewPost, WpResponse};

use super::{BaseAI, BaseCms, BaseHttpFetcher, BaseImageModel, PipelineDeps};
use crate::storage::{ImageStore, StorageError};

// =============================================================================
// Mock AI
// =============================================================================

pub struct MockAI {
    responses: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
    fail_with: Option<String>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: &str) -> Self {
        self.responses.lock().unwrap().push(response.to_string());
        self
    }

    /// Make every call fail with the given message
    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    /// Get all prompts that were sent
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.to_string());

        if let Some(message) = &self.fail_with {
            return Err(anyhow!("{}", message));
        }

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            Ok(responses.remove(0))
        } else {
            Ok("<h1>Mock Recipe</h1><p>Mock content.</p>".to_string())
        }
    }
}

// =============================================================================
// Mock Image Model
// =============================================================================

pub struct MockImageModel {
    url: String,
    prompts: Arc<Mutex<Vec<String>>>,
    fail_with: Option<String>,
}

impl MockImageModel {
    pub fn new() -> Self {
        Self {
            url: "https://images.example.org/generated.png".to_string(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    /// Get all prompts the model was asked to draw
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockImageModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseImageModel for MockImageModel {
    async fn generate_image(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.fail_with {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(self.url.clone()),
        }
    }
}

// =============================================================================
// Mock HTTP Fetcher
// =============================================================================

pub struct MockHttpFetcher {
    bytes: Option<Vec<u8>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockHttpFetcher {
    /// Serve the same bytes for every URL
    pub fn serving(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Some(bytes),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail every fetch, like a 404 from the image host
    pub fn not_found() -> Self {
        Self {
            bytes: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseHttpFetcher for MockHttpFetcher {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(url.to_string());

        self.bytes
            .clone()
            .ok_or_else(|| anyhow!("HTTP status client error (404 Not Found) for url ({})", url))
    }
}

// =============================================================================
// Mock CMS
// =============================================================================

/// Arguments captured from a media upload call
#[derive(Debug, Clone)]
pub struct UploadCallArgs {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub struct MockCms {
    upload_response: Option<WpResponse>,
    post_response: Option<WpResponse>,
    uploads: Arc<Mutex<Vec<UploadCallArgs>>>,
    posts: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl MockCms {
    /// Both endpoints answer 201 (media id 1, a fixed post link)
    pub fn new() -> Self {
        Self {
            upload_response: Some(WpResponse {
                status: 201,
                body: r#"{"id":1}"#.to_string(),
            }),
            post_response: Some(WpResponse {
                status: 201,
                body: r#"{"id":7,"link":"https://blog.example.org/?p=7"}"#.to_string(),
            }),
            uploads: Arc::new(Mutex::new(Vec::new())),
            posts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_upload_response(mut self, status: u16, body: &str) -> Self {
        self.upload_response = Some(WpResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn with_post_response(mut self, status: u16, body: &str) -> Self {
        self.post_response = Some(WpResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Simulate a connection failure on upload
    pub fn with_unreachable_media(mut self) -> Self {
        self.upload_response = None;
        self
    }

    /// Simulate a connection failure on post creation
    pub fn with_unreachable_posts(mut self) -> Self {
        self.post_response = None;
        self
    }

    pub fn uploads(&self) -> Vec<UploadCallArgs> {
        self.uploads.lock().unwrap().clone()
    }

    /// JSON bodies of every post creation call, as sent on the wire
    pub fn posts(&self) -> Vec<serde_json::Value> {
        self.posts.lock().unwrap().clone()
    }
}

impl Default for MockCms {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseCms for MockCms {
    async fn upload_media(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<WpResponse> {
        self.uploads.lock().unwrap().push(UploadCallArgs {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            bytes,
        });

        self.upload_response
            .clone()
            .ok_or_else(|| anyhow!("error sending request for url (media)"))
    }

    async fn create_post(&self, post: &NewPost) -> Result<WpResponse> {
        self.posts.lock().unwrap().push(serde_json::to_value(post)?);

        self.post_response
            .clone()
            .ok_or_else(|| anyhow!("error sending request for url (posts)"))
    }
}

// =============================================================================
// In-memory Image Store
// =============================================================================

pub struct MemoryImageStore {
    target: PathBuf,
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryImageStore {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            files: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Bytes currently stored at the target path
    pub fn stored(&self) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(&self.target).cloned()
    }
}

impl ImageStore for MemoryImageStore {
    fn target(&self) -> &Path {
        &self.target
    }

    fn save(&self, bytes: &[u8]) -> Result<PathBuf, StorageError> {
        self.files
            .lock()
            .unwrap()
            .insert(self.target.clone(), bytes.to_vec());
        Ok(self.target.clone())
    }

    fn load(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder that wires mocks into PipelineDeps while keeping handles for assertions
pub struct TestDependencies {
    pub ai: Arc<MockAI>,
    pub image_model: Arc<MockImageModel>,
    pub fetcher: Arc<MockHttpFetcher>,
    pub cms: Arc<MockCms>,
    pub store: Arc<MemoryImageStore>,
}

impl TestDependencies {
    /// Mocks that complete a full run; `image_bytes` is what the image host serves
    pub fn new(image_bytes: Vec<u8>) -> Self {
        Self {
            ai: Arc::new(MockAI::new()),
            image_model: Arc::new(MockImageModel::new()),
            fetcher: Arc::new(MockHttpFetcher::serving(image_bytes)),
            cms: Arc::new(MockCms::new()),
            store: Arc::new(MemoryImageStore::new("title_image.jpg")),
        }
    }

    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    pub fn mock_image_model(mut self, image_model: MockImageModel) -> Self {
        self.image_model = Arc::new(image_model);
        self
    }

    pub fn mock_fetcher(mut self, fetcher: MockHttpFetcher) -> Self {
        self.fetcher = Arc::new(fetcher);
        self
    }

    pub fn mock_cms(mut self, cms: MockCms) -> Self {
        self.cms = Arc::new(cms);
        self
    }

    pub fn deps(&self) -> PipelineDeps {
        PipelineDeps {
            ai: self.ai.clone(),
            image_model: self.image_model.clone(),
            fetcher: self.fetcher.clone(),
            cms: self.cms.clone(),
            store: self.store.clone(),
        }
    }
}
