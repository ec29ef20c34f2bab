// https://developer.wordpress.org/rest-api/reference/media/#create-a-media-item
// https://developer.wordpress.org/rest-api/reference/posts/#create-a-post

pub mod models;
use reqwest::{header, Client, RequestBuilder};
use thiserror::Error;

pub use crate::models::{CreatedMedia, CreatedPost, NewPost, PostStatus, WpResponse};

#[derive(Debug, Error)]
pub enum WordPressError {
    #[error("Request to WordPress failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    Header(#[from] header::InvalidHeaderValue),
}

#[derive(Debug, Clone)]
pub struct WordPressOptions {
    /// Site root, e.g. `https://blog.example.com`
    pub site: String,
    pub username: String,
    /// Application password generated under Users → Profile
    pub app_password: String,
}

#[derive(Debug, Clone)]
pub struct WordPressService {
    options: WordPressOptions,
    client: Client,
}

impl WordPressService {
    pub fn new(options: WordPressOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    pub fn media_url(&self) -> String {
        format!("{}/wp-json/wp/v2/media", self.site_root())
    }

    pub fn posts_url(&self) -> String {
        format!("{}/wp-json/wp/v2/posts", self.site_root())
    }

    fn site_root(&self) -> &str {
        self.options.site.trim_end_matches('/')
    }

    /// Upload raw file bytes to the media library.
    ///
    /// Any HTTP status is returned as a response; only transport failures are errors.
    pub async fn upload_media(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<WpResponse, WordPressError> {
        let response = self
            .upload_media_request(filename, content_type, bytes)?
            .send()
            .await?;

        WpResponse::read(response).await
    }

    /// Create a post. Any HTTP status is returned as a response.
    pub async fn create_post(&self, post: &NewPost) -> Result<WpResponse, WordPressError> {
        let response = self.create_post_request(post).send().await?;

        WpResponse::read(response).await
    }

    fn upload_media_request(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<RequestBuilder, WordPressError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_DISPOSITION,
            content_disposition(filename).parse()?,
        );
        headers.insert(header::CONTENT_TYPE, content_type.parse()?);

        Ok(self
            .client
            .post(self.media_url())
            .basic_auth(&self.options.username, Some(&self.options.app_password))
            .headers(headers)
            .body(bytes))
    }

    fn create_post_request(&self, post: &NewPost) -> RequestBuilder {
        self.client
            .post(self.posts_url())
            .basic_auth(&self.options.username, Some(&self.options.app_password))
            .json(post)
    }
}

/// `Content-Disposition` value WordPress uses to name the uploaded file.
pub fn content_disposition(filename: &str) -> String {
    format!("attachment; filename={}", filename)
}
