use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::WordPressError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Publish,
}

/// Body of `POST /wp/v2/posts`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    /// Serialized as `null` when absent; WordPress leaves the post without a featured image.
    pub featured_media: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedMedia {
    pub id: u64,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPost {
    #[serde(default)]
    pub link: String,
}

/// Status and body of a WordPress response, left for the caller to judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WpResponse {
    pub status: u16,
    pub body: String,
}

impl WpResponse {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, WordPressError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Self { status, body })
    }

    /// WordPress answers a successful create with 201.
    pub fn is_created(&self) -> bool {
        self.status == StatusCode::CREATED.as_u16()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
