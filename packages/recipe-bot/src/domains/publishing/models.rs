use std::fmt;
use std::path::PathBuf;

use super::actions::extract_title;

/// Title used when the generated HTML has no usable `<h1>`.
pub const FALLBACK_TITLE: &str = "Delicious Recipe";

/// WordPress media library identifier.
pub type MediaId = u64;

/// Generated post body plus the title recovered from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    html_body: String,
    title: String,
}

impl PostDraft {
    /// Derive the title from the body. The title is never empty.
    pub fn from_html(html_body: String) -> Self {
        let title = extract_title(&html_body);
        Self { html_body, title }
    }

    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Downloaded image bytes, still in the encoding the image host served.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// The captioned image as written by an `ImageStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedImageFile {
    pub path: PathBuf,
}

impl ComposedImageFile {
    /// Name sent to WordPress in `Content-Disposition`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "title_image.jpg".to_string())
    }
}

/// A failure that was reported and absorbed instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftFailure {
    /// HTTP status, absent when the request never got a response
    pub status: Option<u16>,
    pub message: String,
}

impl SoftFailure {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: body.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for SoftFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {}: {}", status, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Outcome of the media upload stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUpload {
    Uploaded(MediaId),
    Failed(SoftFailure),
}

impl MediaUpload {
    /// The featured media reference; `None` is the "no media" sentinel.
    pub fn media_id(&self) -> Option<MediaId> {
        match self {
            MediaUpload::Uploaded(id) => Some(*id),
            MediaUpload::Failed(_) => None,
        }
    }
}

/// Outcome of the post creation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishResult {
    /// `link` is absent if WordPress answered 201 without one
    Published { link: Option<String> },
    Failed(SoftFailure),
}

impl PublishResult {
    pub fn is_published(&self) -> bool {
        matches!(self, PublishResult::Published { .. })
    }
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub draft: PostDraft,
    pub image: ComposedImageFile,
    pub media: MediaUpload,
    pub publish: PublishResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_title_comes_from_heading() {
        let draft = PostDraft::from_html("<h1> Lemon Tart </h1><p>Zesty.</p>".to_string());
        assert_eq!(draft.title(), "Lemon Tart");
        assert_eq!(draft.html_body(), "<h1> Lemon Tart </h1><p>Zesty.</p>");
    }

    #[test]
    fn draft_title_never_empty() {
        let draft = PostDraft::from_html(String::new());
        assert_eq!(draft.title(), FALLBACK_TITLE);
    }

    #[test]
    fn failed_upload_is_no_media() {
        let upload = MediaUpload::Failed(SoftFailure::status(500, "oops"));
        assert_eq!(upload.media_id(), None);
        assert_eq!(MediaUpload::Uploaded(42).media_id(), Some(42));
    }

    #[test]
    fn file_name_from_path() {
        let file = ComposedImageFile {
            path: PathBuf::from("/tmp/out/title_image.jpg"),
        };
        assert_eq!(file.file_name(), "title_image.jpg");
    }

    #[test]
    fn soft_failure_display() {
        assert_eq!(
            SoftFailure::status(401, "bad auth").to_string(),
            "HTTP 401: bad auth"
        );
        assert_eq!(SoftFailure::transport("refused").to_string(), "refused");
    }
}
