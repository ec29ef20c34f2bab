//! MediaPublisher - push the composed image into the WordPress media library.

use tracing::{info, warn};
use wordpress::CreatedMedia;

use crate::domains::publishing::models::{ComposedImageFile, MediaUpload, SoftFailure};
use crate::kernel::BaseCms;
use crate::storage::ImageStore;

/// Upload `file`. Never fails the run: anything but a 201 carrying an `id`
/// is reported and becomes `MediaUpload::Failed`.
pub async fn upload_media(
    file: &ComposedImageFile,
    store: &dyn ImageStore,
    cms: &dyn BaseCms,
) -> MediaUpload {
    let bytes = match store.load(&file.path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "❌ Media upload failed");
            return MediaUpload::Failed(SoftFailure::transport(e.to_string()));
        }
    };

    let filename = file.file_name();
    let content_type = mime_guess::from_path(&file.path).first_or_octet_stream();

    let response = match cms
        .upload_media(&filename, content_type.essence_str(), bytes)
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "❌ Media upload failed");
            return MediaUpload::Failed(SoftFailure::transport(e.to_string()));
        }
    };

    if !response.is_created() {
        warn!(status = response.status, body = %response.body, "❌ Media upload failed");
        return MediaUpload::Failed(SoftFailure::status(response.status, response.body));
    }

    match response.json::<CreatedMedia>() {
        Ok(media) => {
            info!(
                media_id = media.id,
                filename = %filename,
                source_url = media.source_url.as_deref().unwrap_or_default(),
                "Media uploaded"
            );
            MediaUpload::Uploaded(media.id)
        }
        Err(e) => {
            warn!(error = %e, body = %response.body, "❌ Media upload response had no id");
            MediaUpload::Failed(SoftFailure::status(
                response.status,
                format!("unreadable media response: {}", e),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{MemoryImageStore, MockCms};

    fn stored_file(store: &MemoryImageStore) -> ComposedImageFile {
        let path = store.save(b"jpeg bytes").unwrap();
        ComposedImageFile { path }
    }

    #[tokio::test]
    async fn created_response_yields_media_id() {
        let store = MemoryImageStore::new("out/title_image.jpg");
        let cms = MockCms::new().with_upload_response(201, r#"{"id":42,"source_url":"x"}"#);

        let upload = upload_media(&stored_file(&store), &store, &cms).await;

        assert_eq!(upload, MediaUpload::Uploaded(42));
        let calls = cms.uploads();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].filename, "title_image.jpg");
        assert_eq!(calls[0].content_type, "image/jpeg");
        assert_eq!(calls[0].bytes, b"jpeg bytes");
    }

    #[tokio::test]
    async fn server_error_is_no_media() {
        let store = MemoryImageStore::new("title_image.jpg");
        let cms = MockCms::new().with_upload_response(500, "Internal Server Error");

        let upload = upload_media(&stored_file(&store), &store, &cms).await;

        assert_eq!(upload.media_id(), None);
        assert_eq!(
            upload,
            MediaUpload::Failed(SoftFailure::status(500, "Internal Server Error"))
        );
    }

    #[tokio::test]
    async fn ok_but_not_created_is_no_media() {
        let store = MemoryImageStore::new("title_image.jpg");
        let cms = MockCms::new().with_upload_response(200, r#"{"id":5}"#);

        let upload = upload_media(&stored_file(&store), &store, &cms).await;

        assert_eq!(upload.media_id(), None);
    }

    #[tokio::test]
    async fn created_without_id_is_no_media() {
        let store = MemoryImageStore::new("title_image.jpg");
        let cms = MockCms::new().with_upload_response(201, "<html>cached page</html>");

        let upload = upload_media(&stored_file(&store), &store, &cms).await;

        assert_eq!(upload.media_id(), None);
    }

    #[tokio::test]
    async fn transport_error_is_no_media() {
        let store = MemoryImageStore::new("title_image.jpg");
        let cms = MockCms::new().with_unreachable_media();

        let upload = upload_media(&stored_file(&store), &store, &cms).await;

        assert!(matches!(
            upload,
            MediaUpload::Failed(SoftFailure { status: None, .. })
        ));
    }

    #[tokio::test]
    async fn missing_file_is_no_media_and_skips_request() {
        let store = MemoryImageStore::new("title_image.jpg");
        let cms = MockCms::new();
        let file = ComposedImageFile {
            path: "title_image.jpg".into(),
        };

        let upload = upload_media(&file, &store, &cms).await;

        assert_eq!(upload.media_id(), None);
        assert!(cms.uploads().is_empty());
    }
}
