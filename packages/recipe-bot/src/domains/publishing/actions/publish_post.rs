//! PostPublisher - create the published post. Terminal stage.

use tracing::{info, warn};
use wordpress::{CreatedPost, NewPost, PostStatus};

use crate::domains::publishing::models::{MediaId, PublishResult, SoftFailure};
use crate::kernel::BaseCms;

/// Create a published post. Never fails the run; a `None` media id is sent
/// as `featured_media: null`.
pub async fn publish_post(
    title: &str,
    content_html: &str,
    media_id: Option<MediaId>,
    cms: &dyn BaseCms,
) -> PublishResult {
    let post = NewPost {
        title: title.to_string(),
        content: content_html.to_string(),
        status: PostStatus::Publish,
        featured_media: media_id,
    };

    let response = match cms.create_post(&post).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "❌ Post failed");
            return PublishResult::Failed(SoftFailure::transport(e.to_string()));
        }
    };

    if !response.is_created() {
        warn!(status = response.status, body = %response.body, "❌ Post failed");
        return PublishResult::Failed(SoftFailure::status(response.status, response.body));
    }

    let link = match response.json::<CreatedPost>() {
        Ok(created) if !created.link.is_empty() => Some(created.link),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "Post created but response could not be read");
            None
        }
    };

    info!(link = ?link, featured_media = ?media_id, "✅ Post published");
    PublishResult::Published { link }
}
