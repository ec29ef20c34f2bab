//! The publishing pipeline:
//!
//! `Start → Generated → Titled → Imaged → Composed → Uploaded? → Published → End`
//!
//! Stages run one after another on the caller's task. Generation, image and
//! compose failures abort via `?`; the upload stage degrades to "no media"
//! and the post stage only reports.

use tracing::{info, info_span, warn, Instrument};

use super::actions::{
    compose_title_image, generate_image, generate_recipe, publish_post, upload_media,
};
use super::models::{MediaUpload, PostDraft, RunReport};
use crate::config::Config;
use crate::error::{PipelineError, Stage};
use crate::kernel::PipelineDeps;

/// Run every stage once and return what each produced.
pub async fn run_pipeline(
    deps: &PipelineDeps,
    config: &Config,
) -> Result<RunReport, PipelineError> {
    let html = generate_recipe(deps.ai.as_ref())
        .instrument(info_span!("pipeline", stage = %Stage::Generated))
        .await?;

    let draft = PostDraft::from_html(html);
    info!(stage = %Stage::Titled, title = %draft.title(), "🧠 Generated Title");

    info!(stage = %Stage::Imaged, "🎨 Generating image...");
    let image = generate_image(
        draft.title(),
        deps.image_model.as_ref(),
        deps.fetcher.as_ref(),
    )
    .instrument(info_span!("pipeline", stage = %Stage::Imaged))
    .await?;

    info!(stage = %Stage::Composed, "🖼️ Creating Pinterest-style image...");
    let image = {
        let _span = info_span!("pipeline", stage = %Stage::Composed).entered();
        compose_title_image(
            &image,
            draft.title(),
            &config.preferred_font,
            deps.store.as_ref(),
        )?
    };

    info!(stage = %Stage::Uploaded, "⬆️ Uploading image to WordPress...");
    let media = upload_media(&image, deps.store.as_ref(), deps.cms.as_ref())
        .instrument(info_span!("pipeline", stage = %Stage::Uploaded))
        .await;
    if let MediaUpload::Failed(failure) = &media {
        warn!(error = %failure, "Continuing without featured media");
    }

    info!(stage = %Stage::Published, "📝 Publishing post...");
    let publish = publish_post(
        draft.title(),
        draft.html_body(),
        media.media_id(),
        deps.cms.as_ref(),
    )
    .instrument(info_span!("pipeline", stage = %Stage::Published))
    .await;

    Ok(RunReport {
        draft,
        image,
        media,
        publish,
    })
}
