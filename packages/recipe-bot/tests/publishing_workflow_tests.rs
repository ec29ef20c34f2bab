//! End-to-end runs of the publishing pipeline against mocked services.

mod common;

use std::sync::Arc;

use common::{png_bytes, test_config};
use recipe_bot_core::domains::publishing::actions::image_prompt;
use recipe_bot_core::domains::publishing::{
    run_pipeline, MediaUpload, PublishResult, FALLBACK_TITLE,
};
use recipe_bot_core::kernel::test_dependencies::{
    MockAI, MockCms, MockHttpFetcher, MockImageModel,
};
use recipe_bot_core::kernel::{PipelineDeps, TestDependencies};
use recipe_bot_core::storage::LocalImageStore;
use recipe_bot_core::{PipelineError, Stage};

const SALSA_HTML: &str = "<h1>Spicy Mango Salsa</h1><p>...</p>";

#[tokio::test]
async fn full_run_publishes_post_with_media() {
    let test_deps = TestDependencies::new(png_bytes(256, 256))
        .mock_ai(MockAI::new().with_response(SALSA_HTML))
        .mock_cms(
            MockCms::new()
                .with_upload_response(201, r#"{"id":42}"#)
                .with_post_response(201, r#"{"id":100,"link":"https://blog.example.org/salsa/"}"#),
        );

    let report = run_pipeline(&test_deps.deps(), &test_config())
        .await
        .unwrap();

    assert_eq!(report.draft.title(), "Spicy Mango Salsa");

    let prompts = test_deps.image_model.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Spicy Mango Salsa"));
    assert_eq!(prompts[0], image_prompt("Spicy Mango Salsa"));

    let stored = test_deps.store.stored().expect("composed image stored");
    assert!(!stored.is_empty());

    let uploads = test_deps.cms.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].filename, "title_image.jpg");
    assert_eq!(uploads[0].bytes, stored);
    assert_eq!(report.media, MediaUpload::Uploaded(42));

    let posts = test_deps.cms.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Spicy Mango Salsa");
    assert_eq!(posts[0]["content"], SALSA_HTML);
    assert_eq!(posts[0]["status"], "publish");
    assert_eq!(posts[0]["featured_media"], 42);

    assert_eq!(
        report.publish,
        PublishResult::Published {
            link: Some("https://blog.example.org/salsa/".to_string())
        }
    );
}

#[tokio::test]
async fn missing_heading_uses_fallback_title_downstream() {
    let html = "<p>A recipe with no heading at all.</p>";
    let test_deps = TestDependencies::new(png_bytes(64, 64))
        .mock_ai(MockAI::new().with_response(html));

    let report = run_pipeline(&test_deps.deps(), &test_config())
        .await
        .unwrap();

    assert_eq!(report.draft.title(), FALLBACK_TITLE);
    assert!(test_deps.image_model.prompts()[0].contains(FALLBACK_TITLE));

    let posts = test_deps.cms.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], FALLBACK_TITLE);
    assert_eq!(posts[0]["content"], html);
}

#[tokio::test]
async fn multi_line_heading_reaches_cms_on_one_line() {
    let html = "<h1>\n  Mango\n  Lassi\n</h1><p>Cool and sweet.</p>";
    let test_deps = TestDependencies::new(png_bytes(64, 64))
        .mock_ai(MockAI::new().with_response(html));

    let report = run_pipeline(&test_deps.deps(), &test_config())
        .await
        .unwrap();

    assert_eq!(report.draft.title(), "Mango Lassi");
    assert_eq!(test_deps.image_model.prompts()[0], image_prompt("Mango Lassi"));
    assert_eq!(test_deps.cms.posts()[0]["title"], "Mango Lassi");
    assert_eq!(test_deps.cms.posts()[0]["content"], html);
}

#[tokio::test]
async fn failed_upload_still_publishes_without_media() {
    let test_deps = TestDependencies::new(png_bytes(64, 64))
        .mock_ai(MockAI::new().with_response(SALSA_HTML))
        .mock_cms(MockCms::new().with_upload_response(500, "Internal Server Error"));

    let report = run_pipeline(&test_deps.deps(), &test_config())
        .await
        .unwrap();

    assert_eq!(report.media.media_id(), None);

    let posts = test_deps.cms.posts();
    assert_eq!(posts.len(), 1, "post creation still attempted");
    assert!(posts[0]["featured_media"].is_null());
    assert!(report.publish.is_published());
}

#[tokio::test]
async fn failed_post_is_reported_in_report() {
    let test_deps = TestDependencies::new(png_bytes(64, 64))
        .mock_cms(MockCms::new().with_post_response(401, r#"{"code":"rest_cannot_create"}"#));

    let report = run_pipeline(&test_deps.deps(), &test_config())
        .await
        .unwrap();

    assert!(matches!(report.publish, PublishResult::Failed(_)));
}

#[tokio::test]
async fn text_generation_failure_aborts_before_any_other_call() {
    let test_deps = TestDependencies::new(png_bytes(64, 64))
        .mock_ai(MockAI::new().failing("invalid api key"));

    let err = run_pipeline(&test_deps.deps(), &test_config())
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Generation(_)));
    assert_eq!(err.stage(), Stage::Generated);
    assert!(test_deps.image_model.prompts().is_empty());
    assert!(test_deps.cms.uploads().is_empty());
    assert!(test_deps.cms.posts().is_empty());
}

#[tokio::test]
async fn image_generation_failure_aborts_before_cms() {
    let test_deps = TestDependencies::new(png_bytes(64, 64))
        .mock_image_model(MockImageModel::new().failing("content policy violation"));

    let err = run_pipeline(&test_deps.deps(), &test_config())
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::ImageGeneration(_)));
    assert!(test_deps.store.stored().is_none());
    assert!(test_deps.cms.posts().is_empty());
}

#[tokio::test]
async fn download_failure_aborts_before_cms() {
    let test_deps = TestDependencies::new(Vec::new()).mock_fetcher(MockHttpFetcher::not_found());

    let err = run_pipeline(&test_deps.deps(), &test_config())
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Download(_)));
    assert_eq!(err.stage(), Stage::Imaged);
    assert!(test_deps.cms.uploads().is_empty());
}

#[tokio::test]
async fn undecodable_download_aborts_at_compose() {
    let test_deps = TestDependencies::new(b"<html>403 Forbidden</html>".to_vec());

    let err = run_pipeline(&test_deps.deps(), &test_config())
        .await
        .unwrap_err();

    assert_eq!(err.stage(), Stage::Composed);
    assert!(test_deps.cms.uploads().is_empty());
}

#[tokio::test]
async fn composed_file_lands_on_disk_with_local_store() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("title_image.jpg");
    let test_deps = TestDependencies::new(png_bytes(128, 128))
        .mock_ai(MockAI::new().with_response(SALSA_HTML));

    let deps = PipelineDeps {
        store: Arc::new(LocalImageStore::new(output.clone())),
        ..test_deps.deps()
    };

    let report = run_pipeline(&deps, &test_config()).await.unwrap();

    assert_eq!(report.image.path, output);
    assert!(std::fs::metadata(&output).unwrap().len() > 0);
    assert_eq!(
        test_deps.cms.uploads()[0].bytes,
        std::fs::read(&output).unwrap()
    );
}
