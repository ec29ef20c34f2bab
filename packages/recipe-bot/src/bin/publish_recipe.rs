//! Generate, illustrate, and publish one recipe post.
//!
//! Upload and post failures are printed and the process still exits 0;
//! generation, image, and compose failures end the run with an error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_bot_core::domains::publishing::{run_pipeline, MediaUpload, PublishResult};
use recipe_bot_core::kernel::PipelineDeps;
use recipe_bot_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "publish-recipe")]
#[command(about = "Generate a recipe post with an AI image and publish it to WordPress")]
struct Cli {
    /// Where to write the captioned image (overrides RECIPE_BOT_OUTPUT_PATH)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Caption font file (overrides RECIPE_BOT_FONT)
    #[arg(long)]
    font: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recipe_bot_core=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    if let Some(font) = cli.font {
        config.preferred_font = font;
    }

    let deps = PipelineDeps::from_config(&config);

    let report = run_pipeline(&deps, &config)
        .await
        .context("Recipe publishing aborted")?;

    println!("🧠 Generated Title: {}", report.draft.title());
    println!("🖼️ Image saved to {}", report.image.path.display());

    match &report.media {
        MediaUpload::Uploaded(id) => println!("⬆️ Media uploaded: {}", id),
        MediaUpload::Failed(failure) => println!("❌ Media upload failed: {}", failure),
    }

    match &report.publish {
        PublishResult::Published { link: Some(link) } => println!("✅ Post published: {}", link),
        PublishResult::Published { link: None } => println!("✅ Post published"),
        PublishResult::Failed(failure) => println!("❌ Post failed: {}", failure),
    }

    Ok(())
}
