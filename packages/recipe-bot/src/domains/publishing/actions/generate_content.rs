//! ContentGenerator - ask the language model for a full recipe post.

use tracing::info;

use crate::error::PipelineError;
use crate::kernel::BaseAI;

/// Fixed instruction; the numbered sections and the HTML requirement keep the
/// output compatible with title extraction and the WordPress editor.
pub const RECIPE_PROMPT: &str = "Generate a detailed recipe blog post for a unique but delicious dish. \
Include the following sections:\n\n\
1. <h1>Title</h1>\n\
2. Introduction\n\
3. Ingredients\n\
4. Instructions\n\
5. Tips & Variations\n\
6. Storage Instructions\n\
7. FAQs\n\n\
Format it as clean HTML for WordPress.";

/// Generate the post body. Any failure is fatal for the run.
pub async fn generate_recipe(ai: &dyn BaseAI) -> Result<String, PipelineError> {
    let html = ai
        .complete(RECIPE_PROMPT)
        .await
        .map_err(PipelineError::Generation)?;

    info!(chars = html.len(), "Recipe post generated");
    Ok(html)
}
