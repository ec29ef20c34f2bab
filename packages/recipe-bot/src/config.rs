use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_TEXT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_OUTPUT_PATH: &str = "title_image.jpg";
pub const DEFAULT_PREFERRED_FONT: &str = "DejaVuSans-Bold.ttf";

/// Run configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub wp_username: String,
    pub wp_app_password: String,
    pub wp_site: String,
    /// Where the captioned image is written; overwritten every run
    pub output_path: PathBuf,
    /// Caption font tried before the bundled one
    pub preferred_font: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Credentials are not validated here: an empty key or site surfaces as
    /// the first failing network call.
    pub fn from_env() -> Self {
        // Load .env file if present (development)
        let _ = dotenv();

        let config = Self::from_lookup(|name| env::var(name).ok());

        for missing in config.missing_credentials() {
            warn!(variable = missing, "Credential not set");
        }

        config
    }

    /// Build a config from any variable source, applying defaults for unset names.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let or_default =
            |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

        Self {
            openai_api_key: get("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: or_default("OPENAI_BASE_URL", openai_client::DEFAULT_BASE_URL),
            text_model: or_default("RECIPE_BOT_TEXT_MODEL", DEFAULT_TEXT_MODEL),
            image_model: or_default("RECIPE_BOT_IMAGE_MODEL", DEFAULT_IMAGE_MODEL),
            wp_username: get("WP_USERNAME").unwrap_or_default(),
            wp_app_password: get("WP_APP_PASSWORD").unwrap_or_default(),
            wp_site: get("WP_SITE").unwrap_or_default(),
            output_path: PathBuf::from(or_default("RECIPE_BOT_OUTPUT_PATH", DEFAULT_OUTPUT_PATH)),
            preferred_font: PathBuf::from(or_default("RECIPE_BOT_FONT", DEFAULT_PREFERRED_FONT)),
        }
    }

    /// Names of credential variables that are empty.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("OPENAI_API_KEY", &self.openai_api_key),
            ("WP_USERNAME", &self.wp_username),
            ("WP_APP_PASSWORD", &self.wp_app_password),
            ("WP_SITE", &self.wp_site),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
