//! `[site]` section configuration.
//!
//! Basic site metadata used for page titles and absolute URL generation.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Site title, used in page `<title>` tags.
    #[config(inline_doc = "Site title.")]
    pub title: String,

    /// Site description, used on the landing page.
    #[config(inline_doc = "Site description.")]
    pub description: String,

    /// Public site URL, required for absolute links in the sitemap
    /// (e.g., "https://example.com").
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-Hans").
    #[config(default = "en", inline_doc = "Language code.")]
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `sitemap_enabled`, `url` must be set
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    pub fn validate(&self, sitemap_enabled: bool, diag: &mut crate::config::ConfigDiagnostics) {
        if sitemap_enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!(
                    "{} is enabled but {} is not configured",
                    super::SitemapConfig::FIELDS.enable,
                    Self::FIELDS.url
                ),
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}
