//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"       # Source directory for index.md units
//! output = "dist"           # Output directory for generated HTML
//!
//! [build.sitemap]
//! enable = true             # Generate sitemap.xml (requires [site] url)
//! filename = "sitemap.xml"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildSectionConfig {
    /// Content source directory.
    #[config(default = "content", inline_doc = "Content source directory.")]
    pub content: PathBuf,

    /// Build output directory.
    #[config(default = "dist", inline_doc = "Build output directory.")]
    pub output: PathBuf,

    /// Sitemap generation settings.
    #[config(sub)]
    pub sitemap: SitemapConfig,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    #[config(skip)]
    pub clean: bool,

    /// Skip draft pages during build (CLI only).
    #[serde(skip)]
    #[config(skip)]
    pub skip_drafts: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "dist".into(),
            sitemap: SitemapConfig::default(),
            clean: false,
            skip_drafts: false,
        }
    }
}

/// Sitemap generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build.sitemap", status = experimental)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    #[config(inline_doc = "Generate sitemap.xml (requires [site] url).")]
    pub enable: bool,

    /// Output filename, relative to the output directory.
    #[config(default = "sitemap.xml", inline_doc = "Output filename.")]
    pub filename: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: false,
            filename: "sitemap.xml".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, Path::new("content"));
        assert_eq!(config.build.output, Path::new("dist"));
        assert!(!config.build.sitemap.enable);
        assert!(!config.build.clean);
    }

    #[test]
    fn test_build_overrides() {
        let config = test_parse_config(
            "[build]\ncontent = \"docs\"\noutput = \"public\"\n[build.sitemap]\nenable = true",
        );
        assert_eq!(config.build.content, Path::new("docs"));
        assert_eq!(config.build.output, Path::new("public"));
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.filename, Path::new("sitemap.xml"));
    }
}
