//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing all reachable pages for search
//! engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/dsa</loc>
//!   </url>
//! </urlset>
//! ```

use crate::catalog::{RouteTable, RouteTarget};
use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build the sitemap if enabled.
pub fn write_sitemap(config: &SiteConfig, routes: &RouteTable) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::build(config, routes);
        sitemap.write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    fn build(config: &SiteConfig, routes: &RouteTable) -> Self {
        let base_url = config
            .site
            .url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/');

        // Shadowed routes and the not-found placeholder never get a <loc>
        let urls = routes
            .reachable()
            .filter(|route| !matches!(route.target, RouteTarget::NotFound))
            .map(|route| format!("{}{}", base_url, route.url.to_encoded()))
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for loc in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&loc));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.filename);
        let xml = self.into_xml();

        fs::write(&sitemap_path, &xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
