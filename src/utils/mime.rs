//! MIME type lookup for the dev server.

use std::path::Path;

pub mod types {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const CSS: &str = "text/css";
    pub const JS: &str = "text/javascript";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const SVG: &str = "image/svg+xml";
    pub const WEBP: &str = "image/webp";
    pub const ICO: &str = "image/x-icon";
    pub const WOFF2: &str = "font/woff2";
    pub const OCTET: &str = "application/octet-stream";
}

pub fn from_path(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => types::HTML,
        Some("css") => types::CSS,
        Some("js" | "mjs") => types::JS,
        Some("json") => types::JSON,
        Some("xml") => types::XML,
        Some("txt" | "md") => types::PLAIN,
        Some("png") => types::PNG,
        Some("jpg" | "jpeg") => types::JPEG,
        Some("gif") => types::GIF,
        Some("svg") => types::SVG,
        Some("webp") => types::WEBP,
        Some("ico") => types::ICO,
        Some("woff2") => types::WOFF2,
        _ => types::OCTET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(Path::new("index.html")), types::HTML);
        assert_eq!(from_path(Path::new("a/b/bezel.css")), types::CSS);
        assert_eq!(from_path(Path::new("sitemap.xml")), types::XML);
        assert_eq!(from_path(Path::new("no-extension")), types::OCTET);
    }
}
