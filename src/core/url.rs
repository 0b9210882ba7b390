//! Strongly-typed URL paths.
//!
//! A `UrlPath` is always stored decoded, with a leading `/` and no
//! trailing slash (the root is the single exception, `/`). Query strings
//! and fragments never survive construction, so the rest of the crate
//! can use it directly as a route key.

use std::{
    borrow::Borrow,
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Bytes percent-encoded when a path is emitted into markup.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'#');

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// The site root, `/`.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Build from an internal page path. Normalizes slashes and strips
    /// any query or fragment.
    pub fn from_page(path: &str) -> Self {
        Self(Arc::from(normalize(strip_query_fragment(path.trim()))))
    }

    /// Build from a raw request URL: percent-decoded, then normalized.
    pub fn from_browser(raw: &str) -> Self {
        let bare = strip_query_fragment(raw.trim());
        let decoded = percent_decode_str(bare).decode_utf8_lossy();
        Self(Arc::from(normalize(&decoded)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Path segments without the leading slash.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Parent path; `/a/b` -> `/a`, `/a` -> `/`, `/` -> None.
    pub fn parent(&self) -> Option<UrlPath> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(0) => Some(UrlPath::root()),
            Some(i) => Some(UrlPath(Arc::from(&self.0[..i]))),
            None => None,
        }
    }

    /// Percent-encoded form for hrefs and sitemap locations.
    pub fn to_encoded(&self) -> String {
        utf8_percent_encode(&self.0, PATH_ENCODE_SET).to_string()
    }

    /// Output file for this route: `<out>/<segments...>/index.html`,
    /// or `<out>/index.html` for the root.
    pub fn index_file(&self, out_dir: &Path) -> PathBuf {
        let mut path = out_dir.to_path_buf();
        for seg in self.segments() {
            path.push(seg);
        }
        path.push("index.html");
        path
    }
}

fn strip_query_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(i) => &path[..i],
        None => path,
    }
}

/// Leading slash, collapsed separators, no trailing slash except root.
fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    for seg in path.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(seg);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

impl fmt::Display for UrlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(UrlPath::from_page(&raw))
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page_normalizes() {
        assert_eq!(UrlPath::from_page("/dsa/"), "/dsa");
        assert_eq!(
            UrlPath::from_page("dsa/core-algorithms"),
            "/dsa/core-algorithms"
        );
        assert_eq!(UrlPath::from_page("//a///b/"), "/a/b");
        assert_eq!(UrlPath::from_page(""), "/");
        assert_eq!(UrlPath::from_page("/"), "/");
    }

    #[test]
    fn test_from_page_strips_query_and_fragment() {
        assert_eq!(UrlPath::from_page("/dsa?tab=1"), "/dsa");
        assert_eq!(UrlPath::from_page("/dsa#section"), "/dsa");
        assert_eq!(UrlPath::from_page("/dsa?a=1#b"), "/dsa");
    }

    #[test]
    fn test_from_browser_decodes() {
        assert_eq!(UrlPath::from_browser("/two%20pointers"), "/two pointers");
        assert_eq!(UrlPath::from_browser("/dsa%2Fcore"), "/dsa/core");
    }

    #[test]
    fn test_parent() {
        assert_eq!(
            UrlPath::from_page("/a/b").parent(),
            Some(UrlPath::from_page("/a"))
        );
        assert_eq!(UrlPath::from_page("/a").parent(), Some(UrlPath::root()));
        assert_eq!(UrlPath::root().parent(), None);
    }

    #[test]
    fn test_segments() {
        let url = UrlPath::from_page("/dsa/core-algorithms/binary-search");
        let segs: Vec<_> = url.segments().collect();
        assert_eq!(segs, ["dsa", "core-algorithms", "binary-search"]);
        assert_eq!(UrlPath::root().segments().count(), 0);
    }

    #[test]
    fn test_index_file() {
        let out = Path::new("dist");
        assert_eq!(
            UrlPath::root().index_file(out),
            Path::new("dist/index.html")
        );
        assert_eq!(
            UrlPath::from_page("/dsa/trees").index_file(out),
            Path::new("dist/dsa/trees/index.html")
        );
    }

    #[test]
    fn test_encoding() {
        let url = UrlPath::from_browser("/two%20pointers");
        assert_eq!(url.to_encoded(), "/two%20pointers");
        // already-safe paths are untouched
        assert_eq!(UrlPath::from_page("/dsa/trees").to_encoded(), "/dsa/trees");
    }

    #[test]
    fn test_map_lookup_by_str() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(UrlPath::from_page("/dsa"), 1);
        assert_eq!(map.get("/dsa"), Some(&1));
    }
}
