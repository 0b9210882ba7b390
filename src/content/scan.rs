//! Filesystem walk producing the discovery snapshot.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use jwalk::WalkDir;

use crate::config::SiteConfig;

use super::{ContentSet, ContentUnit, extract_front_matter};

/// File name that marks a directory as a content unit.
pub const INDEX_FILE: &str = "index.md";

/// Walk the content directory and load every `index.md`.
///
/// Results are sorted by path so discovery order is stable across
/// platforms and directory iteration quirks.
pub fn scan_content(config: &SiteConfig) -> Result<ContentSet> {
    let content_dir = &config.build.content;
    if !content_dir.exists() {
        return Ok(ContentSet::default());
    }

    let mut sources: Vec<PathBuf> = WalkDir::new(content_dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && e.file_name() == OsStr::new(INDEX_FILE))
        .map(|e| e.path())
        .collect();
    sources.sort();

    let mut units = Vec::with_capacity(sources.len());
    for source in sources {
        let Some(unit) = load_unit(&source, content_dir)? else {
            continue;
        };
        if unit.meta.draft && config.build.skip_drafts {
            crate::debug!("scan"; "skipping draft: {}", unit.path);
            continue;
        }
        units.push(unit);
    }

    Ok(ContentSet { units })
}

fn load_unit(source: &Path, content_dir: &Path) -> Result<Option<ContentUnit>> {
    let Ok(relative) = source.strip_prefix(content_dir) else {
        return Ok(None);
    };
    // Slash-delimited key regardless of platform separator.
    let path = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    let raw = fs::read_to_string(source)
        .with_context(|| format!("Failed to read {}", source.display()))?;
    let (meta, body) = extract_front_matter(&raw)
        .with_context(|| format!("Failed to parse front matter in {}", source.display()))?;

    Ok(Some(ContentUnit {
        source: source.to_path_buf(),
        path,
        body: body.to_string(),
        meta,
    }))
}

/// Non-markdown files living beside an `index.md`, copied through to the
/// output at the slugified location.
pub fn scan_assets(content_dir: &Path) -> Vec<PathBuf> {
    if !content_dir.exists() {
        return Vec::new();
    }
    let mut assets: Vec<PathBuf> = WalkDir::new(content_dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) != Some("md"))
        .collect();
    assets.sort();
    assets
}

/// True when the content directory holds no units at all. The dev server
/// shows a welcome page in that case instead of a wall of 404s.
pub fn is_content_empty(config: &SiteConfig) -> bool {
    let content_dir = &config.build.content;
    if !content_dir.exists() {
        return true;
    }
    !WalkDir::new(content_dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .any(|e| e.file_type().is_file() && e.file_name() == OsStr::new(INDEX_FILE))
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.content = dir.to_path_buf();
        config
    }

    fn write_unit(root: &Path, rel: &str, contents: &str) {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).expect("create dirs");
        fs::write(dir.join(INDEX_FILE), contents).expect("write unit");
    }

    #[test]
    fn test_scan_collects_units_sorted() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_unit(tmp.path(), "DSA", "# root");
        write_unit(tmp.path(), "DSA/2. Core Algorithms", "# core");
        write_unit(tmp.path(), "DSA/1. Foundations", "# foundations");

        let set = scan_content(&config_for(tmp.path())).expect("scan");
        let paths: Vec<_> = set.iter().map(|u| u.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "DSA/1. Foundations/index.md",
                "DSA/2. Core Algorithms/index.md",
                "DSA/index.md",
            ]
        );
    }

    #[test]
    fn test_scan_reads_front_matter_and_body() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_unit(
            tmp.path(),
            "DSA/Trees",
            "+++\ndescription = \"Branching structures\"\n+++\n# Trees\n",
        );

        let set = scan_content(&config_for(tmp.path())).expect("scan");
        assert_eq!(set.len(), 1);
        let unit = &set.units[0];
        assert_eq!(unit.meta.description.as_deref(), Some("Branching structures"));
        assert_eq!(unit.body, "# Trees\n");
    }

    #[test]
    fn test_scan_skips_drafts_when_requested() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_unit(tmp.path(), "DSA", "# root");
        write_unit(tmp.path(), "DSA/WIP", "+++\ndraft = true\n+++\n# wip");

        let mut config = config_for(tmp.path());
        config.build.skip_drafts = true;
        let set = scan_content(&config).expect("scan");
        assert_eq!(set.len(), 1);
        assert_eq!(set.units[0].path, "DSA/index.md");
    }

    #[test]
    fn test_scan_ignores_other_markdown_files() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_unit(tmp.path(), "DSA", "# root");
        fs::write(tmp.path().join("DSA/notes.md"), "scratch").expect("write");

        let set = scan_content(&config_for(tmp.path())).expect("scan");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_scan_assets_excludes_markdown() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_unit(tmp.path(), "DSA/Trees", "# trees");
        fs::write(tmp.path().join("DSA/Trees/diagram.svg"), "<svg/>").expect("write");

        let assets = scan_assets(tmp.path());
        assert_eq!(assets.len(), 1);
        assert!(assets[0].ends_with("diagram.svg"));
    }

    #[test]
    fn test_is_content_empty() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config = config_for(tmp.path());
        assert!(is_content_empty(&config));

        write_unit(tmp.path(), "DSA", "# root");
        assert!(!is_content_empty(&config));
    }

    #[test]
    fn test_missing_content_dir_is_empty_set() {
        let config = config_for(Path::new("/nonexistent/bezel-content"));
        let set = scan_content(&config).expect("scan");
        assert!(set.is_empty());
    }
}
