//! TOML front matter, fenced with `+++`.

use anyhow::{Result, anyhow, bail};
use serde::Deserialize;

const FENCE: &str = "+++";

/// Metadata block at the top of an `index.md`.
///
/// The directory name still drives hierarchy and ordering; front matter
/// only affects presentation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageMeta {
    /// Overrides the article heading on the rendered page.
    pub title: Option<String>,
    /// Short text shown on the parent catalog card.
    pub description: Option<String>,
    /// Drafts are skipped when building with --skip-drafts.
    pub draft: bool,
}

/// Split a markdown document into metadata and body.
///
/// Documents without a front matter block get default metadata.
pub fn extract_front_matter(input: &str) -> Result<(PageMeta, &str)> {
    let Some(rest) = input.strip_prefix(FENCE) else {
        return Ok((PageMeta::default(), input));
    };
    let Some(end) = rest.find("\n+++") else {
        bail!("unterminated front matter block");
    };

    let raw = &rest[..end];
    let body = rest[end + 4..].trim_start_matches(['\r', '\n']);

    let meta: PageMeta = toml::from_str(raw).map_err(|e| anyhow!("invalid front matter: {e}"))?;
    Ok((meta, body))
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_front_matter() {
        let (meta, body) = extract_front_matter("# Heading\n\ntext").expect("parse");
        assert!(meta.description.is_none());
        assert!(!meta.draft);
        assert_eq!(body, "# Heading\n\ntext");
    }

    #[test]
    fn test_front_matter_fields() {
        let input = "+++\ntitle = \"Binary Search\"\ndescription = \"Divide and conquer\"\ndraft = true\n+++\n\nbody text";
        let (meta, body) = extract_front_matter(input).expect("parse");
        assert_eq!(meta.title.as_deref(), Some("Binary Search"));
        assert_eq!(meta.description.as_deref(), Some("Divide and conquer"));
        assert!(meta.draft);
        assert_eq!(body, "body text");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let input = "+++\nweight = 3\n+++\nbody";
        let (meta, body) = extract_front_matter(input).expect("parse");
        assert!(meta.title.is_none());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_unterminated_block_errors() {
        assert!(extract_front_matter("+++\ntitle = \"x\"\n").is_err());
    }

    #[test]
    fn test_invalid_toml_errors() {
        assert!(extract_front_matter("+++\ntitle = = \n+++\nbody").is_err());
    }
}
