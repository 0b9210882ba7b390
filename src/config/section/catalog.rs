//! `[catalog]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [catalog]
//! root = "DSA"                # Top-level content directory to treat as the catalog root
//!
//! [catalog.descriptions]
//! "2. Core Algorithms" = "Sorting, searching and the classics."
//! ```
//!
//! Keys in `[catalog.descriptions]` are raw directory names (ordering
//! prefix included) and override the card copy for that child wherever
//! it appears.

use std::collections::BTreeMap;

use macros::Config;
use serde::{Deserialize, Serialize};

/// Catalog derivation settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "catalog")]
pub struct CatalogConfig {
    /// Conventional root directory of the catalog tree.
    #[config(default = "DSA", inline_doc = "Top-level catalog directory.")]
    pub root: String,

    /// Card description overrides, keyed by raw directory name.
    #[config(status = hidden)]
    pub descriptions: BTreeMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: "DSA".into(),
            descriptions: BTreeMap::new(),
        }
    }
}

impl CatalogConfig {
    /// Validate catalog configuration.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.root.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.root,
                "catalog root must not be empty",
                "set the name of the top-level content directory, e.g.: \"DSA\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ConfigDiagnostics;
    use crate::config::test_parse_config;

    #[test]
    fn test_catalog_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.catalog.root, "DSA");
        assert!(config.catalog.descriptions.is_empty());
    }

    #[test]
    fn test_catalog_descriptions() {
        let config = test_parse_config(
            "[catalog]\nroot = \"Math\"\n[catalog.descriptions]\n\"1. Algebra\" = \"Symbols and structure.\"",
        );
        assert_eq!(config.catalog.root, "Math");
        assert_eq!(
            config.catalog.descriptions.get("1. Algebra").map(String::as_str),
            Some("Symbols and structure.")
        );
    }

    #[test]
    fn test_empty_root_rejected() {
        let config = test_parse_config("[catalog]\nroot = \"  \"");
        let mut diag = ConfigDiagnostics::new();
        config.catalog.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
