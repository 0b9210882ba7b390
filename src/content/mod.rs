//! Content discovery: one `index.md` per topic directory.
//!
//! The discovery snapshot is materialized eagerly and handed to the
//! catalog builder as a plain value; nothing downstream touches the
//! filesystem again.

mod front_matter;
mod scan;

use std::path::PathBuf;

pub use front_matter::{PageMeta, extract_front_matter};
pub use scan::{INDEX_FILE, is_content_empty, scan_assets, scan_content};

/// A renderable leaf produced by discovery.
#[derive(Debug, Clone)]
pub struct ContentUnit {
    /// Absolute source file location.
    pub source: PathBuf,
    /// Content-root-relative path, slash-delimited, ending in `index.md`.
    /// This is the identity key the hierarchy is derived from.
    pub path: String,
    /// Markdown body with the front matter block removed.
    pub body: String,
    pub meta: PageMeta,
}

/// The full discovery snapshot, in deterministic (sorted path) order.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    pub units: Vec<ContentUnit>,
}

impl ContentSet {
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentUnit> {
        self.units.iter()
    }
}
