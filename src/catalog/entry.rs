//! The entry tree: hierarchy derived from shared path prefixes.

use rustc_hash::FxHashMap;

use crate::content::{ContentSet, INDEX_FILE};
use crate::core::UrlPath;
use crate::log;

use super::slug::slugify;
use super::title::{natural_cmp, strip_ordering_prefix};

/// One node in the derived hierarchy. Every discovered unit becomes an
/// entry; entries that gain children double as catalog nodes.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Identity key: the unit path without its `index.md` suffix,
    /// e.g. `DSA/2. Core Algorithms`.
    pub relative_path: String,
    /// Mount point: every path segment prefix-stripped then slugified,
    /// joined with `/`.
    pub url: UrlPath,
    /// Last path segment, ordering prefix included.
    pub raw_title: String,
    /// Display title, ordering prefix stripped.
    pub title: String,
    /// Index of the owning unit in the discovery snapshot.
    pub unit: usize,
    /// Resolved parent, None for top-level and orphaned entries.
    pub parent: Option<usize>,
    /// Children in numeric-aware raw-title order.
    pub children: Vec<usize>,
}

impl Entry {
    /// Branch nodes render a catalog; leaves render their own unit.
    pub fn is_catalog(&self) -> bool {
        !self.children.is_empty()
    }
}

/// All entries plus the key index and the conventional root.
///
/// Built once per pipeline run from the discovery snapshot, read-only
/// afterwards.
#[derive(Debug)]
pub struct EntryTree {
    entries: Vec<Entry>,
    by_path: FxHashMap<String, usize>,
    root: Option<usize>,
}

impl EntryTree {
    /// Link the discovery snapshot into a tree.
    ///
    /// `root_key` is the conventional top-level relative path (the
    /// `[catalog] root` setting). Its absence is tolerated; the route
    /// table degrades the root catalog to a not-found page.
    pub fn build(set: &ContentSet, root_key: &str) -> Self {
        let mut entries: Vec<Entry> = Vec::with_capacity(set.len());
        let mut by_path: FxHashMap<String, usize> = FxHashMap::default();

        for (unit, content) in set.iter().enumerate() {
            let Some(relative_path) = identity_key(&content.path) else {
                crate::debug!("catalog"; "ignoring stray unit: {}", content.path);
                continue;
            };

            // Ordering prefixes never reach the URL, only the raw title.
            let url = UrlPath::from_page(
                &relative_path
                    .split('/')
                    .map(|seg| slugify(strip_ordering_prefix(seg)))
                    .collect::<Vec<_>>()
                    .join("/"),
            );
            let raw_title = relative_path
                .rsplit('/')
                .next()
                .unwrap_or(&relative_path)
                .to_string();
            let title = strip_ordering_prefix(&raw_title).to_string();

            let id = entries.len();
            if let Some(previous) = by_path.insert(relative_path.clone(), id) {
                // Last write wins; the displaced entry stays in the arena
                // but is no longer reachable through the key index.
                log!("warn";
                    "duplicate catalog key '{relative_path}' (units #{previous} and #{id}), keeping the later one");
            }
            entries.push(Entry {
                relative_path,
                url,
                raw_title,
                title,
                unit,
                parent: None,
                children: Vec::new(),
            });
        }

        // Link after all keys are known so discovery order cannot affect
        // parent resolution.
        for id in 0..entries.len() {
            if by_path.get(entries[id].relative_path.as_str()) != Some(&id) {
                continue; // displaced duplicate, never linked
            }
            let Some((parent_key, _)) = entries[id].relative_path.rsplit_once('/') else {
                continue; // top-level entry
            };
            match by_path.get(parent_key) {
                Some(&pid) => {
                    entries[id].parent = Some(pid);
                    entries[pid].children.push(id);
                }
                None => {
                    // Orphan: still mounted at its own URL, just never
                    // listed as a card.
                    crate::debug!("catalog"; "no parent '{}' for '{}'", parent_key, entries[id].relative_path);
                }
            }
        }

        let raw_titles: Vec<String> = entries.iter().map(|e| e.raw_title.clone()).collect();
        for entry in &mut entries {
            entry
                .children
                .sort_by(|&a, &b| natural_cmp(&raw_titles[a], &raw_titles[b]));
        }

        let root = by_path.get(root_key).copied();
        if root.is_none() {
            log!("warn"; "catalog root '{root_key}' not found in content, the root catalog will be a 404");
        }

        Self {
            entries,
            by_path,
            root,
        }
    }

    pub fn get(&self, id: usize) -> &Entry {
        &self.entries[id]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries.iter().enumerate()
    }

    /// Key-index lookup by relative path.
    pub fn by_key(&self, relative_path: &str) -> Option<usize> {
        self.by_path.get(relative_path).copied()
    }

    /// The conventional root entry, if discovered.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// False for entries displaced by a duplicate key.
    pub fn is_canonical(&self, id: usize) -> bool {
        self.by_path.get(self.entries[id].relative_path.as_str()) == Some(&id)
    }
}

/// `DSA/2. Core Algorithms/index.md` -> `DSA/2. Core Algorithms`.
///
/// A top-level `index.md` has no identity (no segments) and is ignored.
fn identity_key(unit_path: &str) -> Option<String> {
    let stripped = unit_path.strip_suffix(INDEX_FILE)?;
    let key = stripped.strip_suffix('/').unwrap_or(stripped);
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentUnit, PageMeta};
    use std::path::PathBuf;

    fn unit(path: &str) -> ContentUnit {
        ContentUnit {
            source: PathBuf::new(),
            path: path.to_string(),
            body: String::new(),
            meta: PageMeta::default(),
        }
    }

    fn snapshot(paths: &[&str]) -> ContentSet {
        ContentSet {
            units: paths.iter().map(|p| unit(p)).collect(),
        }
    }

    #[test]
    fn test_cardinality_matches_snapshot() {
        let set = snapshot(&[
            "DSA/index.md",
            "DSA/1. Foundations/index.md",
            "DSA/2. Core Algorithms/index.md",
            "DSA/2. Core Algorithms/Binary Search/index.md",
        ]);
        let tree = EntryTree::build(&set, "DSA");
        assert_eq!(tree.len(), 4);

        // every resolved parent accounts for exactly one child slot
        let resolved_parents = tree.iter().filter(|(_, e)| e.parent.is_some()).count();
        let total_children: usize = tree.iter().map(|(_, e)| e.children.len()).sum();
        assert_eq!(resolved_parents, total_children);
    }

    #[test]
    fn test_urls_and_titles() {
        let set = snapshot(&["DSA/index.md", "DSA/2. Core Algorithms/index.md"]);
        let tree = EntryTree::build(&set, "DSA");

        let root = tree.root().expect("root");
        assert_eq!(tree.get(root).url, "/dsa");
        assert_eq!(tree.get(root).title, "DSA");

        let core = tree.by_key("DSA/2. Core Algorithms").expect("core");
        assert_eq!(tree.get(core).url, "/dsa/core-algorithms");
        assert_eq!(tree.get(core).raw_title, "2. Core Algorithms");
        assert_eq!(tree.get(core).title, "Core Algorithms");
    }

    #[test]
    fn test_url_drops_ordering_prefix_at_every_depth() {
        let set = snapshot(&[
            "DSA/index.md",
            "DSA/1. Foundations/index.md",
            "DSA/1. Foundations/2. Big O/index.md",
        ]);
        let tree = EntryTree::build(&set, "DSA");

        let leaf = tree.by_key("DSA/1. Foundations/2. Big O").expect("leaf");
        assert_eq!(tree.get(leaf).url, "/dsa/foundations/big-o");
    }

    #[test]
    fn test_children_sorted_numerically() {
        let set = snapshot(&[
            "DSA/index.md",
            "DSA/10. Z/index.md",
            "DSA/2. A/index.md",
            "DSA/1. B/index.md",
        ]);
        let tree = EntryTree::build(&set, "DSA");
        let root = tree.root().expect("root");
        let order: Vec<_> = tree
            .get(root)
            .children
            .iter()
            .map(|&c| tree.get(c).raw_title.as_str())
            .collect();
        assert_eq!(order, ["1. B", "2. A", "10. Z"]);
    }

    #[test]
    fn test_orphan_has_no_parent_but_exists() {
        let set = snapshot(&["DSA/index.md", "DSA/Missing/Orphan/index.md"]);
        let tree = EntryTree::build(&set, "DSA");
        let orphan = tree.by_key("DSA/Missing/Orphan").expect("orphan");
        assert_eq!(tree.get(orphan).parent, None);
        assert_eq!(tree.get(orphan).url, "/dsa/missing/orphan");
        // it never appears as anyone's child
        let root = tree.root().expect("root");
        assert!(tree.get(root).children.is_empty());
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let set = snapshot(&["DSA/index.md", "DSA/Trees/index.md", "DSA/Trees/index.md"]);
        let tree = EntryTree::build(&set, "DSA");
        assert_eq!(tree.len(), 3);

        let winner = tree.by_key("DSA/Trees").expect("winner");
        assert_eq!(tree.get(winner).unit, 2);
        assert!(tree.is_canonical(winner));
        // the displaced entry is still in the arena but not canonical
        let displaced = tree
            .iter()
            .find(|(id, e)| e.relative_path == "DSA/Trees" && *id != winner)
            .map(|(id, _)| id)
            .expect("displaced");
        assert!(!tree.is_canonical(displaced));
        // only the winner is linked as a child
        let root = tree.root().expect("root");
        assert_eq!(tree.get(root).children, vec![winner]);
    }

    #[test]
    fn test_missing_root_is_tolerated() {
        let set = snapshot(&["Other/index.md"]);
        let tree = EntryTree::build(&set, "DSA");
        assert_eq!(tree.root(), None);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_top_level_index_is_ignored() {
        let set = snapshot(&["index.md", "DSA/index.md"]);
        let tree = EntryTree::build(&set, "DSA");
        assert_eq!(tree.len(), 1);
        assert!(tree.root().is_some());
    }
}
