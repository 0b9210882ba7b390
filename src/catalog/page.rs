//! Catalog page synthesis: one render-ready listing per branch entry.

use serde::Serialize;

use crate::config::CatalogConfig;
use crate::content::ContentSet;
use crate::core::UrlPath;

use super::entry::EntryTree;

/// Call-to-action for a child that has further children of its own.
pub const CTA_VIEW_SUBTOPICS: &str = "View subtopics ->";
/// Call-to-action for a pure leaf child.
pub const CTA_OPEN_TOPIC: &str = "Open topic ->";

const ROOT_HEADING: &str = "Choose a topic cluster";
const ROOT_DESCRIPTION: &str =
    "Browse the catalog by cluster. Each cluster groups related topics into a focused track.";
const ROOT_CARD_BADGE: &str = "CLUSTER";
const FALLBACK_CARD_BADGE: &str = "TOPIC";

/// One child listed on a catalog page.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub target: UrlPath,
    pub raw_title: String,
    pub title: String,
    pub description: String,
    pub badge: String,
    pub cta_label: &'static str,
}

/// Render-ready description of a catalog page.
///
/// Derived purely from the entry tree, the discovery snapshot and the
/// `[catalog]` config section; recomputed on every build, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    pub heading: String,
    pub description: String,
    pub badge_label: String,
    pub back_link: UrlPath,
    pub back_label: String,
    pub cta_label: &'static str,
    pub cards: Vec<Card>,
}

/// Synthesize the catalog page for an entry, or None for a pure leaf.
pub fn build_catalog_page(
    tree: &EntryTree,
    set: &ContentSet,
    id: usize,
    catalog: &CatalogConfig,
) -> Option<CatalogPage> {
    let entry = tree.get(id);
    if entry.children.is_empty() {
        return None;
    }

    let is_root = tree.root() == Some(id);
    let root_style = is_root || entry.parent.is_none();

    let card_badge = if is_root {
        ROOT_CARD_BADGE.to_string()
    } else if entry.title.is_empty() {
        FALLBACK_CARD_BADGE.to_string()
    } else {
        entry.title.to_uppercase()
    };

    let cards: Vec<Card> = entry
        .children
        .iter()
        .map(|&cid| {
            let child = tree.get(cid);
            let description = card_description(catalog, set, tree, cid, entry, root_style);
            Card {
                target: child.url.clone(),
                raw_title: child.raw_title.clone(),
                title: child.title.clone(),
                description,
                badge: card_badge.clone(),
                cta_label: if child.is_catalog() {
                    CTA_VIEW_SUBTOPICS
                } else {
                    CTA_OPEN_TOPIC
                },
            }
        })
        .collect();

    let any_nested = entry.children.iter().any(|&cid| tree.get(cid).is_catalog());

    let (heading, description, badge_label) = if is_root {
        (
            ROOT_HEADING.to_string(),
            ROOT_DESCRIPTION.to_string(),
            format!("{} catalog", entry.title).to_uppercase(),
        )
    } else {
        (
            format!("Explore {}", entry.title),
            format!(
                "Select a subject within {} to continue exploring the track.",
                entry.title.to_lowercase()
            ),
            format!("{} track", entry.title).to_uppercase(),
        )
    };

    let (back_link, back_label) = match entry.parent {
        Some(pid) => {
            let parent = tree.get(pid);
            (parent.url.clone(), format!("Back to {}", parent.title))
        }
        None => (UrlPath::root(), "Back to home".to_string()),
    };

    Some(CatalogPage {
        heading,
        description,
        badge_label,
        back_link,
        back_label,
        cta_label: if any_nested {
            CTA_VIEW_SUBTOPICS
        } else {
            CTA_OPEN_TOPIC
        },
        cards,
    })
}

/// Card copy: config override first, then front matter, then synthesis.
fn card_description(
    catalog: &CatalogConfig,
    set: &ContentSet,
    tree: &EntryTree,
    child_id: usize,
    entry: &super::entry::Entry,
    root_style: bool,
) -> String {
    let child = tree.get(child_id);
    if let Some(text) = catalog.descriptions.get(&child.raw_title) {
        return text.clone();
    }
    if let Some(text) = &set.units[child.unit].meta.description {
        return text.clone();
    }
    if root_style {
        format!(
            "Explore core concepts and problem-solving techniques for {}.",
            child.title.to_lowercase()
        )
    } else {
        format!(
            "Dive into {} within the {} track.",
            child.title.to_lowercase(),
            entry.title.to_lowercase()
        )
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

    fn unit(path: &str, description: Option<&str>) -> ContentUnit {
        ContentUnit {
            source: PathBuf::new(),
            path: path.to_string(),
            body: String::new(),
            meta: PageMeta {
                description: description.map(str::to_string),
                ..PageMeta::default()
            },
        }
    }

    fn snapshot(paths: &[(&str, Option<&str>)]) -> ContentSet {
        ContentSet {
            units: paths.iter().map(|(p, d)| unit(p, *d)).collect(),
        }
    }

    fn dsa_snapshot() -> ContentSet {
        snapshot(&[
            ("DSA/index.md", None),
            ("DSA/1. Foundations/index.md", None),
            ("DSA/2. Core Algorithms/index.md", None),
            ("DSA/2. Core Algorithms/Binary Search/index.md", None),
        ])
    }

    #[test]
    fn test_leaf_has_no_page_and_branch_has_one() {
        let set = dsa_snapshot();
        let tree = EntryTree::build(&set, "DSA");
        let catalog = CatalogConfig::default();

        for (id, entry) in tree.iter() {
            let page = build_catalog_page(&tree, &set, id, &catalog);
            assert_eq!(page.is_some(), entry.is_catalog(), "{}", entry.relative_path);
        }
    }

    #[test]
    fn test_cta_reflects_child_shape() {
        let set = dsa_snapshot();
        let tree = EntryTree::build(&set, "DSA");
        let catalog = CatalogConfig::default();

        let root = tree.root().expect("root");
        let page = build_catalog_page(&tree, &set, root, &catalog).expect("page");
        assert_eq!(page.cta_label, CTA_VIEW_SUBTOPICS); // Core Algorithms nests

        let by_title: Vec<_> = page
            .cards
            .iter()
            .map(|c| (c.title.as_str(), c.cta_label))
            .collect();
        assert_eq!(
            by_title,
            [
                ("Foundations", CTA_OPEN_TOPIC),
                ("Core Algorithms", CTA_VIEW_SUBTOPICS),
            ]
        );

        // a catalog whose children are all leaves defaults to open-topic
        let core = tree.by_key("DSA/2. Core Algorithms").expect("core");
        let page = build_catalog_page(&tree, &set, core, &catalog).expect("page");
        assert_eq!(page.cta_label, CTA_OPEN_TOPIC);
    }

    #[test]
    fn test_root_page_copy() {
        let set = dsa_snapshot();
        let tree = EntryTree::build(&set, "DSA");
        let catalog = CatalogConfig::default();

        let root = tree.root().expect("root");
        let page = build_catalog_page(&tree, &set, root, &catalog).expect("page");
        assert_eq!(page.heading, "Choose a topic cluster");
        assert_eq!(page.badge_label, "DSA CATALOG");
        assert_eq!(page.back_link, "/");
        assert_eq!(page.back_label, "Back to home");
        assert!(page.cards.iter().all(|c| c.badge == "CLUSTER"));
        assert_eq!(
            page.cards[0].description,
            "Explore core concepts and problem-solving techniques for foundations."
        );
    }

    #[test]
    fn test_nested_page_copy() {
        let set = dsa_snapshot();
        let tree = EntryTree::build(&set, "DSA");
        let catalog = CatalogConfig::default();

        let core = tree.by_key("DSA/2. Core Algorithms").expect("core");
        let page = build_catalog_page(&tree, &set, core, &catalog).expect("page");
        assert_eq!(page.heading, "Explore Core Algorithms");
        assert_eq!(
            page.description,
            "Select a subject within core algorithms to continue exploring the track."
        );
        assert_eq!(page.badge_label, "CORE ALGORITHMS TRACK");
        assert_eq!(page.back_link, "/dsa");
        assert_eq!(page.back_label, "Back to DSA");
        assert_eq!(page.cards[0].badge, "CORE ALGORITHMS");
        assert_eq!(
            page.cards[0].description,
            "Dive into binary search within the core algorithms track."
        );
    }

    #[test]
    fn test_description_override_and_front_matter() {
        let set = snapshot(&[
            ("DSA/index.md", None),
            ("DSA/1. Foundations/index.md", Some("From the front matter.")),
            ("DSA/2. Core Algorithms/index.md", None),
        ]);
        let tree = EntryTree::build(&set, "DSA");
        let mut catalog = CatalogConfig::default();
        catalog.descriptions.insert(
            "2. Core Algorithms".to_string(),
            "Hand-written override.".to_string(),
        );

        let root = tree.root().expect("root");
        let page = build_catalog_page(&tree, &set, root, &catalog).expect("page");
        assert_eq!(page.cards[0].description, "From the front matter.");
        assert_eq!(page.cards[1].description, "Hand-written override.");
    }
}
