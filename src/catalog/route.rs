//! Route table construction.
//!
//! Fixed routes mount first (landing, desktop shell, root catalog), then
//! every remaining entry in discovery order. The table is built once per
//! pipeline run and consumed by the page writer and the dev server.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::ContentSet;
use crate::core::UrlPath;
use crate::log;

use super::entry::EntryTree;
use super::page::{CatalogPage, build_catalog_page};
use super::slug::slugify;
use super::title::strip_ordering_prefix;

/// Fixed mount point for the desktop-shell entry page.
pub const DESKTOP_PATH: &str = "/desktop";

/// What a mounted URL renders to.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RouteTarget {
    /// The home page.
    Landing,
    /// The alternate desktop-shell entry point.
    Shell,
    /// A synthesized listing of children.
    Catalog(CatalogPage),
    /// A single unit rendered from its markdown body.
    Content { entry: usize, key: String },
    /// The graceful fallback, also mounted explicitly when the root
    /// catalog degenerates.
    NotFound,
}

/// One mounted URL.
#[derive(Debug, Serialize)]
pub struct Route {
    pub url: UrlPath,
    #[serde(flatten)]
    pub target: RouteTarget,
}

/// All mounted routes plus the reachability index.
///
/// Collisions keep every contender listed but only the first one
/// resolvable, so `routes` and `by_url` can disagree on purpose.
#[derive(Debug, Serialize)]
pub struct RouteTable {
    routes: Vec<Route>,
    #[serde(skip)]
    by_url: FxHashMap<UrlPath, usize>,
    #[serde(skip)]
    catalog_url: UrlPath,
}

/// Mount fixed routes, then every canonical entry, then any entries
/// displaced by a duplicate key (listed, but shadowed by the canonical
/// mount at the same URL).
pub fn build_route_table(tree: &EntryTree, set: &ContentSet, config: &SiteConfig) -> RouteTable {
    // Same segment transform the entry tree applies, so the fixed mount
    // and the root entry's own URL agree.
    let catalog_url = UrlPath::from_page(&format!(
        "/{}",
        slugify(strip_ordering_prefix(&config.catalog.root))
    ));
    let mut table = RouteTable {
        routes: Vec::with_capacity(tree.len() + 3),
        by_url: FxHashMap::default(),
        catalog_url: catalog_url.clone(),
    };

    table.mount(UrlPath::root(), RouteTarget::Landing);
    table.mount(UrlPath::from_page(DESKTOP_PATH), RouteTarget::Shell);

    // Root catalog: a missing or childless root degrades to a 404 page
    // at the same mount point.
    let root_target = tree
        .root()
        .and_then(|id| build_catalog_page(tree, set, id, &config.catalog))
        .map_or(RouteTarget::NotFound, RouteTarget::Catalog);
    table.mount(catalog_url, root_target);

    let mut displaced = Vec::new();
    for (id, entry) in tree.iter() {
        if tree.root() == Some(id) {
            continue;
        }
        if !tree.is_canonical(id) {
            displaced.push(id);
            continue;
        }
        let target = match build_catalog_page(tree, set, id, &config.catalog) {
            Some(page) => RouteTarget::Catalog(page),
            None => RouteTarget::Content {
                entry: id,
                key: entry.relative_path.clone(),
            },
        };
        table.mount(entry.url.clone(), target);
    }

    // Displaced duplicates mount after the canonical entries so they stay
    // listed but always lose their URL. They are never linked, so they
    // can only be content targets.
    for id in displaced {
        let entry = tree.get(id);
        table.mount(
            entry.url.clone(),
            RouteTarget::Content {
                entry: id,
                key: entry.relative_path.clone(),
            },
        );
    }

    table
}

impl RouteTable {
    /// Push a route. On a URL collision the first mount stays reachable
    /// and the newcomer is listed but shadowed.
    fn mount(&mut self, url: UrlPath, target: RouteTarget) {
        let idx = self.routes.len();
        if let Some(&winner) = self.by_url.get(&url) {
            log!("warn";
                "route collision at '{url}': {} shadows {}",
                describe(&self.routes[winner].target),
                describe(&target));
        } else {
            self.by_url.insert(url.clone(), idx);
        }
        self.routes.push(Route { url, target });
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// True when this route wins its URL.
    pub fn is_reachable(&self, idx: usize) -> bool {
        self.by_url.get(&self.routes[idx].url) == Some(&idx)
    }

    /// Number of distinct reachable URLs.
    pub fn reachable_count(&self) -> usize {
        self.by_url.len()
    }

    /// The routes that actually win their URL, in mount order.
    pub fn reachable(&self) -> impl Iterator<Item = &Route> {
        self.routes
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.is_reachable(*idx))
            .map(|(_, route)| route)
    }

    /// Resolve a decoded request path.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.by_url.get(path).map(|&idx| &self.routes[idx])
    }

    /// Mount point of the root catalog.
    pub fn catalog_url(&self) -> &UrlPath {
        &self.catalog_url
    }
}

fn describe(target: &RouteTarget) -> &'static str {
    match target {
        RouteTarget::Landing => "the landing page",
        RouteTarget::Shell => "the desktop shell",
        RouteTarget::Catalog(_) => "a catalog page",
        RouteTarget::Content { .. } => "a content page",
        RouteTarget::NotFound => "a not-found page",
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::page::{CTA_OPEN_TOPIC, CTA_VIEW_SUBTOPICS};
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

    fn table_for(paths: &[&str]) -> RouteTable {
        let set = snapshot(paths);
        let config = SiteConfig::default();
        let tree = EntryTree::build(&set, &config.catalog.root);
        build_route_table(&tree, &set, &config)
    }

    #[test]
    fn test_fixed_routes_mount_first() {
        let table = table_for(&["DSA/index.md", "DSA/Trees/index.md"]);
        assert_eq!(table.routes()[0].url, "/");
        assert!(matches!(table.routes()[0].target, RouteTarget::Landing));
        assert_eq!(table.routes()[1].url, "/desktop");
        assert!(matches!(table.routes()[1].target, RouteTarget::Shell));
        assert_eq!(table.routes()[2].url, "/dsa");
        assert!(matches!(table.routes()[2].target, RouteTarget::Catalog(_)));
        assert_eq!(table.catalog_url(), &UrlPath::from_page("/dsa"));
    }

    #[test]
    fn test_end_to_end_dsa_scenario() {
        let table = table_for(&[
            "DSA/index.md",
            "DSA/1. Foundations/index.md",
            "DSA/2. Core Algorithms/index.md",
            "DSA/2. Core Algorithms/Binary Search/index.md",
        ]);

        let root = table.resolve("/dsa").expect("/dsa");
        let RouteTarget::Catalog(page) = &root.target else {
            panic!("root should be a catalog");
        };
        assert_eq!(page.heading, "Choose a topic cluster");
        assert_eq!(page.cards.len(), 2);
        assert_eq!(page.cards[1].target, "/dsa/core-algorithms");
        assert_eq!(page.cards[1].cta_label, CTA_VIEW_SUBTOPICS);

        let core = table.resolve("/dsa/core-algorithms").expect("core");
        let RouteTarget::Catalog(page) = &core.target else {
            panic!("core should be a catalog");
        };
        assert_eq!(page.cta_label, CTA_OPEN_TOPIC);
        assert_eq!(page.cards[0].target, "/dsa/core-algorithms/binary-search");

        let leaf = table
            .resolve("/dsa/core-algorithms/binary-search")
            .expect("leaf");
        assert!(matches!(
            leaf.target,
            RouteTarget::Content { ref key, .. } if key == "DSA/2. Core Algorithms/Binary Search"
        ));

        assert!(table.resolve("/dsa/no-such-topic").is_none());
    }

    #[test]
    fn test_childless_root_degrades_to_not_found() {
        let table = table_for(&["DSA/index.md"]);
        let root = table.resolve("/dsa").expect("/dsa");
        assert!(matches!(root.target, RouteTarget::NotFound));
    }

    #[test]
    fn test_missing_root_degrades_to_not_found() {
        let table = table_for(&["Other/index.md"]);
        let root = table.resolve("/dsa").expect("/dsa");
        assert!(matches!(root.target, RouteTarget::NotFound));
        // the stray entry is still independently mounted
        assert!(table.resolve("/other").is_some());
    }

    #[test]
    fn test_collision_first_mount_wins() {
        // "Two Pointers & Sliding Window" and "Two Pointers and Sliding
        // Window" slugify identically.
        let table = table_for(&[
            "DSA/index.md",
            "DSA/Two Pointers & Sliding Window/index.md",
            "DSA/Two Pointers and Sliding Window/index.md",
        ]);

        let url = "/dsa/two-pointers-and-sliding-window";
        let winner = table.resolve(url).expect("winner");
        assert!(matches!(
            winner.target,
            RouteTarget::Content { ref key, .. } if key == "DSA/Two Pointers & Sliding Window"
        ));

        // both contenders are listed, one unreachable
        let listed = table
            .routes()
            .iter()
            .filter(|r| r.url == *url)
            .count();
        assert_eq!(listed, 2);
        assert_eq!(table.reachable_count(), table.len() - 1);
    }

    #[test]
    fn test_orphan_is_mounted() {
        let table = table_for(&["DSA/index.md", "DSA/Missing/Orphan/index.md"]);
        assert!(table.resolve("/dsa/missing/orphan").is_some());
    }

    #[test]
    fn test_displaced_duplicate_is_listed_but_shadowed() {
        let set = snapshot(&["DSA/index.md", "DSA/Trees/index.md", "DSA/Trees/index.md"]);
        let config = SiteConfig::default();
        let tree = EntryTree::build(&set, &config.catalog.root);
        let table = build_route_table(&tree, &set, &config);

        // both contenders are listed at the same URL
        let listed = table
            .routes()
            .iter()
            .filter(|r| r.url == "/dsa/trees")
            .count();
        assert_eq!(listed, 2);
        assert_eq!(table.reachable_count(), table.len() - 1);

        // the canonical (later) unit wins the URL
        let winner = table.resolve("/dsa/trees").expect("winner");
        let canonical = tree.by_key("DSA/Trees").expect("canonical");
        assert!(matches!(
            winner.target,
            RouteTarget::Content { entry, .. } if entry == canonical
        ));
    }
}
