//! Catalog derivation: a flat discovery snapshot in, a route table out.
//!
//! The pipeline runs once per build, synchronously:
//! 1. `EntryTree::build` links entries by shared path prefixes
//! 2. `build_catalog_page` synthesizes a listing page per branch node
//! 3. `build_route_table` mounts fixed routes, then every entry
//!
//! Everything here is a pure function of the snapshot and the config;
//! rendering and IO live in `render` and `cli::build`.

mod entry;
mod page;
mod route;
mod slug;
mod title;

pub use entry::{Entry, EntryTree};
pub use page::{CTA_OPEN_TOPIC, CTA_VIEW_SUBTOPICS, Card, CatalogPage, build_catalog_page};
pub use route::{DESKTOP_PATH, Route, RouteTable, RouteTarget, build_route_table};
pub use slug::slugify;
pub use title::{natural_cmp, strip_ordering_prefix};
