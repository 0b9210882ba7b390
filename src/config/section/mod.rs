//! Configuration section definitions.
//!
//! Each module corresponds to a section in `bezel.toml`:
//!
//! | Module    | TOML Section | Purpose                             |
//! |-----------|--------------|-------------------------------------|
//! | `site`    | `[site]`     | Site metadata (title, url, ...)     |
//! | `build`   | `[build]`    | Build paths and sitemap             |
//! | `serve`   | `[serve]`    | Development server                  |
//! | `catalog` | `[catalog]`  | Catalog root and card copy          |

mod build;
mod catalog;
mod serve;
mod site;

pub use build::{BuildSectionConfig, SitemapConfig};
pub use catalog::CatalogConfig;
pub use serve::ServeConfig;
pub use site::SiteInfoConfig;
