//! Proc macros for bezel.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata configuration.
//! pub struct SiteInfoConfig {
//!     /// Site title displayed in browser tab.
//!     pub title: String,
//!
//!     /// Language code (BCP 47).
//!     #[config(default = "en")]
//!     pub language: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteInfoConfig::template() -> TOML string with comments
//! // - SiteInfoConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS (internal use)
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc = "x")]` - Short comment on the same line
//! - `#[config(sub)]` - Nested Config section, rendered with its own header
//! - `#[config(status = experimental)]` - Commented out in the template,
//!   reported when set
//! - `#[config(status = hidden)]` - Omitted from the template
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteInfoConfig` → `site_info`
//! - `CatalogConfig` → `catalog`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
