//! Auxiliary output files derived from the route table.

mod sitemap;

pub use sitemap::write_sitemap;
