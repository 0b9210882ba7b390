//! HTML rendering: route targets in, complete pages out.

pub mod markdown;
mod page;

pub use page::{
    render_catalog, render_content, render_desktop, render_landing, render_not_found,
};
