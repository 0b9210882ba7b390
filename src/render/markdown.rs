//! Markdown to HTML conversion for content bodies.

use pulldown_cmark::{Options, Parser, html};

/// Render a markdown body to an HTML fragment.
pub fn to_html(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(body, options);
    let mut out = String::with_capacity(body.len() * 2);
    html::push_html(&mut out, parser);
    out
}
