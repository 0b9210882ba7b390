//! Embedded static resources for Bezel.
//!
//! All page chrome ships inside the binary: the page shell, the landing
//! and desktop entry pages, the not-found page, the dev-server loading
//! and welcome pages, and the stylesheet. Content fills the shell's
//! `__BODY__` slot at build time.

mod template;

pub use template::{Template, TemplateVars};

use std::fs;
use std::path::Path;

use anyhow::Result;

/// URL of the embedded stylesheet, referenced by every template.
pub const STYLESHEET_HREF: &str = "/bezel.css";

/// Embedded stylesheet content.
const STYLESHEET: &str = include_str!("templates/bezel.css");

/// Variables for the page shell (catalog and content pages).
pub struct ShellVars<'a> {
    pub title: &'a str,
    pub badge: &'a str,
    pub heading: &'a str,
    pub intro: &'a str,
    pub back_href: &'a str,
    pub back_label: &'a str,
    pub body: &'a str,
}

impl TemplateVars for ShellVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__TITLE__", self.title)
            .replace("__BADGE__", self.badge)
            .replace("__HEADING__", self.heading)
            .replace("__INTRO__", self.intro)
            .replace("__BACK_HREF__", self.back_href)
            .replace("__BACK_LABEL__", self.back_label)
            .replace("__BODY__", self.body)
    }
}

/// Page shell template.
pub const SHELL: Template<ShellVars<'static>> =
    Template::new(include_str!("templates/shell.html"));

/// Variables for the landing page.
pub struct LandingVars<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub catalog_href: &'a str,
    pub desktop_href: &'a str,
}

impl TemplateVars for LandingVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__TITLE__", self.title)
            .replace("__DESCRIPTION__", self.description)
            .replace("__CATALOG_HREF__", self.catalog_href)
            .replace("__DESKTOP_HREF__", self.desktop_href)
    }
}

/// Landing page template.
pub const LANDING: Template<LandingVars<'static>> =
    Template::new(include_str!("templates/landing.html"));

/// Variables for the desktop-shell entry page.
pub struct DesktopVars<'a> {
    pub title: &'a str,
    pub catalog_href: &'a str,
}

impl TemplateVars for DesktopVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__TITLE__", self.title)
            .replace("__CATALOG_HREF__", self.catalog_href)
    }
}

/// Desktop-shell entry page template.
pub const DESKTOP: Template<DesktopVars<'static>> =
    Template::new(include_str!("templates/desktop.html"));

/// Variables for the not-found page.
pub struct NotFoundVars<'a> {
    pub title: &'a str,
    pub catalog_href: &'a str,
}

impl TemplateVars for NotFoundVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__TITLE__", self.title)
            .replace("__CATALOG_HREF__", self.catalog_href)
    }
}

/// Not-found page template.
pub const NOT_FOUND: Template<NotFoundVars<'static>> =
    Template::new(include_str!("templates/not_found.html"));

/// Loading page shown by the dev server while the first build runs.
pub const LOADING_PAGE: &str = include_str!("templates/loading.html");

/// Variables for the dev-server welcome page.
pub struct WelcomeVars<'a> {
    pub version: &'a str,
}

impl TemplateVars for WelcomeVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__VERSION__", self.version)
    }
}

/// Welcome page shown when the content directory is empty.
pub const WELCOME: Template<WelcomeVars<'static>> =
    Template::new(include_str!("templates/welcome.html"));

/// Write embedded assets (the stylesheet) into the output directory.
pub fn write_embedded_assets(out_dir: &Path) -> Result<()> {
    let target = out_dir.join(STYLESHEET_HREF.trim_start_matches('/'));
    fs::write(&target, STYLESHEET)?;
    Ok(())
}
