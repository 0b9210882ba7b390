//! Full-page rendering on top of the embedded templates.

use crate::catalog::{CatalogPage, Entry};
use crate::config::SiteInfoConfig;
use crate::content::ContentUnit;
use crate::embed::{
    DESKTOP, DesktopVars, LANDING, LandingVars, NOT_FOUND, NotFoundVars, SHELL, ShellVars,
};
use crate::utils::html::{escape, escape_attr};

use super::markdown;

/// Render a synthesized catalog page.
pub fn render_catalog(page: &CatalogPage, site: &SiteInfoConfig) -> String {
    let mut body = String::from("      <nav class=\"card-grid\">\n");
    for card in &page.cards {
        body.push_str(&format!(
            concat!(
                "        <a class=\"card\" href=\"{href}\">\n",
                "          <span class=\"card-badge\">{badge}</span>\n",
                "          <h2>{title}</h2>\n",
                "          <p>{description}</p>\n",
                "          <span class=\"cta\">{cta}</span>\n",
                "        </a>\n"
            ),
            href = escape_attr(&card.target.to_encoded()),
            badge = escape(&card.badge),
            title = escape(&card.title),
            description = escape(&card.description),
            cta = escape(card.cta_label),
        ));
    }
    body.push_str("      </nav>");

    SHELL.render(&ShellVars {
        title: &page_title(&page.heading, site),
        badge: &escape(&page.badge_label),
        heading: &escape(&page.heading),
        intro: &escape(&page.description),
        back_href: &escape_attr(&page.back_link.to_encoded()),
        back_label: &escape(&page.back_label),
        body: &body,
    })
}

/// Render a leaf entry from its markdown body.
pub fn render_content(
    entry: &Entry,
    unit: &ContentUnit,
    parent: Option<&Entry>,
    site: &SiteInfoConfig,
) -> String {
    let heading = unit.meta.title.as_deref().unwrap_or(&entry.title);
    let intro = unit.meta.description.as_deref().unwrap_or_default();

    let badge = match parent {
        Some(p) if !p.title.is_empty() => format!("{} track", p.title).to_uppercase(),
        _ => "TOPIC".to_string(),
    };
    let (back_href, back_label) = match parent {
        Some(p) => (p.url.to_encoded(), format!("Back to {}", p.title)),
        None => ("/".to_string(), "Back to home".to_string()),
    };

    let body = format!(
        "      <article class=\"content\">\n{}\n      </article>",
        markdown::to_html(&unit.body)
    );

    SHELL.render(&ShellVars {
        title: &page_title(heading, site),
        badge: &escape(&badge),
        heading: &escape(heading),
        intro: &escape(intro),
        back_href: &escape_attr(&back_href),
        back_label: &escape(&back_label),
        body: &body,
    })
}

/// Render the landing page.
pub fn render_landing(site: &SiteInfoConfig, catalog_href: &str) -> String {
    LANDING.render(&LandingVars {
        title: &escape(site_title(site)),
        description: &escape(&site.description),
        catalog_href: &escape_attr(catalog_href),
        desktop_href: crate::catalog::DESKTOP_PATH,
    })
}

/// Render the desktop-shell entry page.
pub fn render_desktop(site: &SiteInfoConfig, catalog_href: &str) -> String {
    DESKTOP.render(&DesktopVars {
        title: &escape(site_title(site)),
        catalog_href: &escape_attr(catalog_href),
    })
}

/// Render the not-found page.
pub fn render_not_found(site: &SiteInfoConfig, catalog_href: &str) -> String {
    NOT_FOUND.render(&NotFoundVars {
        title: &escape(site_title(site)),
        catalog_href: &escape_attr(catalog_href),
    })
}

fn site_title(site: &SiteInfoConfig) -> &str {
    if site.title.is_empty() {
        "Bezel"
    } else {
        &site.title
    }
}

fn page_title(heading: &str, site: &SiteInfoConfig) -> String {
    let heading = escape(heading);
    if site.title.is_empty() {
        heading.into_owned()
    } else {
        format!("{} - {}", heading, escape(&site.title))
    }
}

// ============================================================================
// tests
// ============================================================================
