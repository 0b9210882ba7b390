//! Full site build: discovery snapshot to output directory.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::catalog::{
    EntryTree, RouteTable, RouteTarget, build_route_table, slugify, strip_ordering_prefix,
};
use crate::config::SiteConfig;
use crate::content::{ContentSet, scan_assets, scan_content};
use crate::generator::write_sitemap;
use crate::logger::ProgressLine;
use crate::render;
use crate::utils::plural::plural_s;
use crate::log;

/// Counts reported after a completed build.
#[derive(Debug, Clone, Copy)]
pub struct BuildStats {
    pub pages: usize,
    pub assets: usize,
}

/// Build the whole site into the output directory.
///
/// `quiet` suppresses the progress line and summary; watch mode uses it
/// so rebuilds collapse into a single status line.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildStats> {
    let start = Instant::now();

    prepare_output(config)?;

    let set = scan_content(config)?;
    let tree = EntryTree::build(&set, &config.catalog.root);
    let table = build_route_table(&tree, &set, config);
    let assets = scan_assets(&config.build.content);

    let stats = BuildStats {
        pages: table.reachable_count(),
        assets: assets.len(),
    };

    let progress = if quiet {
        None
    } else {
        Some(ProgressLine::new(&[
            ("pages", stats.pages),
            ("assets", stats.assets),
        ]))
    };

    let (pages_result, assets_result) = rayon::join(
        || write_pages(&table, &tree, &set, config, progress.as_ref()),
        || copy_assets(&assets, config, progress.as_ref()),
    );
    pages_result?;
    assets_result?;

    write_sitemap(config, &table)?;

    if let Some(progress) = progress {
        progress.finish();
    }
    if !quiet {
        log!("build";
            "{} page{}, {} asset{} in {:.2?}",
            stats.pages, plural_s(stats.pages),
            stats.assets, plural_s(stats.assets),
            start.elapsed());
    }

    Ok(stats)
}

/// Clean (when requested) and recreate the output directory, then drop
/// the embedded stylesheet in.
fn prepare_output(config: &SiteConfig) -> Result<()> {
    let out = &config.build.output;
    if config.build.clean && out.exists() {
        fs::remove_dir_all(out)
            .with_context(|| format!("Failed to clean {}", out.display()))?;
    }
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;
    crate::embed::write_embedded_assets(out)?;
    Ok(())
}

/// Render every reachable route plus the shared 404 page.
fn write_pages(
    table: &RouteTable,
    tree: &EntryTree,
    set: &ContentSet,
    config: &SiteConfig,
    progress: Option<&ProgressLine>,
) -> Result<()> {
    let catalog_href = table.catalog_url().to_encoded();
    let out = &config.build.output;

    table
        .routes()
        .par_iter()
        .enumerate()
        .try_for_each(|(idx, route)| -> Result<()> {
            if crate::core::is_shutdown() || !table.is_reachable(idx) {
                return Ok(());
            }

            let html = match &route.target {
                RouteTarget::Landing => render::render_landing(&config.site, &catalog_href),
                RouteTarget::Shell => render::render_desktop(&config.site, &catalog_href),
                RouteTarget::Catalog(page) => render::render_catalog(page, &config.site),
                RouteTarget::Content { entry, .. } => {
                    let entry = tree.get(*entry);
                    let parent = entry.parent.map(|pid| tree.get(pid));
                    render::render_content(entry, &set.units[entry.unit], parent, &config.site)
                }
                RouteTarget::NotFound => render::render_not_found(&config.site, &catalog_href),
            };

            let path = route.url.index_file(out);
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            if let Some(progress) = progress {
                progress.inc("pages");
            }
            Ok(())
        })?;

    // The dev server and most static hosts look for a top-level 404.html
    let html = render::render_not_found(&config.site, &catalog_href);
    fs::write(out.join("404.html"), html)?;

    Ok(())
}

/// Copy non-markdown files through, renaming every directory segment the
/// way page URLs are built so relative asset links keep working.
fn copy_assets(
    assets: &[std::path::PathBuf],
    config: &SiteConfig,
    progress: Option<&ProgressLine>,
) -> Result<()> {
    assets.par_iter().try_for_each(|source| -> Result<()> {
        if crate::core::is_shutdown() {
            return Ok(());
        }
        let Ok(relative) = source.strip_prefix(&config.build.content) else {
            return Ok(());
        };

        let target = asset_target(relative, &config.build.output);
        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::copy(source, &target)
            .with_context(|| format!("Failed to copy {}", source.display()))?;

        if let Some(progress) = progress {
            progress.inc("assets");
        }
        Ok(())
    })
}

/// Output location for an asset: directories prefix-stripped and
/// slugified, filename kept.
fn asset_target(relative: &Path, out_dir: &Path) -> std::path::PathBuf {
    let mut target = out_dir.to_path_buf();
    let components: Vec<_> = relative.components().collect();
    for (i, component) in components.iter().enumerate() {
        let part = component.as_os_str().to_string_lossy();
        if i + 1 == components.len() {
            target.push(part.as_ref());
        } else {
            target.push(slugify(strip_ordering_prefix(&part)));
        }
    }
    target
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write_unit(root: &Path, rel: &str, contents: &str) {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).expect("create dirs");
        fs::write(dir.join("index.md"), contents).expect("write unit");
    }

    fn config_for(content: &Path, output: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.content = content.to_path_buf();
        config.build.output = output.to_path_buf();
        config.site.title = "Study Hall".into();
        config
    }

    #[test]
    fn test_build_site_end_to_end() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let content = tmp.path().join("content");
        let output = tmp.path().join("dist");
        write_unit(&content, "DSA", "# DSA");
        write_unit(&content, "DSA/2. Core Algorithms", "# core");
        write_unit(&content, "DSA/2. Core Algorithms/Binary Search", "# halve");

        let config = config_for(&content, &output);
        let stats = build_site(&config, true).expect("build");

        // landing, desktop, root catalog, core catalog, binary-search
        assert_eq!(stats.pages, 5);
        assert!(output.join("index.html").is_file());
        assert!(output.join("desktop/index.html").is_file());
        assert!(output.join("dsa/index.html").is_file());
        assert!(output.join("dsa/core-algorithms/index.html").is_file());
        assert!(
            output
                .join("dsa/core-algorithms/binary-search/index.html")
                .is_file()
        );
        assert!(output.join("404.html").is_file());
        assert!(output.join("bezel.css").is_file());

        let catalog = fs::read_to_string(output.join("dsa/index.html")).expect("read");
        assert!(catalog.contains("Choose a topic cluster"));
        let leaf = fs::read_to_string(
            output.join("dsa/core-algorithms/binary-search/index.html"),
        )
        .expect("read");
        assert!(leaf.contains("<h1>halve</h1>"));
    }

    #[test]
    fn test_assets_copied_to_slugified_dirs() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let content = tmp.path().join("content");
        let output = tmp.path().join("dist");
        write_unit(&content, "DSA", "# DSA");
        write_unit(&content, "DSA/2. Core Algorithms", "# core");
        fs::write(
            content.join("DSA/2. Core Algorithms/diagram.svg"),
            "<svg/>",
        )
        .expect("write asset");

        let config = config_for(&content, &output);
        let stats = build_site(&config, true).expect("build");

        assert_eq!(stats.assets, 1);
        assert!(output.join("dsa/core-algorithms/diagram.svg").is_file());
    }

    #[test]
    fn test_clean_removes_stale_output() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let content = tmp.path().join("content");
        let output = tmp.path().join("dist");
        write_unit(&content, "DSA", "# DSA");
        write_unit(&content, "DSA/Trees", "# trees");

        fs::create_dir_all(&output).expect("mkdir");
        fs::write(output.join("stale.html"), "old").expect("write stale");

        let mut config = config_for(&content, &output);
        config.build.clean = true;
        build_site(&config, true).expect("build");

        assert!(!output.join("stale.html").exists());
        assert!(output.join("dsa/index.html").is_file());
    }

    #[test]
    fn test_empty_content_still_builds_fixed_pages() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let content = tmp.path().join("content");
        let output = tmp.path().join("dist");
        fs::create_dir_all(&content).expect("mkdir");

        let config = config_for(&content, &output);
        let stats = build_site(&config, true).expect("build");

        // landing, desktop, root mount (as 404)
        assert_eq!(stats.pages, 3);
        assert!(output.join("index.html").is_file());
        assert!(output.join("dsa/index.html").is_file());
    }

    #[test]
    fn test_asset_target_keeps_filename() {
        let target = asset_target(
            Path::new("DSA/2. Core Algorithms/Fig 1.png"),
            Path::new("dist"),
        );
        assert_eq!(target, Path::new("dist/dsa/core-algorithms/Fig 1.png"));
    }
}
