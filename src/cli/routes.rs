//! Routes command: print the derived route table as JSON.
//!
//! Useful for inspecting what the catalog derivation produced without
//! building the site, and for piping into other tooling.

use anyhow::{Context, Result};
use std::fs;

use crate::catalog::{EntryTree, build_route_table};
use crate::cli::args::RoutesArgs;
use crate::config::SiteConfig;
use crate::content::scan_content;
use crate::log;
use crate::utils::plural::plural_s;

/// Execute routes command
pub fn run(args: &RoutesArgs, config: &SiteConfig) -> Result<()> {
    let set = scan_content(config)?;
    let tree = EntryTree::build(&set, &config.catalog.root);
    let table = build_route_table(&tree, &set, config);

    let json = if args.pretty {
        serde_json::to_string_pretty(&table)?
    } else {
        serde_json::to_string(&table)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("routes";
                "{} route{} written to {}",
                table.len(), plural_s(table.len()), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
