//! Bezel - a static site generator for hierarchical topic catalogs.

#![allow(dead_code)]

mod catalog;
mod cli;
mod config;
mod content;
mod core;
mod embed;
mod freshness;
mod generator;
mod logger;
mod render;
mod utils;
mod watch;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::{SiteConfig, clear_clean_flag, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Build { .. } => build_site(&config, false).map(|_| ()),
        Commands::Serve { .. } => serve(),
        Commands::Routes(args) => cli::routes::run(args, &config),
    }
}

// =============================================================================
// Serve Command
// =============================================================================

/// Start the dev server: bind first, build in the background, then watch.
fn serve() -> Result<()> {
    use crate::core::{set_healthy, set_serving, shutdown_signal};

    // Bind HTTP server first so early requests get the loading page
    // instead of a connection error.
    let bound_server = cli::serve::bind_server()?;

    // Initial build in the background.
    std::thread::spawn(|| {
        let config = config::cfg();
        let build_success = match build_site(&config, false) {
            Ok(_) => true,
            Err(e) => {
                log!("build"; "initial build failed: {e:#}");
                false
            }
        };

        // Track whether initial build succeeded (for retry on file change)
        set_healthy(build_success);

        // Only clear clean flag after successful build
        // This ensures retry will still clean output directory
        if build_success {
            clear_clean_flag();
        }

        // Serve whatever is in the output directory from here on
        set_serving();
    });

    if config::cfg().serve.watch {
        std::thread::spawn(|| {
            if let Err(e) = watch::run_watcher(shutdown_signal()) {
                log!("watch"; "watcher failed: {e:#}");
            }
        });
    }

    bound_server.run()
}
