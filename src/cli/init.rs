//! Site initialization: new project skeleton plus default configuration.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{SiteConfig, generate_config_template};
use crate::log;

/// Default config filename
const CONFIG_FILE: &str = "bezel.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
enum InitMode {
    /// `bezel init` - initialize in current directory (must be empty)
    CurrentDir,
    /// `bezel init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Create a new site skeleton.
///
/// # Steps
/// 1. Validate target directory
/// 2. Create the content tree with a seed catalog
/// 3. Write bezel.toml and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_site(config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate_target(root, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    create_content_seed(root, &config.catalog.root)?;
    write_config(root)?;

    let output_dir = config.root_relative(&config.build.output);
    write_ignore_files(root, &output_dir)?;

    log!("init"; "Site initialized successfully");
    Ok(())
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: directory must be empty (or not exist)
/// - `NewDir`: directory must not exist
fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if !is_empty(root)? {
                bail!(
                    "Current directory is not empty.\n\
                     Use `bezel init <name>` to create in a new subdirectory."
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}

/// Create `content/<root>/` with a seed unit and one starter topic so the
/// first build already shows a catalog card.
fn create_content_seed(root: &Path, catalog_root: &str) -> Result<()> {
    let catalog_dir = root.join("content").join(catalog_root);
    let topic_dir = catalog_dir.join("1. Getting Started");
    fs::create_dir_all(&topic_dir)
        .with_context(|| format!("Failed to create directory '{}'", topic_dir.display()))?;

    fs::write(
        catalog_dir.join("index.md"),
        format!("# {catalog_root}\n\nThis directory is the catalog root. Every subdirectory\nwith an `index.md` becomes a topic.\n"),
    )?;
    fs::write(
        topic_dir.join("index.md"),
        "+++\ndescription = \"Replace this topic with your own material.\"\n+++\n# Getting Started\n\nEdit this file, then run `bezel serve` to browse the catalog.\n",
    )?;

    Ok(())
}

/// Write default bezel.toml configuration
fn write_config(root: &Path) -> Result<()> {
    let mut content = format!(
        "# Bezel configuration file (v{})\n# https://github.com/bezel-rs/bezel\n\n",
        env!("CARGO_PKG_VERSION")
    );
    content.push_str(&generate_config_template());

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_non_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file.txt"), "content").unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::NewDir).is_err());
    }

    #[test]
    fn test_non_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        let new_path = temp.path().join("new_site");
        assert!(validate_target(&new_path, InitMode::NewDir).is_ok());
    }

    #[test]
    fn test_content_seed_layout() {
        let temp = TempDir::new().unwrap();
        create_content_seed(temp.path(), "DSA").unwrap();

        assert!(temp.path().join("content/DSA/index.md").is_file());
        assert!(
            temp.path()
                .join("content/DSA/1. Getting Started/index.md")
                .is_file()
        );
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[catalog]"));
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path(), Path::new("dist")).unwrap();

        let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(content.contains("/dist"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path(), Path::new("dist")).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
