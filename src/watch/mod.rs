//! Watch mode: debounced filesystem events feeding full rebuilds.
//!
//! Pipeline:
//! ```text
//! notify → Debouncer (pure timing) → content-hash gate → rebuild
//! ```
//!
//! The watcher starts before the initial build finishes and buffers
//! events in the channel meanwhile, so changes made during the first
//! build are never lost.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use crossbeam::channel::{self, Receiver};
use notify::{RecursiveMode, Watcher};
use rustc_hash::FxHashMap;

use crate::config::{cfg, reload_config};
use crate::freshness::{ContentHash, compute_dir_hash};
use crate::logger::{status_error, status_success, status_unchanged};
use crate::utils::path::normalize_path;
use crate::utils::plural::plural_s;
use crate::{debug, log};

/// Debounce configuration
const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

/// Check if path is a temp/backup file (editor artifacts)
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// Run the watch loop until the shutdown channel fires.
pub fn run_watcher(shutdown: Receiver<()>) -> Result<()> {
    let config = cfg();

    let (tx, events) = channel::unbounded();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = tx.send(res);
    })?;

    if config.build.content.exists() {
        watcher.watch(&config.build.content, RecursiveMode::Recursive)?;
    }
    if config.config_path.exists() {
        watcher.watch(&config.config_path, RecursiveMode::NonRecursive)?;
    }

    log!("watch"; "watching {}", config.build.content.display());

    let mut debouncer = Debouncer::new();
    let mut content_hash = compute_dir_hash(&config.build.content);

    loop {
        channel::select! {
            recv(shutdown) -> _ => break,
            recv(events) -> msg => match msg {
                Ok(Ok(event)) => debouncer.add_event(&event),
                Ok(Err(e)) => log!("watch"; "notify error: {e}"),
                Err(_) => break,
            },
            default(debouncer.sleep_duration()) => {
                handle_changes(&mut debouncer, &mut content_hash);
            }
        }
    }

    Ok(())
}

/// Process debounced file changes: reload config if it changed, then
/// rebuild unless the content tree hashes identical to the last build.
fn handle_changes(debouncer: &mut Debouncer, content_hash: &mut ContentHash) {
    // Preserve buffered events until the initial build finishes
    if !crate::core::is_serving() {
        return;
    }

    let Some(changes) = debouncer.take_if_ready() else {
        return;
    };

    for (path, kind) in &changes {
        debug!("watch"; "{}: {}", kind.label(), path.display());
    }

    let config = cfg();
    let config_changed = changes.keys().any(|p| *p == config.config_path);

    if config_changed {
        match reload_config() {
            Ok(true) => log!("watch"; "config reloaded"),
            Ok(false) => {}
            Err(e) => {
                status_error("config reload failed", &format!("{e:#}"));
                return;
            }
        }
    }

    let new_hash = compute_dir_hash(&cfg().build.content);
    if !config_changed && new_hash == *content_hash && crate::core::is_healthy() {
        status_unchanged("no content changes");
        return;
    }
    *content_hash = new_hash;

    match crate::cli::build::build_site(&cfg(), true) {
        Ok(stats) => {
            crate::core::set_healthy(true);
            status_success(&format!(
                "rebuilt {} page{}, {} asset{}",
                stats.pages,
                plural_s(stats.pages),
                stats.assets,
                plural_s(stats.assets)
            ));
        }
        Err(e) => {
            crate::core::set_healthy(false);
            status_error("rebuild failed", &format!("{e:#}"));
        }
    }
}

// =============================================================================
// Change types
// =============================================================================

/// What happened to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeKind {
    Created,
    Modified,
    Removed,
}

impl ChangeKind {
    fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
            Self::Removed => "removed",
        }
    }
}

// =============================================================================
// Debouncer - Pure timing and event deduplication
// =============================================================================

/// Pure debouncer: only handles timing and event deduplication.
/// No business logic, no global state access.
struct Debouncer {
    /// Path → ChangeKind (dedup is free via HashMap key uniqueness)
    changes: FxHashMap<PathBuf, ChangeKind>,
    last_event: Option<std::time::Instant>,
    last_rebuild: Option<std::time::Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            changes: FxHashMap::default(),
            last_event: None,
            last_rebuild: None,
        }
    }

    /// Add a notify event, applying dedup rules:
    /// - Remove + Create/Modify → Create/Modify (file was restored)
    /// - Create/Modify + Remove → Remove (file was deleted)
    /// - Same type events: first event wins
    fn add_event(&mut self, event: &notify::Event) {
        use notify::EventKind;

        let kind = match event.kind {
            EventKind::Create(_) => ChangeKind::Created,
            EventKind::Remove(_) => ChangeKind::Removed,
            EventKind::Modify(modify) => {
                // Metadata-only changes (mtime/atime/chmod noise) can
                // trigger endless rebuild loops
                if matches!(modify, notify::event::ModifyKind::Metadata(_)) {
                    return;
                }
                ChangeKind::Modified
            }
            _ => return,
        };

        for path in &event.paths {
            if is_temp_file(path) {
                continue;
            }

            let path = normalize_path(path);

            if let Some(&existing) = self.changes.get(&path) {
                // State transitions:
                // - Removed -> Created/Modified: restored, use new event
                // - Modified -> Removed: deleted, upgrade to Removed
                // - Created -> Removed: appeared then vanished, discard (no-op)
                // - otherwise: first event wins
                match (existing, kind) {
                    (ChangeKind::Removed, ChangeKind::Created | ChangeKind::Modified) => {
                        self.changes.insert(path, kind);
                    }
                    (ChangeKind::Modified, ChangeKind::Removed) => {
                        self.changes.insert(path, ChangeKind::Removed);
                    }
                    (ChangeKind::Created, ChangeKind::Removed) => {
                        self.changes.remove(&path);
                    }
                    _ => continue,
                }
                self.last_event = Some(std::time::Instant::now());
                continue;
            }

            self.changes.insert(path, kind);
            self.last_event = Some(std::time::Instant::now());
        }
    }

    /// Take accumulated events if debounce + cooldown elapsed.
    fn take_if_ready(&mut self) -> Option<FxHashMap<PathBuf, ChangeKind>> {
        if !self.is_ready() {
            return None;
        }

        let changes = std::mem::take(&mut self.changes);
        self.last_event = None;

        if changes.is_empty() {
            return None;
        }

        self.last_rebuild = Some(std::time::Instant::now());
        Some(changes)
    }

    fn is_ready(&self) -> bool {
        let Some(last_event) = self.last_event else {
            return false;
        };

        if last_event.elapsed() < Duration::from_millis(DEBOUNCE_MS) {
            return false;
        }

        if let Some(last_rebuild) = self.last_rebuild
            && last_rebuild.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS)
        {
            return false;
        }

        !self.changes.is_empty()
    }

    /// Precise sleep duration until next possible ready time.
    fn sleep_duration(&self) -> Duration {
        let Some(last_event) = self.last_event else {
            return Duration::from_secs(86400);
        };

        let debounce_remaining =
            Duration::from_millis(DEBOUNCE_MS).saturating_sub(last_event.elapsed());

        let cooldown_remaining = self
            .last_rebuild
            .map(|t| Duration::from_millis(REBUILD_COOLDOWN_MS).saturating_sub(t.elapsed()))
            .unwrap_or(Duration::ZERO);

        debounce_remaining
            .max(cooldown_remaining)
            .max(Duration::from_millis(1))
    }
}
