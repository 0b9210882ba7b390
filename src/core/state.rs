//! Process-wide serve state and shutdown wiring.
//!
//! The dev server binds before the first build finishes, so request
//! handling consults these flags instead of blocking on the pipeline:
//! - `SERVING`: the initial build has produced an output directory
//! - `HEALTHY`: the most recent build succeeded (stale output is still served)
//! - `SHUTDOWN`: Ctrl+C was received, reject new work

use std::sync::{
    Arc, OnceLock,
    atomic::{AtomicBool, Ordering},
};

use anyhow::Result;
use crossbeam::channel::{Receiver, Sender, bounded};
use tiny_http::Server;

static SERVING: AtomicBool = AtomicBool::new(false);
static HEALTHY: AtomicBool = AtomicBool::new(true);
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Running server handle, registered so the Ctrl+C handler can unblock
/// its accept loop.
static SERVER: OnceLock<Arc<Server>> = OnceLock::new();

static SHUTDOWN_CHANNEL: OnceLock<(Sender<()>, Receiver<()>)> = OnceLock::new();

fn shutdown_channel() -> &'static (Sender<()>, Receiver<()>) {
    SHUTDOWN_CHANNEL.get_or_init(|| bounded(1))
}

/// Receiver that fires once when shutdown is requested.
pub fn shutdown_signal() -> Receiver<()> {
    shutdown_channel().1.clone()
}

pub fn is_serving() -> bool {
    SERVING.load(Ordering::SeqCst)
}

pub fn set_serving() {
    SERVING.store(true, Ordering::SeqCst);
}

pub fn is_healthy() -> bool {
    HEALTHY.load(Ordering::SeqCst)
}

pub fn set_healthy(healthy: bool) {
    HEALTHY.store(healthy, Ordering::SeqCst);
}

pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::SeqCst)
}

pub fn register_server(server: Arc<Server>) {
    let _ = SERVER.set(server);
}

/// Install the global Ctrl+C handler. Must run before any blocking loop.
///
/// First Ctrl+C requests a graceful stop; a second one exits immediately.
pub fn setup_shutdown_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        if SHUTDOWN.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
        let _ = shutdown_channel().0.try_send(());
        match SERVER.get() {
            Some(server) => server.unblock(),
            None => std::process::exit(0),
        }
    })?;
    Ok(())
}
