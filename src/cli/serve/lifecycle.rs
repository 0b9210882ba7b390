//! Server lifecycle management.

use crate::{config::cfg, core::register_server, log};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tiny_http::Server;

use super::response::handle_request;

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Number of worker threads handling requests.
const REQUEST_WORKERS: usize = 4;

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
}

/// Bind the HTTP server without starting the request loop
///
/// This allows the caller to start background tasks (like the initial
/// build) before entering the request loop, while still being able to
/// respond to early requests with the loading page.
pub fn bind_server() -> Result<BoundServer> {
    let config = cfg();
    let (server, addr) = bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);

    Ok(BoundServer { server, addr })
}

/// Bind to the specified interface and port, with automatic port retry.
fn bind_with_retry(interface: std::net::IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    let mut last_err = None;
    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_err = Some(e),
        }
    }
    Err(anyhow::anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        MAX_PORT_RETRIES,
        base_port,
        base_port.saturating_add(MAX_PORT_RETRIES - 1),
        last_err.map(|e| e.to_string()).unwrap_or_default()
    ))
}

impl BoundServer {
    /// Get the bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the request loop (blocking).
    ///
    /// Requests are dispatched onto a small thread pool so a slow disk
    /// read cannot stall the accept loop. Returns after `unblock()` is
    /// called by the shutdown handler.
    pub fn run(self) -> Result<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(REQUEST_WORKERS)
            .build()?;

        pool.in_place_scope(|scope| {
            for request in self.server.incoming_requests() {
                if crate::core::is_shutdown() {
                    // Answer the in-flight request, then stop accepting.
                    if let Err(e) = handle_request(request) {
                        log!("serve"; "request error: {e}");
                    }
                    break;
                }
                scope.spawn(move |_| {
                    if let Err(e) = handle_request(request) {
                        log!("serve"; "request error: {e}");
                    }
                });
            }
        });
        Ok(())
    }
}
