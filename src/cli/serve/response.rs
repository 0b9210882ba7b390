//! HTTP response handlers.

use crate::config::cfg;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use super::path::resolve_path;

/// Dispatch a single request against the current server state.
pub fn handle_request(request: Request) -> Result<()> {
    if crate::core::is_shutdown() {
        return respond_unavailable(request);
    }

    if !crate::core::is_serving() {
        return respond_loading(request);
    }

    let config = cfg();

    if crate::content::is_content_empty(&config) {
        return respond_welcome(request);
    }

    match resolve_path(request.url(), &config.build.output) {
        Some(path) => respond_file(request, &path),
        None => respond_not_found(request),
    }
}

/// Respond with a static file from the output directory.
fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = crate::utils::mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Respond with 404 page (the built one when present).
fn respond_not_found(request: Request) -> Result<()> {
    use crate::utils::mime::types::{HTML, PLAIN};

    let custom_404 = cfg().build.output.join("404.html");
    let has_custom = custom_404.is_file();

    if is_head_request(&request) {
        let mime = if has_custom { HTML } else { PLAIN };
        return send_head(request, 404, mime);
    }

    if has_custom
        && let Ok(body) = fs::read(&custom_404)
    {
        return send_body(request, 404, HTML, body);
    }

    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with the loading page (first build not finished yet).
fn respond_loading(request: Request) -> Result<()> {
    send_html(request, crate::embed::LOADING_PAGE.to_string())
}

/// Respond with 503 Service Unavailable (server shutting down).
fn respond_unavailable(request: Request) -> Result<()> {
    use crate::utils::mime::types::PLAIN;
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

/// Respond with the welcome page (empty content directory).
///
/// Includes a polling script that reloads once content appears.
/// HEAD requests answer without X-Bezel-Ready so the poll keeps waiting.
fn respond_welcome(request: Request) -> Result<()> {
    use crate::embed::{WELCOME, WelcomeVars};
    use crate::utils::mime::types::HTML;

    if is_head_request(&request) {
        let response =
            Response::empty(StatusCode(200)).with_header(make_header("Content-Type", HTML));
        return request.respond(response).map_err(Into::into);
    }

    let body = WELCOME.render(&WelcomeVars {
        version: env!("CARGO_PKG_VERSION"),
    });

    // Poll with HEAD and reload once the server starts answering ready
    let poll_script = r#"<script>
(function(){
    var url = location.origin + location.pathname + location.search;
    var poll = function() {
        fetch(url, { method: 'HEAD' })
            .then(function(r) {
                if (r.ok && r.headers.get('X-Bezel-Ready') === 'true') location.reload();
            })
            .catch(function() {});
    };
    poll();
    setInterval(poll, 1000);
})();
</script>"#;

    let body = body.replace("</body>", &format!("{poll_script}</body>"));
    send_html(request, body)
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response = Response::empty(StatusCode(status))
        .with_header(make_header("Content-Type", content_type))
        .with_header(make_header("X-Bezel-Ready", "true"));
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type))
        .with_header(make_header("X-Bezel-Ready", "true"));
    request.respond(response)?;
    Ok(())
}

/// Send HTML without X-Bezel-Ready (for loading/welcome pages).
fn send_html(request: Request, body: String) -> Result<()> {
    use crate::utils::mime::types::HTML;
    let response = Response::from_string(body).with_header(make_header("Content-Type", HTML));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
