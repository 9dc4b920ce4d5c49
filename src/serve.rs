//! Development server: view-models as JSON over HTTP.
//!
//! Built on `tiny_http`. Every `GET` path goes through the same pipeline the
//! CLI uses, so the server is a thin transport around `resolve` + `assemble`.
//!
//! ```text
//! GET /category/tech-ai%2F?ref=nav
//!      │ drop query string, percent-decode
//!      ▼
//! "/category/tech-ai/" ── resolve ──► Route ── assemble ──► ViewModel
//!                                                              │
//!                              200 (page) / 404 (notFound) ◄── JSON
//! ```
//!
//! Requests are handled sequentially on the main thread. Ctrl+C unblocks the
//! accept loop and the server returns.

use crate::{
    config::cfg,
    content::ContentStore,
    log,
    logger::status,
    query::Query,
    route::resolve,
    view::{AssembleOptions, Assembler},
};
use anyhow::{Context, Result, anyhow};
use std::{net::SocketAddr, sync::Arc};
use tiny_http::{Header, Method, Request, Response, Server};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

// ============================================================================
// Server Entry Point
// ============================================================================

/// Serve `store` until Ctrl+C is received.
pub fn serve_site(store: &ContentStore) -> Result<()> {
    let c = cfg();
    let interface: std::net::IpAddr = c
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid [serve.interface] `{}`", c.serve.interface))?;

    let (server, addr) = try_bind_port(interface, c.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    let assembler = Assembler::new(Query::new(store), AssembleOptions::from(&c.content));
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &assembler) {
            log!("error"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(
    interface: std::net::IpAddr,
    base_port: u16,
    max_retries: u16,
) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_error.map_or_else(|| "no attempts made".to_owned(), |e| e.to_string())
    ))
}

// ============================================================================
// Request Handling
// ============================================================================

/// Handle a single HTTP request.
fn handle_request(request: Request, assembler: &Assembler<'_>) -> Result<()> {
    if *request.method() != Method::Get {
        let body = serde_json::json!({ "error": "method not allowed" }).to_string();
        log!("serve"; "{} {} {}", status(405), request.method(), request.url());
        return respond_json(request, 405, body);
    }

    let (code, body) = render(request.url(), assembler)?;
    log!("serve"; "{} {}", status(code), request.url());
    respond_json(request, code, body)
}

/// Render the JSON view-model for a raw request URL.
///
/// Returns the HTTP status code along with the body: `404` when the view is
/// not found, `200` otherwise.
fn render(url: &str, assembler: &Assembler<'_>) -> Result<(u16, String)> {
    // Strip query string (e.g., ?ref=nav) first, so encoded `%3F` stays in the path
    let raw_path = url.split('?').next().unwrap_or(url);

    // Decode URL-encoded characters (e.g., %20 → space)
    let path = urlencoding::decode(raw_path)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| raw_path.to_owned());

    let view = assembler.assemble(&resolve(&path));
    let code = if view.is_not_found() { 404 } else { 200 };
    let body = serde_json::to_string(&view).context("Failed to serialize view-model")?;

    Ok((code, body))
}

// ============================================================================
// Response Helpers
// ============================================================================

fn respond_json(request: Request, code: u16, body: String) -> Result<()> {
    let header = Header::from_bytes("Content-Type", JSON_CONTENT_TYPE)
        .map_err(|()| anyhow!("invalid Content-Type header"))?;

    let response = Response::from_string(body)
        .with_status_code(code)
        .with_header(header);

    request.respond(response)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
