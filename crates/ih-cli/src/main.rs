#![forbid(unsafe_code)]

//! iconhue dev server.
//!
//! # Commands
//!
//! - `serve`: Serve the browser gallery page and its wasm package over HTTP

use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tiny_http::{Header, Response, Server};
use tracing::{debug, info};

/// iconhue dev server - serve the browser gallery.
#[derive(Debug, Parser)]
#[command(
    name = "ih-cli",
    version,
    about = "iconhue dev server - serve the browser gallery",
    long_about = "Serves web/index.html and the wasm-pack pkg/ output so the\n\
        hue-preserving icon gallery can be opened in a browser."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (can be repeated for more detail: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the gallery page and the wasm package.
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory holding `web/` and the wasm-pack `pkg/` output
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Serve { port, host, root } => cmd_serve(&host, port, &root),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

// =============================================================================
// Command: serve
// =============================================================================

fn cmd_serve(host: &str, port: u16, root: &Path) -> Result<()> {
    let index = root.join("web").join("index.html");
    if !index.is_file() {
        bail!("No gallery page at {}", index.display());
    }

    let addr = format!("{host}:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;

    info!(%addr, root = %root.display(), "serving gallery");
    println!("iconhue gallery running at: http://{addr}");
    println!("Press Ctrl+C to stop");

    for request in server.incoming_requests() {
        let url_path = request.url().split('?').next().unwrap_or("/").to_string();

        let resolved = resolve_static_path(root, &url_path);
        debug!(path = %url_path, found = resolved.is_some(), "request");
        let response = match resolved {
            Some(path) => serve_file(&path),
            None => Response::from_string("Not Found").with_status_code(404),
        };

        let _ = request.respond(response);
    }

    Ok(())
}

/// Map a request path onto `web/` (page assets) or `pkg/` (wasm output).
fn resolve_static_path(root: &Path, url_path: &str) -> Option<PathBuf> {
    let relative = url_path.trim_start_matches('/');
    if relative.split('/').any(|segment| segment == "..") {
        return None;
    }
    let path = if relative.is_empty() {
        root.join("web").join("index.html")
    } else if relative.starts_with("pkg/") {
        root.join(relative)
    } else {
        root.join("web").join(relative)
    };
    path.is_file().then_some(path)
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript",
        Some("wasm") => "application/wasm",
        Some("svg") => "image/svg+xml",
        Some("css") => "text/css",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

fn serve_file(path: &Path) -> Response<Cursor<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => {
            let response = Response::from_data(bytes);
            match Header::from_bytes(&b"Content-Type"[..], content_type(path).as_bytes()) {
                Ok(header) => response.with_header(header),
                Err(()) => response,
            }
        }
        Err(e) => Response::from_string(format!("Failed to read file: {e}")).with_status_code(500),
    }
}
