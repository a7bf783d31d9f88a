mod docs;
mod page;
mod routes;
mod screens;

use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use anyhow::Context;
use blueprint_model::{Blueprint, ViewState, parse_blueprint, support_blueprint};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::routes::{AppState, Response, parse_request_line, route, status_line};

/// Serve the interactive blueprint, its documentation, and the design board.
#[derive(Debug, Parser)]
#[command(name = "blueprint-preview", version)]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "BLUEPRINT_PREVIEW_HOST", default_value = "127.0.0.1:7878")]
    host: String,

    /// TOML blueprint definition; the built-in support flow when omitted.
    #[arg(long)]
    definition: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let blueprint = load_blueprint(cli.definition)?;
    let state = Arc::new(Mutex::new(AppState {
        view: ViewState::default(),
        blueprint,
    }));

    let listener = TcpListener::bind(&cli.host)
        .with_context(|| format!("failed to bind preview server on {}", cli.host))?;
    info!("preview server running on http://{}", cli.host);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let state = Arc::clone(&state);
                thread::spawn(move || handle_connection(stream, state));
            }
            Err(err) => warn!(%err, "connection failed"),
        }
    }
    Ok(())
}

fn load_blueprint(path: Option<PathBuf>) -> anyhow::Result<Blueprint> {
    let Some(path) = path else {
        return Ok(support_blueprint());
    };
    let input =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_blueprint(&input).with_context(|| format!("invalid blueprint {}", path.display()))
}

fn handle_connection(mut stream: TcpStream, state: Arc<Mutex<AppState>>) {
    let mut buffer = [0u8; 8192];
    let read = match stream.read(&mut buffer) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buffer[..read]);
    let response = match parse_request_line(&request) {
        Some((method, path)) => {
            let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
            let response = route(method, path, &mut guard);
            info!(method, path, status = response.status, "request");
            response
        }
        None => Response::text(400, "Bad Request"),
    };

    if let Err(err) = respond(&mut stream, &response) {
        warn!(%err, "failed to write response");
    }
}

fn respond(stream: &mut TcpStream, response: &Response) -> std::io::Result<()> {
    let mut headers = format!(
        "{}\r\nContent-Length: {}\r\nContent-Type: {}\r\nCache-Control: no-store\r\nConnection: close\r\n",
        status_line(response.status),
        response.body.len(),
        response.content_type
    );
    if let Some(location) = &response.location {
        headers.push_str(&format!("Location: {location}\r\n"));
    }
    headers.push_str("\r\n");
    stream.write_all(headers.as_bytes())?;
    stream.write_all(&response.body)?;
    Ok(())
}
