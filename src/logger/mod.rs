//! Logger module
//!
//! Logging for the server: startup banner, one line per registered route,
//! access logging in configurable formats, and error/warning output.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config, route_count: usize) {
    println!("======================================");
    println!("Static site server started successfully");
    println!("Listening on: http://{addr}");
    println!("Registered routes: {route_count}");
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

/// One line per derived route, logged before the listener binds.
pub fn log_route_registered(pattern: &str, source_path: &str) {
    println!("[Route] GET {pattern} <- {source_path}");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[Error] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[Warn] {message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}
