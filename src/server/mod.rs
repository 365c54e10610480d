// Server module entry point
// Listener construction and the accept loop

pub mod conn;
pub mod listener;

// Re-export commonly used items
pub use listener::create_listener;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

/// Accept connections forever, spawning one serving task per connection.
///
/// Startup is already complete by the time this runs: the registry is built
/// and the listener is bound, so nothing here can fail fatally. Accept
/// errors are logged and the loop keeps going.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => conn::accept_connection(stream, peer_addr, &state),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}
