//! Startup error types
//!
//! Every failure mode of this server happens before the listener accepts its
//! first connection; once the registry is built, serving touches no fallible
//! I/O. The variants below cover the full taxonomy.

use std::net::SocketAddr;
use thiserror::Error;

/// Fatal errors raised while the server is booting.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The bundled file tree could not be traversed.
    #[error("failed to enumerate bundled files: {0}")]
    Enumerate(#[source] std::io::Error),

    /// A single bundled file could not be read into memory.
    #[error("failed to read bundled file '{path}': {source}")]
    ReadContent {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Two bundled files derived the same URL pattern.
    ///
    /// Last-registration-wins would silently shadow one of the files, so the
    /// registry refuses to start instead.
    #[error("route pattern '{pattern}' derived from both '{first}' and '{second}'")]
    DuplicatePattern {
        pattern: String,
        first: String,
        second: String,
    },

    /// The listening socket could not be created or bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
