//! HTTP protocol layer module
//!
//! Response building and Content-Type selection, decoupled from the request
//! dispatch logic in `handler`.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_405_response, build_asset_response};
