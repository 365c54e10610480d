//! Bundled asset pipeline
//!
//! Enumerates the embedded file tree, loads every file into memory, derives
//! each file's URL pattern, and exposes the result as an immutable registry.

pub mod registry;
pub mod route;
pub mod source;

// Re-export the startup surface
pub use registry::{AssetRegistry, ServableFile};
pub use source::{AssetSource, EmbeddedAssets};
