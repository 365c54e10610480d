//! Asset registry module
//!
//! Builds the immutable pattern -> file table the server dispatches on.
//! Everything here runs once at startup; after `build` returns the registry
//! is read-only and shared across connections without locking.

use std::collections::HashMap;

use hyper::body::Bytes;

use super::route;
use super::source::AssetSource;
use crate::error::StartupError;

/// One bundled asset, fully loaded and routed.
#[derive(Debug, Clone)]
pub struct ServableFile {
    /// Original path within the bundled tree.
    pub path: String,
    /// Extension of the final segment, leading dot included ("" if none).
    pub extension: String,
    /// Final path segment, extension included.
    pub base: String,
    /// `base` with the extension stripped.
    pub name: String,
    /// URL pattern the file is served under.
    pub pattern: String,
    /// Full file contents, loaded once at startup.
    pub content: Bytes,
}

/// Immutable collection of servable files keyed by URL pattern.
#[derive(Debug)]
pub struct AssetRegistry {
    // Enumeration order is kept for deterministic route logging; the map
    // indexes into it for request dispatch.
    files: Vec<ServableFile>,
    by_pattern: HashMap<String, usize>,
}

impl AssetRegistry {
    /// Enumerate the source, load every file, derive its route, and reject
    /// duplicate patterns.
    ///
    /// Any failure aborts startup: a traversal error, a single unreadable
    /// file (identified by path), or two files deriving the same pattern.
    pub fn build(source: &dyn AssetSource) -> Result<Self, StartupError> {
        let paths = source.enumerate().map_err(StartupError::Enumerate)?;

        let mut files = Vec::with_capacity(paths.len());
        let mut by_pattern = HashMap::with_capacity(paths.len());

        for path in paths {
            let content = source.read(&path).map_err(|source| StartupError::ReadContent {
                path: path.clone(),
                source,
            })?;

            let meta = route::derive(&path);
            if let Some(&existing) = by_pattern.get(&meta.pattern) {
                let first: &ServableFile = &files[existing];
                return Err(StartupError::DuplicatePattern {
                    pattern: meta.pattern,
                    first: first.path.clone(),
                    second: path,
                });
            }

            by_pattern.insert(meta.pattern.clone(), files.len());
            files.push(ServableFile {
                path,
                extension: meta.extension,
                base: meta.base,
                name: meta.name,
                pattern: meta.pattern,
                content,
            });
        }

        Ok(Self { files, by_pattern })
    }

    /// Look up the file registered under a URL pattern.
    #[must_use]
    pub fn lookup(&self, pattern: &str) -> Option<&ServableFile> {
        self.by_pattern.get(pattern).map(|&idx| &self.files[idx])
    }

    /// Iterate files in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &ServableFile> {
        self.files.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
