//! Bundled file tree access
//!
//! The registry only needs two operations from the tree: list every file path
//! and read one file's bytes. `AssetSource` captures that seam so the
//! compile-time embedded tree and the in-memory double used in tests share
//! one code path.

use hyper::body::Bytes;
use include_dir::{Dir, DirEntry};
use std::io;

/// Read-only access to a hierarchy of bundled files.
pub trait AssetSource {
    /// List every non-directory entry, at all nesting depths.
    ///
    /// Order is whatever the underlying traversal yields; the source tree
    /// guarantees path uniqueness so no deduplication happens here.
    fn enumerate(&self) -> io::Result<Vec<String>>;

    /// Read the full contents of one file.
    fn read(&self, path: &str) -> io::Result<Bytes>;
}

/// Asset source backed by a tree embedded at compile time via `include_dir!`.
pub struct EmbeddedAssets {
    root: &'static Dir<'static>,
}

impl EmbeddedAssets {
    #[must_use]
    pub const fn new(root: &'static Dir<'static>) -> Self {
        Self { root }
    }
}

impl AssetSource for EmbeddedAssets {
    fn enumerate(&self) -> io::Result<Vec<String>> {
        let mut paths = Vec::new();
        collect_files(self.root, &mut paths);
        Ok(paths)
    }

    fn read(&self, path: &str) -> io::Result<Bytes> {
        self.root.get_file(path).map_or_else(
            || {
                Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no bundled file at '{path}'"),
                ))
            },
            // Embedded contents live in the binary, so the response body can
            // borrow them for the process lifetime without copying.
            |file| Ok(Bytes::from_static(file.contents())),
        )
    }
}

fn collect_files(dir: &Dir<'static>, out: &mut Vec<String>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => collect_files(sub, out),
            DirEntry::File(file) => out.push(file.path().to_string_lossy().into_owned()),
        }
    }
}

/// In-memory asset source for tests.
#[cfg(test)]
pub struct MemoryAssets {
    files: Vec<(String, Bytes)>,
    /// Path whose `read` fails, to exercise the abort-on-read-error path.
    pub poisoned: Option<String>,
}

#[cfg(test)]
impl MemoryAssets {
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(path, content)| {
                    ((*path).to_string(), Bytes::copy_from_slice(content.as_bytes()))
                })
                .collect(),
            poisoned: None,
        }
    }
}

#[cfg(test)]
impl AssetSource for MemoryAssets {
    fn enumerate(&self) -> io::Result<Vec<String>> {
        Ok(self.files.iter().map(|(path, _)| path.clone()).collect())
    }

    fn read(&self, path: &str) -> io::Result<Bytes> {
        if self.poisoned.as_deref() == Some(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "poisoned"));
        }
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))
    }
}
