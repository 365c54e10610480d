//! Route derivation module
//!
//! Maps a bundled file path to the URL pattern it is served under. HTML files
//! get clean extensionless routes and `index.html` becomes the site root;
//! every other asset keeps its extension so literal references in markup
//! (`href="/style.css"`) resolve unchanged.

/// Metadata derived from a single file path.
///
/// Derivation is a pure function of the path string: calling it twice on the
/// same input yields identical results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMeta {
    /// Suffix of the final segment from its last `.`, dot included.
    /// Empty when the final segment has no dot.
    pub extension: String,
    /// Final path segment, extension included.
    pub base: String,
    /// `base` with the `extension` suffix removed (the stem).
    pub name: String,
    /// URL pattern the file is registered under. Non-empty, starts with `/`.
    pub pattern: String,
}

/// Derive route metadata from a path within the bundled tree.
///
/// # Examples
/// ```
/// use embedsite::assets::route::derive;
///
/// assert_eq!(derive("public/index.html").pattern, "/");
/// assert_eq!(derive("public/about.html").pattern, "/about");
/// assert_eq!(derive("public/style.css").pattern, "/style.css");
/// ```
#[must_use]
pub fn derive(path: &str) -> RouteMeta {
    let base = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };

    // Only the last dot-delimited segment counts: "a.b.css" -> ".css" / "a.b"
    let (name, extension) = match base.rfind('.') {
        Some(idx) => (&base[..idx], &base[idx..]),
        None => (base, ""),
    };

    let pattern = if extension == ".html" {
        if name == "index" {
            "/".to_string()
        } else {
            format!("/{name}")
        }
    } else {
        format!("/{base}")
    };

    RouteMeta {
        extension: extension.to_string(),
        base: base.to_string(),
        name: name.to_string(),
        pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_html_maps_to_root() {
        let meta = derive("public/index.html");
        assert_eq!(meta.extension, ".html");
        assert_eq!(meta.base, "index.html");
        assert_eq!(meta.name, "index");
        assert_eq!(meta.pattern, "/");
    }

    #[test]
    fn test_html_drops_extension() {
        let meta = derive("public/about.html");
        assert_eq!(meta.name, "about");
        assert_eq!(meta.pattern, "/about");
    }

    #[test]
    fn test_css_keeps_extension() {
        let meta = derive("public/style.css");
        assert_eq!(meta.extension, ".css");
        assert_eq!(meta.pattern, "/style.css");
    }

    #[test]
    fn test_text_keeps_extension() {
        let meta = derive("public/robots.txt");
        assert_eq!(meta.extension, ".txt");
        assert_eq!(meta.pattern, "/robots.txt");
    }

    #[test]
    fn test_no_extension() {
        let meta = derive("public/LICENSE");
        assert_eq!(meta.extension, "");
        assert_eq!(meta.base, "LICENSE");
        assert_eq!(meta.name, "LICENSE");
        assert_eq!(meta.pattern, "/LICENSE");
    }

    #[test]
    fn test_multiple_dots_split_on_last() {
        let meta = derive("public/a.b.css");
        assert_eq!(meta.extension, ".css");
        assert_eq!(meta.name, "a.b");
        assert_eq!(meta.pattern, "/a.b.css");
    }

    #[test]
    fn test_nested_path_uses_final_segment() {
        let meta = derive("public/docs/guide.html");
        assert_eq!(meta.base, "guide.html");
        assert_eq!(meta.pattern, "/guide");
    }

    #[test]
    fn test_bare_filename_without_directory() {
        let meta = derive("notes.txt");
        assert_eq!(meta.base, "notes.txt");
        assert_eq!(meta.pattern, "/notes.txt");
    }

    #[test]
    fn test_dotfile_is_all_extension() {
        let meta = derive("public/.gitignore");
        assert_eq!(meta.extension, ".gitignore");
        assert_eq!(meta.name, "");
        assert_eq!(meta.pattern, "/.gitignore");
    }

    #[test]
    fn test_derivation_is_pure() {
        assert_eq!(derive("public/about.html"), derive("public/about.html"));
        assert_eq!(derive("a/b/c.css"), derive("a/b/c.css"));
    }

    #[test]
    fn test_patterns_start_with_slash() {
        for path in ["public/index.html", "x.css", "README", "a/b/.env"] {
            let meta = derive(path);
            assert!(meta.pattern.starts_with('/'), "pattern for {path}");
            assert!(!meta.pattern.is_empty());
        }
    }
}
