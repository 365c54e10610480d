//! Content-Type selection module
//!
//! Chooses the response Content-Type from a file's extension. The bundled
//! site only carries HTML, CSS, and plain text, so everything that is not
//! `.html` or `.css` is served as `text/plain`.

/// Get the Content-Type for a bundled file's extension (leading dot included).
///
/// # Examples
/// ```
/// use embedsite::http::mime::content_type_for;
/// assert_eq!(content_type_for(".html"), "text/html");
/// assert_eq!(content_type_for(".css"), "text/css");
/// assert_eq!(content_type_for(".txt"), "text/plain");
/// ```
#[must_use]
pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        ".html" => "text/html",
        ".css" => "text/css",
        _ => "text/plain",
    }
}
