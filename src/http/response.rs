//! HTTP response building module
//!
//! Builders for the handful of responses this server produces.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::mime;
use crate::assets::ServableFile;

/// Build the 200 response for a registered asset.
///
/// The body is the exact preloaded byte content; Content-Length always
/// matches its length and Content-Type follows the file's extension.
#[must_use]
pub fn build_asset_response(file: &ServableFile) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", mime::content_type_for(&file.extension))
        .header("Content-Length", file.content.len())
        .body(Full::new(file.content.clone()))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(file.content.clone()))
        })
}

/// Build 404 Not Found response
#[must_use]
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
#[must_use]
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
