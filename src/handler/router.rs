//! Request dispatch module
//!
//! Resolves each request against the asset registry: exact pattern match on
//! the URI path, GET only. Everything served here is a precomputed in-memory
//! value, so dispatch performs no I/O and cannot fail.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response, Version};

use crate::assets::AssetRegistry;
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Dispatch a request against the registry.
///
/// Non-GET methods are rejected before lookup; unregistered paths fall
/// through to 404. Query strings are ignored (lookup is on the path only).
fn respond(method: &Method, path: &str, registry: &AssetRegistry) -> Response<Full<Bytes>> {
    if method != Method::GET {
        logger::log_warning(&format!("Method not allowed: {method} {path}"));
        return http::build_405_response();
    }

    match registry.lookup(path) {
        Some(file) => http::build_asset_response(file),
        None => http::build_404_response(),
    }
}

pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let response = respond(req.method(), req.uri().path(), &state.registry);

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.referer = header_value(&req, "referer");
        entry.user_agent = header_value(&req, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::source::MemoryAssets;
    use hyper::body::Body as _;

    fn registry() -> AssetRegistry {
        let source = MemoryAssets::new(&[
            ("public/index.html", "<h1>home</h1>"),
            ("public/about.html", "<h1>about</h1>"),
            ("public/style.css", "body { margin: 0 }"),
            ("public/robots.txt", "User-agent: *\n"),
        ]);
        AssetRegistry::build(&source).unwrap()
    }

    #[test]
    fn test_get_root_serves_index() {
        let resp = respond(&Method::GET, "/", &registry());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert_eq!(resp.headers()["Content-Length"], "13");
    }

    #[test]
    fn test_get_clean_html_route() {
        let resp = respond(&Method::GET, "/about", &registry());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
    }

    #[test]
    fn test_get_css_route() {
        let resp = respond(&Method::GET, "/style.css", &registry());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
    }

    #[test]
    fn test_get_text_route() {
        let resp = respond(&Method::GET, "/robots.txt", &registry());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
    }

    #[test]
    fn test_unregistered_path_is_404() {
        let resp = respond(&Method::GET, "/nonexistent", &registry());
        assert_eq!(resp.status(), 404);
    }

    #[test]
    fn test_html_route_with_extension_is_404() {
        // "/about.html" is not registered; only the derived "/about" is.
        let resp = respond(&Method::GET, "/about.html", &registry());
        assert_eq!(resp.status(), 404);
    }

    #[test]
    fn test_non_get_is_rejected() {
        let resp = respond(&Method::POST, "/about", &registry());
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET");

        let resp = respond(&Method::HEAD, "/", &registry());
        assert_eq!(resp.status(), 405);
    }

    #[test]
    fn test_content_length_matches_body() {
        let reg = registry();
        for pattern in ["/", "/about", "/style.css", "/robots.txt"] {
            let resp = respond(&Method::GET, pattern, &reg);
            let declared: usize = resp.headers()["Content-Length"]
                .to_str()
                .unwrap()
                .parse()
                .unwrap();
            let actual = usize::try_from(resp.body().size_hint().exact().unwrap()).unwrap();
            assert_eq!(declared, actual, "pattern {pattern}");
        }
    }
}
