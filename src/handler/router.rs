//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Every method and path gets a
//! 200 response: the health path answers with the health body, everything
//! else with the greeting.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Logical route selected for a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    Greeting,
}

/// Select the route for a path; only an exact match is the health route
pub fn route(path: &str, health_path: &str) -> Route {
    if path == health_path {
        Route::Health
    } else {
        Route::Greeting
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let path = req.uri().path();

    let body = match route(path, &state.config.http.health_path) {
        Route::Health => state.health_body.clone(),
        Route::Greeting => state.greeting_body.clone(),
    };
    let body_bytes = body.len();
    let response = http::build_text_response(body, &state.config.http.content_type);

    if state.config.logging.access_log {
        let mut entry =
            AccessLogEntry::new(peer_addr.to_string(), req.method().to_string(), path.to_string());
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = body_bytes;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::Method;

    fn test_state() -> Arc<AppState> {
        let config = Config::load_from("does-not-exist/hello-server").expect("defaults");
        AppState::shared(&config)
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:50000".parse().expect("valid peer")
    }

    async fn body_of(method: Method, uri: &str) -> (u16, Bytes) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .expect("valid request");
        let resp = handle_request(req, test_state(), peer())
            .await
            .expect("infallible");
        let status = resp.status().as_u16();
        let body = resp.into_body().collect().await.expect("full body").to_bytes();
        (status, body)
    }

    #[test]
    fn test_route_exact_match_only() {
        assert_eq!(route("/healthz", "/healthz"), Route::Health);
        assert_eq!(route("/", "/healthz"), Route::Greeting);
        assert_eq!(route("/healthz/", "/healthz"), Route::Greeting);
        assert_eq!(route("/healthzz", "/healthz"), Route::Greeting);
        assert_eq!(route("/HEALTHZ", "/healthz"), Route::Greeting);
    }

    #[tokio::test]
    async fn test_health_any_method() {
        for method in [Method::GET, Method::POST, Method::DELETE, Method::HEAD, Method::PUT] {
            let (status, body) = body_of(method, "/healthz").await;
            assert_eq!(status, 200);
            assert_eq!(&body[..], b"ok\n");
        }
    }

    #[tokio::test]
    async fn test_health_ignores_query() {
        let (status, body) = body_of(Method::GET, "/healthz?probe=1").await;
        assert_eq!(status, 200);
        assert_eq!(&body[..], b"ok\n");
    }

    #[tokio::test]
    async fn test_other_paths_get_greeting() {
        for uri in ["/", "/index.html", "/healthz/", "/api/v1/users?id=3"] {
            let (status, body) = body_of(Method::GET, uri).await;
            assert_eq!(status, 200);
            assert_eq!(&body[..], b"hello from bun\n");
        }
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_11), "1.1");
        assert_eq!(version_label(Version::HTTP_2), "2");
    }
}
