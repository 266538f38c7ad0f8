//! HTTP response building module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 OK response with a fixed text body
pub fn build_text_response(body: Bytes, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = body.len();

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body.clone()))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(body))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_text_response() {
        let resp = build_text_response(Bytes::from_static(b"ok\n"), "text/plain; charset=utf-8");
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
        assert_eq!(resp.headers()["content-length"], "3");

        let body = resp.into_body().collect().await.expect("full body").to_bytes();
        assert_eq!(&body[..], b"ok\n");
    }

    #[test]
    fn test_invalid_content_type_still_returns_body() {
        // A newline is not a valid header value, so the builder fails
        let resp = build_text_response(Bytes::from_static(b"ok\n"), "text/plain\n");
        assert_eq!(resp.status(), 200);
        assert!(resp.headers().get("content-type").is_none());
    }
}
