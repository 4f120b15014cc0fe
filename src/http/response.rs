//! HTTP response building module
//!
//! Builders for every response shape the router produces, decoupled from
//! route logic. Builders never panic: a failed build is logged and degrades
//! to a bare response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::logger;

/// Build a JSON response from a serializable body
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    enable_cors: bool,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string_pretty(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_500_response("response serialization failed", enable_cors);
        }
    };
    build_body_response(status, Bytes::from(json), "application/json", enable_cors, is_head)
}

/// Build a 200 response from raw bytes with a fixed content type
pub fn build_bytes_response(
    data: Bytes,
    content_type: &str,
    enable_cors: bool,
    is_head: bool,
) -> Response<Full<Bytes>> {
    build_body_response(StatusCode::OK, data, content_type, enable_cors, is_head)
}

/// Build a 200 plain-text response
pub fn build_text_response(text: &str, enable_cors: bool, is_head: bool) -> Response<Full<Bytes>> {
    build_body_response(
        StatusCode::OK,
        Bytes::from(text.to_owned()),
        "text/plain; charset=utf-8",
        enable_cors,
        is_head,
    )
}

fn build_body_response(
    status: StatusCode,
    data: Bytes,
    content_type: &str,
    enable_cors: bool,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length);

    if enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error(status.as_str(), &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 404 Not Found response with a short detail message
pub fn build_404_response(detail: &str, enable_cors: bool) -> Response<Full<Bytes>> {
    let body = format!("404 Not Found: {detail}");
    let mut builder = Response::builder()
        .status(404)
        .header("Content-Type", "text/plain");

    if enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder
        .body(Full::new(Bytes::from(body.clone())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 500 Internal Server Error response with a detail message
pub fn build_500_response(detail: &str, enable_cors: bool) -> Response<Full<Bytes>> {
    let body = format!("500 Internal Server Error: {detail}");
    let mut builder = Response::builder()
        .status(500)
        .header("Content-Type", "text/plain");

    if enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder
        .body(Full::new(Bytes::from(body.clone())))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.expect("body").to_bytes();
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn test_404_carries_detail() {
        let resp = build_404_response("openapi.yaml has not been provided", false);
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["content-type"], "text/plain");
        assert!(!resp.headers().contains_key("access-control-allow-origin"));
        let body = body_text(resp).await;
        assert!(body.contains("openapi.yaml has not been provided"));
    }

    #[tokio::test]
    async fn test_500_carries_detail() {
        let resp = build_500_response("failed to parse", false);
        assert_eq!(resp.status(), 500);
        assert!(body_text(resp).await.contains("failed to parse"));
    }

    #[test]
    fn test_405_lists_allowed_methods() {
        let resp = build_405_response(false);
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_error_responses_carry_cors_header_when_enabled() {
        let resp = build_404_response("missing", true);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");

        let resp = build_405_response(true);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");

        let resp = build_500_response("failed", true);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    }

    #[test]
    fn test_options_preflight_with_cors() {
        let resp = build_options_response(true);
        assert_eq!(resp.status(), 204);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    }

    #[test]
    fn test_options_preflight_without_cors() {
        let resp = build_options_response(false);
        assert_eq!(resp.status(), 204);
        assert!(!resp.headers().contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_head_strips_body_but_keeps_length() {
        let resp = build_bytes_response(Bytes::from_static(b"abcdef"), "text/yaml", false, true);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-length"], "6");
        assert!(body_text(resp).await.is_empty());
    }
}
