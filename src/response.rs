// Response builder module
// JSON and plain-text response construction shared by every exercise

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build a JSON response with the given status code
///
/// Falls back to a 500 if the body cannot be serialized or the response
/// cannot be built.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return internal_error();
        }
    };

    build(status, "application/json", Bytes::from(json))
}

/// 200 OK with a plain-text body
pub fn text_response(body: String) -> Response<Full<Bytes>> {
    build(StatusCode::OK, "text/plain; charset=utf-8", Bytes::from(body))
}

/// 400 Bad Request with a JSON error message
pub fn bad_request(message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message });
    build(
        StatusCode::BAD_REQUEST,
        "application/json",
        Bytes::from(body.to_string()),
    )
}

/// 404 Not Found listing the routes the binary actually serves
pub fn not_found(available_endpoints: &[&str]) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "Endpoint not found",
        "available_endpoints": available_endpoints,
    });
    build(
        StatusCode::NOT_FOUND,
        "application/json",
        Bytes::from(body.to_string()),
    )
}

/// 405 Method Not Allowed; the exercises only serve GET
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .header("Allow", "GET")
        .body(Full::new(Bytes::from(r#"{"error":"Method not allowed"}"#)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            internal_error()
        })
}

/// 500 Internal Server Error fallback
pub fn internal_error() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(r#"{"error":"Internal server error"}"#)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))))
}

fn build(status: StatusCode, content_type: &str, body: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            internal_error()
        })
}
