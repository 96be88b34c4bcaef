//! Health check exercise
//!
//! Two static JSON endpoints for liveness-style monitoring. The handlers have
//! no side effects and no failure modes of their own.

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response, StatusCode};
use serde::Serialize;
use std::convert::Infallible;

use crate::response;

const ENDPOINTS: &[&str] = &["/status", "/health"];

#[derive(Debug, Serialize)]
struct StatusBody {
    status: &'static str,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Entry point wired into the server loop by the `health_check` binary
pub async fn handle(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(route(req.method(), req.uri().path()))
}

fn route(method: &Method, path: &str) -> Response<Full<Bytes>> {
    match (method, path) {
        (&Method::GET, "/status") => status(),
        (&Method::GET, "/health") => health(),
        (_, "/status" | "/health") => response::method_not_allowed(),
        _ => response::not_found(ENDPOINTS),
    }
}

/// Coarse probe for external monitoring
fn status() -> Response<Full<Bytes>> {
    let body = StatusBody {
        status: "OK",
        message: "Service running smoothly",
    };
    response::json_response(StatusCode::OK, &body)
}

/// Detailed health check with service identity
fn health() -> Response<Full<Bytes>> {
    let body = HealthBody {
        status: "healthy",
        service: "health-check-api",
        version: env!("CARGO_PKG_VERSION"),
    };
    response::json_response(StatusCode::OK, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn json_body(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn status_returns_fixed_payload() {
        let resp = route(&Method::GET, "/status");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "Service running smoothly");
    }

    #[tokio::test]
    async fn health_reports_service_and_version() {
        let resp = route(&Method::GET, "/health");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "health-check-api");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn unknown_route_is_404_with_endpoint_list() {
        let resp = route(&Method::GET, "/nope");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = json_body(resp).await;
        assert_eq!(body["error"], "Endpoint not found");
        assert_eq!(
            body["available_endpoints"],
            serde_json::json!(["/status", "/health"])
        );
    }

    #[test]
    fn post_to_known_route_is_405() {
        let resp = route(&Method::POST, "/status");
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
