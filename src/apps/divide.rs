//! Division exercise
//!
//! `GET /divide?a=<num>&b=<num>` returns the quotient as JSON. Invalid input
//! is answered with a 400 and a JSON error body instead of a default value or
//! an unhandled error.

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response, StatusCode};
use serde::Serialize;
use std::convert::Infallible;

use crate::query;
use crate::response;

const ENDPOINTS: &[&str] = &["/divide"];

#[derive(Debug, Serialize)]
struct QuotientBody {
    result: f64,
}

/// Entry point wired into the server loop by the `divide` binary
pub async fn handle(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(route(req.method(), req.uri().path(), req.uri().query()))
}

fn route(method: &Method, path: &str, raw_query: Option<&str>) -> Response<Full<Bytes>> {
    match (method, path) {
        (&Method::GET, "/divide") => divide(raw_query.unwrap_or("")),
        (_, "/divide") => response::method_not_allowed(),
        _ => response::not_found(ENDPOINTS),
    }
}

fn divide(raw_query: &str) -> Response<Full<Bytes>> {
    let params = query::parse(raw_query);
    let (a, b) = match (operand(&params, "a"), operand(&params, "b")) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(message), _) | (_, Err(message)) => return response::bad_request(&message),
    };

    // Covers -0 as well
    if b == 0.0 {
        return response::bad_request("division by zero");
    }

    // Finite operands can still overflow, e.g. 1e308 / 1e-308; serde_json
    // would render the infinity as null
    let result = a / b;
    if !result.is_finite() {
        return response::bad_request("result out of range");
    }

    response::json_response(StatusCode::OK, &QuotientBody { result })
}

/// Extract one numeric operand, rejecting missing and non-finite values
fn operand(params: &[(String, String)], name: &str) -> Result<f64, String> {
    let raw =
        query::get(params, name).ok_or_else(|| format!("missing parameter: {name}"))?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("invalid number for parameter: {name}")),
    }
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
    async fn valid_operands_return_quotient() {
        let resp = route(&Method::GET, "/divide", Some("a=10&b=2"));
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await, serde_json::json!({ "result": 5.0 }));
    }

    #[tokio::test]
    async fn fractional_quotient_is_preserved() {
        let resp = route(&Method::GET, "/divide", Some("a=1&b=3"));
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        let result = body["result"].as_f64().unwrap();
        assert!((result - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn zero_divisor_is_rejected() {
        let resp = route(&Method::GET, "/divide", Some("a=10&b=0"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "division by zero");
    }

    #[tokio::test]
    async fn negative_zero_divisor_is_rejected() {
        let resp = route(&Method::GET, "/divide", Some("a=10&b=-0"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "division by zero");
    }

    #[tokio::test]
    async fn missing_parameter_is_rejected() {
        let resp = route(&Method::GET, "/divide", Some("b=2"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "missing parameter: a");

        let resp = route(&Method::GET, "/divide", None);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_numeric_parameter_is_rejected() {
        let resp = route(&Method::GET, "/divide", Some("a=10&b=abc"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(resp).await["error"],
            "invalid number for parameter: b"
        );
    }

    #[tokio::test]
    async fn overflowing_quotient_is_rejected() {
        let resp = route(&Method::GET, "/divide", Some("a=1e308&b=1e-308"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "result out of range");
    }

    #[tokio::test]
    async fn tiny_quotient_underflows_to_zero() {
        let resp = route(&Method::GET, "/divide", Some("a=1e-308&b=1e308"));
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await, serde_json::json!({ "result": 0.0 }));
    }

    #[test]
    fn non_finite_operand_is_rejected() {
        let params = query::parse("a=inf");
        assert!(operand(&params, "a").is_err());
        let params = query::parse("a=NaN");
        assert!(operand(&params, "a").is_err());
    }

    #[test]
    fn unknown_route_is_404() {
        let resp = route(&Method::GET, "/multiply", None);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn post_is_405() {
        let resp = route(&Method::POST, "/divide", Some("a=10&b=2"));
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
