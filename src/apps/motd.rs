//! Message-of-the-day exercise
//!
//! Serves the content of one plain-text data file, read once at startup:
//! as JSON on `/motd` and as raw text on `/`.

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response, StatusCode};
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;

use crate::response;

const ENDPOINTS: &[&str] = &["/", "/motd"];

/// Message content preloaded from the data file
#[derive(Debug)]
pub struct MotdState {
    message: String,
}

impl MotdState {
    /// Read the data file; a missing or unreadable file is a startup error
    pub async fn load(path: &str) -> std::io::Result<Self> {
        let message = tokio::fs::read_to_string(path).await?;
        Ok(Self { message })
    }

    #[cfg(test)]
    fn from_message(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MotdBody<'a> {
    motd: &'a str,
}

/// Entry point wired into the server loop by the `motd` binary
pub async fn handle(
    req: Request<Incoming>,
    state: &Arc<MotdState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(route(req.method(), req.uri().path(), state))
}

fn route(method: &Method, path: &str, state: &MotdState) -> Response<Full<Bytes>> {
    match (method, path) {
        (&Method::GET, "/motd") => response::json_response(
            StatusCode::OK,
            &MotdBody {
                motd: state.message.trim_end(),
            },
        ),
        (&Method::GET, "/") => response::text_response(state.message.clone()),
        (_, "/" | "/motd") => response::method_not_allowed(),
        _ => response::not_found(ENDPOINTS),
    }
}
