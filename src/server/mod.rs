//! HTTP/1.1 server loop shared by the exercise binaries
//!
//! Each binary supplies a route function; listener setup, the accept loop,
//! graceful Ctrl+C shutdown, and access logging live here.

mod listener;

pub use listener::create_listener;

use http_body_util::Full;
use hyper::body::{Body as _, Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::{Config, LoggingConfig};
use crate::logger;
use crate::logger::AccessLogEntry;

/// Bind the configured address and serve `service` until Ctrl+C.
///
/// `name` only appears in lifecycle log lines so concurrently running
/// exercises can be told apart.
pub async fn run<S, F>(name: &str, cfg: Config, service: S) -> Result<(), Box<dyn std::error::Error>>
where
    S: Fn(Request<Incoming>) -> F + Clone + Send + Sync + 'static,
    F: Future<Output = Result<Response<Full<Bytes>>, Infallible>> + Send + 'static,
{
    let addr = cfg.socket_addr()?;
    let listener = create_listener(addr)?;
    logger::log_server_start(name, &addr, &cfg);

    let logging = Arc::new(cfg.logging.clone());
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        serve_connection(stream, peer_addr, service.clone(), Arc::clone(&logging));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = &mut shutdown => {
                logger::log_shutdown(name);
                return Ok(());
            }
        }
    }
}

/// Serve a single connection on a spawned task
fn serve_connection<S, F>(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    service: S,
    logging: Arc<LoggingConfig>,
) where
    S: Fn(Request<Incoming>) -> F + Clone + Send + Sync + 'static,
    F: Future<Output = Result<Response<Full<Bytes>>, Infallible>> + Send + 'static,
{
    let io = TokioIo::new(stream);

    let svc = service_fn(move |req: Request<Incoming>| {
        let service = service.clone();
        let logging = Arc::clone(&logging);

        async move {
            let start = Instant::now();
            let entry = logging.access_log.then(|| access_entry(&req, peer_addr));

            let response = service(req).await?;

            if let Some(mut entry) = entry {
                entry.status = response.status().as_u16();
                entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
                entry.request_time_us =
                    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
                logger::log_access(&entry, &logging.access_log_format);
            }

            Ok::<_, Infallible>(response)
        }
    });

    tokio::spawn(async move {
        if let Err(e) = http1::Builder::new().serve_connection(io, svc).await {
            logger::log_error(&format!("Failed to serve connection: {e:?}"));
        }
    });
}

/// Snapshot the request fields the access log needs before the request is
/// handed to the route function
fn access_entry(req: &Request<Incoming>, peer_addr: SocketAddr) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = logger::http_version_label(req.version()).to_string();
    entry.referer = header_string(req, "referer");
    entry.user_agent = header_string(req, "user-agent");
    entry
}

fn header_string(req: &Request<Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
