//! Shared plumbing for the coursework web services.
//!
//! Each binary under `src/bin/` is an independent exercise: it loads the
//! shared configuration, starts the shared HTTP/1.1 server loop, and plugs in
//! its own route function. Everything in this library exists so the binaries
//! stay as small as the exercises they implement.

pub mod apps;
pub mod config;
pub mod logger;
pub mod query;
pub mod response;
pub mod server;
