//! Logger module
//!
//! In-crate logging for the exercise servers:
//! - Server lifecycle logging
//! - Per-request access logging with multiple formats
//! - Error and warning logging
//! - Optional file targets

mod format;
pub mod writer;

pub use format::{http_version_label, AccessLogEntry};

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    if writer::is_initialized() {
        writer::get().write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    if writer::is_initialized() {
        writer::get().write_access(message);
    } else {
        println!("{message}");
    }
}

pub fn log_server_start(name: &str, addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info(&format!("{name} server started"));
    write_info(&format!("Listening on: http://{addr}"));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if config.logging.access_log {
        write_info(&format!(
            "Access log format: {}",
            config.logging.access_log_format
        ));
    }
    write_info("======================================\n");
}

/// Write one formatted access log line
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_shutdown(name: &str) {
    write_info(&format!("Shutdown signal received, stopping {name} server"));
}
