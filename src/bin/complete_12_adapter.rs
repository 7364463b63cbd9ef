//! Adapter: the application talks to one logging interface. A hand-written
//! console logger implements it directly; the `tracing` crate, which has a
//! completely different API, is plugged in through an adapter.
//!
//! Run with: cargo run --bin complete_12_adapter

use colored::Colorize;
use design_patterns::{logging, AppConfig, LoggingConfig};

/// The interface the application code depends on.
pub trait LoggerAdapter {
    fn file(&self) -> &str;
    fn write_log(&self, msg: &str);
    fn write_warning(&self, msg: &str);
    fn write_error(&self, msg: &str);
}

// =============================================================================
// In-house logger
// =============================================================================

pub struct LocalLogger {
    file: String,
}

impl LocalLogger {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }

    pub fn format(&self, kind: &str, msg: &str) -> String {
        format!("[{} {kind}] - {msg}", self.file)
    }
}

impl LoggerAdapter for LocalLogger {
    fn file(&self) -> &str {
        &self.file
    }

    fn write_log(&self, msg: &str) {
        println!("{}", self.format("log", msg).blue());
    }

    fn write_warning(&self, msg: &str) {
        println!("{}", self.format("warning", msg).yellow());
    }

    fn write_error(&self, msg: &str) {
        println!("{}", self.format("error", msg).red());
    }
}

// =============================================================================
// Third-party logger behind the same interface
// =============================================================================

pub struct TracingLoggerAdapter {
    file: String,
}

impl TracingLoggerAdapter {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }
}

impl LoggerAdapter for TracingLoggerAdapter {
    fn file(&self) -> &str {
        &self.file
    }

    fn write_log(&self, msg: &str) {
        tracing::info!("[{}] - {}", self.file, msg);
    }

    fn write_warning(&self, msg: &str) {
        tracing::warn!("[{}] - {}", self.file, msg);
    }

    fn write_error(&self, msg: &str) {
        tracing::error!("[{}] - {}", self.file, msg);
    }
}

/// Application code: knows nothing about which logger it was given.
fn process_order(logger: &dyn LoggerAdapter, order_id: u32, in_stock: bool) {
    logger.write_log(&format!("processing order {order_id}"));
    if !in_stock {
        logger.write_warning(&format!("order {order_id} is back-ordered"));
    }
    if order_id == 0 {
        logger.write_error("order id 0 is reserved");
    }
}

fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config.logging,
        Err(err) => {
            eprintln!("{} {err}", "config error, using defaults:".red());
            LoggingConfig::default()
        }
    };
    logging::init(&config);

    let loggers: Vec<Box<dyn LoggerAdapter>> = vec![
        Box::new(LocalLogger::new("orders.rs")),
        Box::new(TracingLoggerAdapter::new("orders.rs")),
    ];

    for logger in &loggers {
        println!("\n{} {}", "Logging for".green(), logger.file());
        process_order(logger.as_ref(), 7, false);
        process_order(logger.as_ref(), 0, true);
    }
}
