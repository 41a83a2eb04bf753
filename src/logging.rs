use anyhow::Result;
use std::io;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` wins, otherwise the configured level
fn build_filter(level: &str) -> EnvFilter {
    match std::env::var("RUST_LOG") {
        Ok(directive) => EnvFilter::new(directive),
        Err(_) => EnvFilter::new(level),
    }
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr; stdout is reserved for the MCP stdio transport.
pub fn init(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
