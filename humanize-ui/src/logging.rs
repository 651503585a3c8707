// Logging setup for the UI host.

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a fmt subscriber. `RUST_LOG` wins over `default_filter`, and a
/// filter that fails to parse falls back to `info`.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .or_else(|_| EnvFilter::try_new("info"))
        .context("build log filter")?;

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    tracing::info!(filter = default_filter, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init_tracing("debug");
        assert!(init_tracing("debug").is_err());
    }
}
