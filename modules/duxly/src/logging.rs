//! Tracing setup for binaries and tests that embed the dispatcher.
//!
//! The library only emits events; it never installs a subscriber itself.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, with
/// `duxly=info` added on top.
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("duxly=info".parse()?))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
