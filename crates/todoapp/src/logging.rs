//! Tracing setup for applications embedding todoapp.
//!
//! The library only emits events. An embedder that wants them on stderr calls
//! [`init`] once at startup; output is opt-in via `RUST_LOG`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Longest `RUST_LOG` value we try to parse.
const MAX_FILTER_LEN: usize = 4096;

/// Builds the filter from a raw `RUST_LOG` value.
/// Empty, oversized or invalid filters fall back to `off`.
pub fn filter_from(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|raw| {
        let raw = raw.trim();
        if raw.is_empty() || raw.len() > MAX_FILTER_LEN {
            return None;
        }
        EnvFilter::try_new(raw).ok()
    })
    .unwrap_or_else(|| EnvFilter::new("off"))
}

/// Installs a global fmt subscriber. Returns false if one was already set.
pub fn init() -> bool {
    let raw = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter_from(raw.as_deref()))
        .try_init()
        .is_ok()
}
