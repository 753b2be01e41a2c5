//! Telemetry helpers for hosts embedding `chart-series-rs`.
//!
//! Pane views and series log through `tracing`; nothing is printed unless the
//! host installs a subscriber, either its own or the one below.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the `telemetry` feature is disabled or the host
/// application already registered a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
