//! Structured logging setup, built on `tracing`.
//!
//! Mirrors the teacher's stderr-only subscriber: a single
//! `tracing_subscriber::fmt` layer filtered by `EnvFilter`, safe to call
//! more than once (subsequent calls are no-ops). There is no persistence
//! transport here — the spec's "no durable storage of runs" non-goal
//! extends naturally to logs, so nothing batches writes to disk.

/// Initialize the global tracing subscriber with stderr output only.
///
/// Call once at application startup. Subsequent calls are no-ops.
///
/// # Arguments
///
/// * `level` - Minimum log level to display when `RUST_LOG` is unset.
///   Defaults to `"warn"` if not supplied by the caller.
pub fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // set_global_default is a no-op if already set.
    let _ = subscriber.try_init();
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
