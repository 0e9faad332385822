//! Diagnostic tracing for the solver binary.
//!
//! Controlled by `RUST_LOG` and written to stderr, so stdout only ever
//! carries the reported moves (and boards, when asked for).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset or unparsable.
///
/// # Example
/// ```bash
/// RUST_LOG=peg_solitaire=info peg_solver
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
