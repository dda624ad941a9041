//! ## ikemark-telemetry::logging
//! **Structured logging with tracing**

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence; otherwise `default_filter` is used
    /// (the CLI passes `info`, or `debug` when run with `--verbose`).
    pub fn init(default_filter: &str) {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(default_filter)),
            )
            .with_span_events(FmtSpan::ENTER)
            .init()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn log_lines_are_captured() {
        tracing::info!("benchmark pipeline started");
        assert!(logs_contain("benchmark pipeline started"));
    }
}
