use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "finboard=warn";
const VERBOSE_FILTER: &str = "finboard=debug,warn";
const JSON_FILTER: &str = "finboard=info";

/// `RUST_LOG` when set, otherwise `default`.
fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Human-readable logs for interactive use.
///
/// Logs go to stderr: stdout carries the rendered screens and must stay
/// clean enough to pipe into other tools.
pub fn init_cli_logger(verbose: bool) {
    let filter = filter_or(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Machine-readable logs, one JSON object per line on stderr.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(filter_or(JSON_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .json(),
        )
        .init();
}
