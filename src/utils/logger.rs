use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn cli_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("modal_facade=debug,info")
        } else {
            EnvFilter::new("modal_facade=info")
        }
    })
}

/// Builds a filter from a configured level such as `"debug"`, scoped to this crate.
pub fn filter_for_level(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("modal_facade={},warn", level)))
}

/// A configured level applies unless `verbose` asks for the debug filter.
pub fn log_filter(level: Option<&str>, verbose: bool) -> EnvFilter {
    match level {
        Some(level) if !verbose => filter_for_level(level),
        _ => cli_filter(verbose),
    }
}

pub fn init_cli_logger_with(filter: EnvFilter) {
    // try_init: a host may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

pub fn init_json_logger(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init();
}
