use std::{
    io::{self, IsTerminal},
    sync::OnceLock,
};

use tracing::warn;
use tracing_subscriber::{EnvFilter, Registry, filter::LevelFilter, fmt, prelude::*, reload};

static FILTER: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

fn env_filter(debug: bool) -> EnvFilter {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    };

    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Install the global tracing subscriber. Logging is off unless debug is
/// set or RUST_LOG says otherwise. Output goes to stderr so stdout only
/// carries program output. Only the first call has any effect.
pub fn init_logger(debug: bool) {
    FILTER.get_or_init(|| {
        let (filter, handle) = reload::Layer::new(env_filter(debug));

        let stderr = fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .without_time()
            .compact();

        tracing_subscriber::registry().with(filter).with(stderr).init();
        handle
    });
}

/// Raise an installed subscriber to debug level. Used when debug mode is
/// only known after the logger is already running.
pub fn enable_debug_logging() {
    let Some(handle) = FILTER.get() else {
        init_logger(true);
        return;
    };

    if let Err(err) = handle.reload(env_filter(true)) {
        warn!("failed to enable debug logging: {}", err);
    }
}
