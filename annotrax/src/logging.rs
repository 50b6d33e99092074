// src/logging.rs
use std::io;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

/// Maps the number of `-v` flags to the most verbose level shown.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global tracing subscriber; diagnostics go to stderr so stdout
/// only ever carries matches.
pub fn init_tracing(verbosity: u8) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(verbosity))
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        // A subscriber is already installed; keep it
        debug!(%err, "tracing subscriber not replaced");
    }
}
