//! Tracing subscriber setup for the command-line tool

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to the most detailed level that gets logged
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a global stderr subscriber
///
/// `RUST_LOG` takes precedence over `default_level` when it is set. Returns
/// false if a global subscriber was already installed.
pub fn init_logging(default_level: LevelFilter) -> bool {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
