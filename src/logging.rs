//! Debug log setup
//!
//! The terminal is in the alternate screen while the app runs, so logs go to
//! a file in the temp dir and only when `--debug` is passed.
//! RUST_LOG overrides the default `waterfall=debug` filter.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::utils::get_debug_log_path;

const DEFAULT_FILTER: &str = "waterfall=debug";

/// Install the file subscriber. Keep the returned guard alive until exit so
/// buffered lines get flushed.
pub fn init(debug: bool) -> Option<WorkerGuard> {
    if !debug {
        return None;
    }

    let path = get_debug_log_path();
    let dir = path.parent()?.to_path_buf();
    let file_name = path.file_name()?.to_owned();

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init();

    // A subscriber from an embedding host wins; drop ours quietly
    installed.ok().map(|_| guard)
}
