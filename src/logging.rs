use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Open `path` for appending, creating it if necessary.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn file_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// One timestamped plain text line per event, written straight to `file`.
fn file_layer<S>(file: File, filter: EnvFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter)
}

/// Install the global subscriber.
///
/// Every event is appended to `log_file`, while stderr only receives
/// warnings unless `verbose` is set. `RUST_LOG` overrides both levels.
pub fn init(log_file: &Path, verbose: bool) -> io::Result<()> {
    let file = open_log_file(log_file)?;

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .with_filter(filter(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(file_layer(file, filter(file_level(verbose))))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
