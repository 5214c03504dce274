//! File logging setup.
//!
//! The editor owns the terminal, so tracing output goes to a log file through
//! a non-blocking writer. Filtering follows `RUST_LOG`.

use std::path::Path;
use std::sync::Once;

use tracing_appender::non_blocking::WorkerGuard;

/// Install the global subscriber writing to `log_file`.
///
/// Returns the writer guard, which must live until exit so buffered lines are
/// flushed. Returns `None` when a subscriber is already installed.
pub fn init(log_file: &Path) -> Option<WorkerGuard> {
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = log_file.file_name()?;
    let file_appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .is_ok();
    if !installed {
        return None;
    }
    install_panic_hook();
    Some(guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", %info, "panic");
            default_panic(info);
        }));
    });
}
