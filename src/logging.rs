use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Set up tracing for the process.
///
/// `RUST_LOG` wins when set; otherwise the crate (and tower-http's request
/// traces) log at `info`, or `debug` with `verbose`. Console output goes to
/// stderr so piped `query`/`mutate` results stay clean JSON. With
/// `log_file`, JSON lines are additionally appended under daily rotation.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry().with(filter).with(console);

    match log_file {
        Some(path) => {
            let (dir, file) = split_log_path(&path);
            let _ = std::fs::create_dir_all(&dir);
            let appender = tracing_appender::rolling::daily(dir, file);

            let json = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .json();

            registry.with(json).init();
        }
        None => registry.init(),
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::new(format!("discograph={level},tower_http={level}"))
}

/// Split a log path into the rotation directory and file name. A bare file
/// name rotates in the current directory.
fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("discograph.log"))
        .to_os_string();
    (dir, file)
}
