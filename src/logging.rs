use crate::config::AppConfig;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "maxplayer_roster_lib=info,maxplayer_roster=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn log_path() -> Option<PathBuf> {
    AppConfig::project_dirs().map(|dirs| dirs.data_local_dir().join("maxplayer-roster.log"))
}

/// Log to a file, since stdout belongs to the terminal UI.
/// Returns the file path when logging was installed.
pub fn init_file_logging() -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let subscriber = fmt::Subscriber::builder()
        .compact()
        .with_ansi(false)
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber).ok()?;
    Some(path)
}

/// Log to stderr for headless runs
pub fn init_stderr_logging() {
    let subscriber = fmt::Subscriber::builder()
        .compact()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
