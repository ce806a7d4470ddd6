//! Tracing setup.
//!
//! The interactive form owns the terminal, so it logs to a file. One-shot
//! runs log to stderr unless a file is given.

use std::env;
use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub enum Sink {
    Stderr,
    File(PathBuf),
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".cache/passform/passform.log")
}

/// Install the global subscriber. Returns a message if the log file could
/// not be opened; logging is then disabled.
pub fn init(sink: Sink) -> Option<String> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("passform=info"));

    let (writer, ansi, failure) = match sink {
        Sink::Stderr => (BoxMakeWriter::new(std::io::stderr), true, None),
        Sink::File(path) => match open(&path) {
            Ok(appender) => (BoxMakeWriter::new(appender), false, None),
            Err(e) => (
                BoxMakeWriter::new(std::io::sink),
                false,
                Some(format!("Failed to open log file {}: {}", path.display(), e)),
            ),
        },
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false),
        )
        .try_init();

    failure
}

fn open(path: &Path) -> Result<RollingFileAppender, String> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let dir = dir.unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| "not a file path".to_string())?;

    std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
        .map_err(|e| e.to_string())
}
