//! Logging init: an append-only log file at debug level plus a console sink on
//! stderr at info (debug with `--verbose`). Falls back to stderr only when the
//! log file cannot be opened.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Directives that turn on every debug line of this tool's crates.
const TOOL_DEBUG_DIRECTIVES: &str = "info,pdftool_core=debug,pdftool=debug";

/// Target for events recorded in the log file but kept off the console, such as
/// a fatal error the binary already prints itself.
pub const FILE_ONLY_TARGET: &str = "pdftool_file_only";

#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Log file path (created if missing, appended to otherwise).
    pub file: PathBuf,
    /// Raise the console threshold to debug.
    pub verbose: bool,
}

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(std::fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

/// Persistent threshold: `RUST_LOG` if set, else all of this tool's debug lines.
fn file_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(TOOL_DEBUG_DIRECTIVES))
}

fn console_filter(verbose: bool) -> EnvFilter {
    let base = if verbose { TOOL_DEBUG_DIRECTIVES } else { "info" };
    EnvFilter::new(format!("{base},{FILE_ONLY_TARGET}=off"))
}

/// Initialize the process-wide sink. Returns the log file path.
/// On failure (e.g. log file unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging(settings: &LogSettings) -> Result<PathBuf> {
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.file)
        .with_context(|| format!("failed to open log file {}", settings.file.display()))?;

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_filter(file_filter());

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(console_filter(settings.verbose));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("logging already initialized")?;

    tracing::debug!("pdftool logging initialized at {}", settings.file.display());

    Ok(settings.file.clone())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr(verbose: bool) {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(console_filter(verbose));
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
