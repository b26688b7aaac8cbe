//! sentiscope binary entrypoint kept minimal. Handlers live in `args`.

mod args;

use std::fmt;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::util::SubscriberInitExt;

struct SentiscopeTimer;

impl tracing_subscriber::fmt::time::FormatTime for SentiscopeTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

/// What: Build the file-backed subscriber used for normal runs.
///
/// Inputs:
/// - `file`: Opened log file (append mode).
/// - `level`: Default filter directive when `RUST_LOG` is unset.
///
/// Output:
/// - The subscriber and the worker guard that flushes it when dropped.
///
/// Details:
/// - Records are written by a background worker; the guard must outlive every log call.
fn file_subscriber(
    file: std::fs::File,
    level: &str,
) -> (
    impl tracing::Subscriber + Send + Sync + 'static,
    tracing_appender::non_blocking::WorkerGuard,
) {
    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_timer(SentiscopeTimer)
        .finish();
    (subscriber, guard)
}

/// `RUST_LOG` when set, else `level`.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing to `<config_dir>/logs/sentiscope.log`, or stderr if that fails.
///
/// Inputs:
/// - `level`: Default filter directive when `RUST_LOG` is unset.
///
/// Output:
/// - `Some(guard)` for the file writer; the caller keeps it alive until exit so
///   buffered records are flushed. `None` when logging to stderr.
fn init_logging(level: &str) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let mut log_path = sentiscope::config::logs_dir();
    log_path.push("sentiscope.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (subscriber, guard) = file_subscriber(file, level);
            subscriber.init();
            tracing::info!(path = %log_path.display(), "logging initialized");
            Some(guard)
        }
        Err(e) => {
            // stdout carries the prepared output, so logs go to stderr
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(SentiscopeTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
            None
        }
    }
}

fn main() -> ExitCode {
    let args = args::Args::parse();
    // dropped at the end of main, after the last log call
    let _log_guard = init_logging(&args::determine_log_level(&args));

    tracing::info!("sentiscope starting");
    if let Err(err) = args::run(&args) {
        tracing::error!(error = %err, "sentiscope failed");
        eprintln!("sentiscope: {err}");
        return ExitCode::FAILURE;
    }
    tracing::info!("sentiscope exited");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn sentiscope_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::SentiscopeTimer;
        let _ = t.format_time(&mut writer);
        assert!(!buf.is_empty());
    }

    #[test]
    /// What: Records reach the log file once the worker guard is dropped.
    ///
    /// Inputs:
    /// - File subscriber over a temp file, one info record, guard dropped right after.
    ///
    /// Output:
    /// - The file contains the record.
    ///
    /// Details:
    /// - Mirrors a short CLI run where the process exits immediately after the last log call.
    fn file_log_is_flushed_when_guard_drops() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sentiscope.log");
        let file = std::fs::File::create(&path).expect("create log file");
        let (subscriber, guard) = super::file_subscriber(file, "info");
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(error = "boom", "sentiscope failed");
        });
        drop(guard);
        let content = std::fs::read_to_string(&path).expect("read log file");
        assert!(content.contains("sentiscope failed"), "log was: {content:?}");
        assert!(content.contains("boom"));
    }

    #[test]
    fn args_parse_flags() {
        use clap::Parser;
        let a = super::args::Args::parse_from([
            "sentiscope",
            "payload.json",
            "--format",
            "text",
            "-v",
        ]);
        assert_eq!(
            a.input.as_deref(),
            Some(std::path::Path::new("payload.json"))
        );
        assert_eq!(a.format.as_deref(), Some("text"));
        assert_eq!(super::args::determine_log_level(&a), "debug");
        assert_eq!(a.platform, "twitter");
        assert_eq!(a.timeframe, "7d");
    }
}
