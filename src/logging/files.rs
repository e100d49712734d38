//! The tracing layer that emits logs to files.

use std::path::PathBuf;
use std::{env, fs, io};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::filter::FilterFn;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Provides a tracing layer for emitting logs to daily-rotated JSON files.
///
/// File logging is optional; it only happens if the `LOG_DIR` environment variable is set.
pub fn layer<S>() -> io::Result<Option<(impl tracing_subscriber::Layer<S>, WorkerGuard)>>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	let Ok(log_dir) = env::var("LOG_DIR").map(PathBuf::from) else {
		return Ok(None);
	};

	if !log_dir.exists() {
		fs::create_dir_all(&log_dir)?;
	}

	let log_dir = log_dir.canonicalize()?;

	let (writer, guard) = tracing_appender::rolling::Builder::new()
		.rotation(Rotation::DAILY)
		.filename_suffix("log")
		.build(&log_dir)
		.map(tracing_appender::non_blocking)
		.map_err(io::Error::other)?;

	let layer = tracing_subscriber::fmt::layer()
		.json()
		.with_writer(writer)
		.with_filter(FilterFn::new(|metadata| {
			metadata.target().starts_with("aerobench_api")
		}));

	Ok(Some((layer, guard)))
}
