//! Log-capturing facilities.

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod stderr;
mod files;

/// Initializes [`tracing-subscriber`].
///
/// NOTE: the returned [`WorkerGuard`] will perform cleanup for the tracing layer that emits logs
///       to files, which means it has to stay alive until the program exits!
///
/// [`tracing-subscriber`]: tracing_subscriber
pub fn init() -> anyhow::Result<Option<WorkerGuard>> {
	let files = files::layer().context("files layer")?;

	match files {
		None => {
			tracing_subscriber::registry().with(stderr::layer()).init();

			tracing::info!(target: "aerobench_api::audit_log", "initialized logging");

			Ok(None)
		}
		Some((files_layer, guard)) => {
			tracing_subscriber::registry()
				.with(stderr::layer())
				.with(files_layer)
				.init();

			tracing::info!(target: "aerobench_api::audit_log", "initialized logging");

			Ok(Some(guard))
		}
	}
}
