use aerobench_api::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	if let Err(error) = dotenvy::dotenv() {
		eprintln!("Failed to load `.env` file: {error}");
	}

	let config = Config::new()?;

	// Keep the guard alive; dropping it stops the file-logging worker.
	let _guard = aerobench_api::logging::init()?;

	tracing::info!(?config, "starting up");

	aerobench_api::run(config).await
}
