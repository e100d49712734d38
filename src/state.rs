//! The API's main application state.
//!
//! This is initialized once on startup, and then passed around the application by axum.

use derive_more::Debug;
use sqlx::{Pool, Sqlite, Transaction};

use crate::Result;

/// Embedded database migrations.
///
/// These run once on startup, before the server accepts any requests.
pub static MIGRATIONS: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// The main application state.
///
/// A `'static` reference to this is passed around the application.
#[derive(Debug)]
pub struct State {
	/// The API configuration.
	pub config: crate::Config,

	/// Connection pool to the backing database.
	#[debug(skip)]
	pub database: Pool<Sqlite>,
}

impl State {
	/// Creates a new [`State`] object and leaks it on the heap.
	///
	/// **This function should only ever be called once; it leaks memory.**
	pub async fn new(config: crate::Config) -> Result<&'static Self> {
		let database = Pool::connect(config.database_url.as_str()).await?;

		MIGRATIONS
			.run(&database)
			.await
			.map_err(|err| crate::Error::logic("failed to run migrations").context(err))?;

		Ok(Box::leak(Box::new(Self { config, database })))
	}

	/// Begins a new database transaction.
	pub async fn transaction(&self) -> Result<Transaction<'static, Sqlite>> {
		self.database.begin().await.map_err(Into::into)
	}
}
