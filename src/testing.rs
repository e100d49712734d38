//! This module contains helpers for unit/integration tests.

use chrono::{NaiveDate, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::types::Json;
use sqlx::{Pool, Sqlite};
use url::Url;

use crate::{state, Config};

/// Creates a fresh application state backed by an in-memory database.
///
/// The pool is capped at a single connection; an in-memory SQLite database lives and dies with
/// its connection, so the pool must never open a second (empty) one, and idle/lifetime reaping
/// is disabled for the same reason.
pub async fn state() -> &'static crate::State {
	let database = SqlitePoolOptions::new()
		.max_connections(1)
		.idle_timeout(None)
		.max_lifetime(None)
		.connect("sqlite::memory:")
		.await
		.expect("connect to in-memory database");

	state::MIGRATIONS
		.run(&database)
		.await
		.expect("run migrations");

	let config = Config {
		addr: "127.0.0.1:0".parse().expect("valid addr"),
		database_url: Url::parse("sqlite::memory:").expect("valid url"),
		admin_token: String::from("test"),
		cors_origin: None,
	};

	Box::leak(Box::new(crate::State { config, database }))
}

/// Shorthand for constructing a [`NaiveDate`] in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Publishes a minimal case set for `date`.
///
/// Each `(case_id, cl, cd)` tuple becomes one case with fixed flow conditions and a stub
/// geometry; a matching publication record is written as well.
pub async fn publish_cases(database: &Pool<Sqlite>, date: NaiveDate, cases: &[(i64, f64, f64)]) {
	for &(case_id, cl, cd) in cases {
		sqlx::query(
			"INSERT INTO BenchmarkCases
			   (date, case_id, airfoil, mach, reynolds, aoa, coordinates, cl, cd)
			 VALUES (?, ?, 'NACA 2412', 0.2, 1000000.0, 4.0, ?, ?, ?)",
		)
		.bind(date)
		.bind(case_id)
		.bind(Json(vec![[1.0_f64, 0.0], [0.5, 0.06], [0.0, 0.0]]))
		.bind(cl)
		.bind(cd)
		.execute(database)
		.await
		.expect("insert case");
	}

	sqlx::query(
		"INSERT INTO Publications (date, published_at)
		 VALUES (?, ?)
		 ON CONFLICT (date) DO UPDATE SET published_at = excluded.published_at",
	)
	.bind(date)
	.bind(Utc::now())
	.execute(database)
	.await
	.expect("insert publication");
}

/// Global constructor that will run before tests.
#[ctor::ctor]
fn ctor() {
	use tracing_subscriber::EnvFilter;

	tracing_subscriber::fmt()
		.compact()
		.with_ansi(true)
		.with_file(true)
		.with_level(true)
		.with_line_number(true)
		.with_target(true)
		.with_test_writer()
		.with_env_filter(EnvFilter::from_default_env())
		.init();
}
