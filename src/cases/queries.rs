//! SQL queries for benchmark cases and publication records.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Pool, Sqlite, SqliteExecutor};

use crate::cases::BenchmarkCase;
use crate::Result;

/// Base query for `SELECT`ing cases from the database.
pub static SELECT: &str = r#"
	SELECT
	  date,
	  case_id,
	  airfoil,
	  mach,
	  reynolds,
	  aoa,
	  coordinates,
	  cl,
	  cd
	FROM
	  BenchmarkCases
"#;

/// Fetches all cases for the given `date`, in ascending `case_id` order.
pub async fn by_date(
	executor: impl SqliteExecutor<'_>,
	date: NaiveDate,
) -> Result<Vec<BenchmarkCase>> {
	let query = format!("{SELECT} WHERE date = ? ORDER BY case_id ASC");

	sqlx::query_as(&query)
		.bind(date)
		.fetch_all(executor)
		.await
		.map_err(Into::into)
}

/// Fetches the publication timestamp for the given `date`, if one was recorded.
pub async fn published_at(
	executor: impl SqliteExecutor<'_>,
	date: NaiveDate,
) -> Result<Option<DateTime<Utc>>> {
	sqlx::query_scalar("SELECT published_at FROM Publications WHERE date = ?")
		.bind(date)
		.fetch_optional(executor)
		.await
		.map_err(Into::into)
}

/// Resolves the most recently published date.
///
/// Publication records are authoritative; if none exist (e.g. for data imported before
/// publication timestamps were recorded), the maximum date with any cases is used instead.
/// `None` means nothing has ever been published.
pub async fn latest_published_date(database: &Pool<Sqlite>) -> Result<Option<NaiveDate>> {
	let by_publication: Option<NaiveDate> =
		sqlx::query_scalar("SELECT date FROM Publications ORDER BY published_at DESC LIMIT 1")
			.fetch_optional(database)
			.await?;

	if by_publication.is_some() {
		return Ok(by_publication);
	}

	sqlx::query_scalar("SELECT MAX(date) FROM BenchmarkCases")
		.fetch_one(database)
		.await
		.map_err(Into::into)
}
