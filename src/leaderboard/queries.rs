//! SQL queries for the leaderboard.

use chrono::NaiveDate;
use sqlx::SqliteExecutor;

use crate::leaderboard::LeaderboardEntry;
use crate::Result;

/// Fetches the top `limit` submissions for the given `date`, best first.
///
/// The `ORDER BY` is the ranking's total order; it must stay in sync with
/// [`crate::submissions::queries::count_better()`].
pub async fn top(
	executor: impl SqliteExecutor<'_>,
	date: NaiveDate,
	limit: i64,
) -> Result<Vec<LeaderboardEntry>> {
	sqlx::query_as(
		"SELECT name, group_name, score, total_error, correct_cases, created_at
		 FROM Submissions
		 WHERE date = ?
		 ORDER BY score DESC, total_error ASC, created_at ASC, id ASC
		 LIMIT ?",
	)
	.bind(date)
	.bind(limit)
	.fetch_all(executor)
	.await
	.map_err(Into::into)
}
