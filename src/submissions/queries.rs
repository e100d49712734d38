//! SQL queries for submissions.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::SqliteExecutor;

use crate::scoring::ScoredSubmission;
use crate::sqlx::SqlErrorExt;
use crate::submissions::{RankingKeys, SubmissionPayload};
use crate::{Error, Result};

/// Inserts a new submission and returns its row ID.
///
/// The `(date, email)` `UNIQUE` constraint settles duplicate submissions, including racing
/// ones: the second writer gets a conflict error.
pub async fn insert(
	executor: impl SqliteExecutor<'_>,
	date: NaiveDate,
	name: &str,
	email: &str,
	group: &str,
	scored: &ScoredSubmission,
	payload: &SubmissionPayload,
	created_at: DateTime<Utc>,
) -> Result<i64> {
	sqlx::query(
		"INSERT INTO Submissions
		   (date, name, email, group_name, score, total_error, correct_cases, payload, created_at)
		 VALUES
		   (?, ?, ?, ?, ?, ?, ?, ?, ?)",
	)
	.bind(date)
	.bind(name)
	.bind(email)
	.bind(group)
	.bind(scored.score)
	.bind(scored.total_error)
	.bind(scored.correct_cases)
	.bind(Json(payload))
	.bind(created_at)
	.execute(executor)
	.await
	.map(|result| result.last_insert_rowid())
	.map_err(|err| {
		if err.is_unique_violation() {
			Error::already_exists("a submission for this date and email")
		} else {
			Error::from(err)
		}
	})
}

/// Counts the same-day submissions that are strictly better than the given ranking keys.
///
/// "Strictly better" follows the leaderboard's total order: higher score, then lower total
/// error, then earlier creation, then lower row ID. The rank is this count plus one.
pub async fn count_better(
	executor: impl SqliteExecutor<'_>,
	date: NaiveDate,
	keys: &RankingKeys,
) -> Result<i64> {
	sqlx::query_scalar(
		"SELECT COUNT(*)
		 FROM Submissions
		 WHERE date = ?
		   AND (
		     score > ?
		     OR (score = ? AND total_error < ?)
		     OR (score = ? AND total_error = ? AND created_at < ?)
		     OR (score = ? AND total_error = ? AND created_at = ? AND id < ?)
		   )",
	)
	.bind(date)
	.bind(keys.score)
	.bind(keys.score)
	.bind(keys.total_error)
	.bind(keys.score)
	.bind(keys.total_error)
	.bind(keys.created_at)
	.bind(keys.score)
	.bind(keys.total_error)
	.bind(keys.created_at)
	.bind(keys.id)
	.fetch_one(executor)
	.await
	.map_err(Into::into)
}
