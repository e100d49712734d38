//! Types used for describing the leaderboard.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// One row of the leaderboard.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct LeaderboardEntry {
	/// The participant's display name.
	pub name: String,

	/// The participant's group / team, if any.
	#[sqlx(rename = "group_name")]
	#[serde(rename = "group")]
	pub group: String,

	/// Total points over all cases.
	pub score: f64,

	/// Sum of combined relative errors over all cases.
	pub total_error: f64,

	/// How many cases were predicted within both correctness thresholds.
	pub correct_cases: i64,

	/// When the submission was created.
	pub created_at: DateTime<Utc>,
}

/// Response body for fetching the leaderboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Leaderboard {
	/// The day this leaderboard is for.
	pub date: NaiveDate,

	/// The entries, best first.
	///
	/// An entry's rank is its 1-based position in this list.
	pub entries: Vec<LeaderboardEntry>,
}
