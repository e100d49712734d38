//! Types used for describing submissions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::scoring::CaseScore;

/// A participant's prediction for a single case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Prediction {
	/// The ID of the case this prediction is for.
	pub case_id: i64,

	/// The predicted lift coefficient.
	pub cl: f64,

	/// The predicted drag coefficient.
	pub cd: f64,
}

/// Request body for submitting predictions.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewSubmission {
	/// The day to submit for.
	///
	/// Defaults to the current UTC day.
	pub date: Option<NaiveDate>,

	/// The participant's display name.
	pub name: String,

	/// The participant's email address.
	///
	/// Only one submission per email and day is accepted. Normalized to lowercase before
	/// storage.
	pub email: String,

	/// The participant's group / team, if any.
	#[serde(default)]
	pub group: String,

	/// One prediction per published case.
	pub predictions: Vec<Prediction>,
}

/// Response body for a scored submission.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmissionReceipt {
	/// The day this submission was scored against.
	pub date: NaiveDate,

	/// Total points over all cases.
	pub score: f64,

	/// Sum of combined relative errors over all cases.
	pub total_error: f64,

	/// How many cases were predicted within both correctness thresholds.
	pub correct_cases: i64,

	/// The submission's rank at the time of submission.
	///
	/// Point-in-time: later submissions shift leaderboard ranks, but this value is not
	/// retroactively updated.
	pub rank: i64,

	/// Per-case scores, in ascending `case_id` order.
	pub breakdown: Vec<CaseScore>,
}

/// The raw payload persisted with every submission, for audits.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionPayload {
	/// The predictions exactly as submitted.
	pub predictions: Vec<Prediction>,

	/// The per-case scores computed at submission time.
	pub breakdown: Vec<CaseScore>,
}

/// A submission's ranking keys, as persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingKeys {
	/// The submission's row ID.
	pub id: i64,

	/// Total points.
	pub score: f64,

	/// Sum of combined errors.
	pub total_error: f64,

	/// When the submission was created.
	pub created_at: DateTime<Utc>,
}
