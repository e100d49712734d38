//! Handlers for the `/submissions` route.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use tracing::trace;

use crate::responses::Created;
use crate::submissions::{queries, NewSubmission, RankingKeys, SubmissionPayload, SubmissionReceipt};
use crate::{cases, responses, scoring, Error, Result};

/// Submit predictions for a day's case set.
///
/// The predictions are scored against the hidden ground truth, the submission is persisted, and
/// the response carries the score together with the rank among everything submitted for that day
/// so far. One submission per email and day; a second attempt is rejected with a `409`.
#[tracing::instrument(level = "debug", skip(state, submission))]
#[utoipa::path(
  post,
  path = "/submissions",
  tag = "Submissions",
  request_body = NewSubmission,
  responses(
    responses::Created<SubmissionReceipt>,
    responses::BadRequest,
    responses::NotFound,
    responses::Conflict,
    responses::InternalServerError,
  ),
)]
pub async fn post(
	state: State<&'static crate::State>,
	Json(submission): Json<NewSubmission>,
) -> Result<Created<Json<SubmissionReceipt>>> {
	let name = submission.name.trim();

	if name.is_empty() {
		return Err(Error::invalid("name; it cannot be empty"));
	}

	let email = submission.email.trim().to_lowercase();

	if email.is_empty() || !email.contains('@') {
		return Err(Error::invalid("email address"));
	}

	let group = submission.group.trim();
	let date = submission.date.unwrap_or_else(|| Utc::now().date_naive());
	let cases = cases::queries::by_date(&state.database, date).await?;

	if cases.is_empty() {
		return Err(Error::not_found(format_args!("cases for `{date}`")));
	}

	// All validation happens here, before anything is written.
	let scored = scoring::score_submission(&submission.predictions, &cases)?;

	let payload = SubmissionPayload {
		predictions: submission.predictions,
		breakdown: scored.breakdown.clone(),
	};

	let created_at = Utc::now();
	let mut transaction = state.transaction().await?;

	let id = queries::insert(
		transaction.as_mut(),
		date,
		name,
		&email,
		group,
		&scored,
		&payload,
		created_at,
	)
	.await?;

	let keys = RankingKeys {
		id,
		score: scored.score,
		total_error: scored.total_error,
		created_at,
	};

	let rank = 1 + queries::count_better(transaction.as_mut(), date, &keys).await?;

	transaction.commit().await?;

	trace!(%id, %rank, "inserted submission");

	Ok(Created(Json(SubmissionReceipt {
		date,
		score: scored.score,
		total_error: scored.total_error,
		correct_cases: scored.correct_cases,
		rank,
		breakdown: scored.breakdown,
	})))
}
