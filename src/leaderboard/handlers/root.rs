//! Handlers for the `/leaderboard` route.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::leaderboard::{queries, Leaderboard};
use crate::parameters::Limit;
use crate::{responses, Result};

/// Query parameters for `GET /leaderboard`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetParams {
	/// The day to fetch the leaderboard for.
	///
	/// Defaults to the current UTC day.
	pub date: Option<NaiveDate>,

	/// Limit the number of returned entries.
	#[serde(default)]
	#[param(value_type = u64)]
	pub limit: Limit,
}

/// Fetch the leaderboard for a day.
///
/// The order is recomputed from persisted state on every request; a day with no submissions
/// yields an empty list, not an error.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  get,
  path = "/leaderboard",
  tag = "Leaderboard",
  params(GetParams),
  responses(
    responses::Ok<Leaderboard>,
    responses::BadRequest,
    responses::InternalServerError,
  ),
)]
pub async fn get(
	state: State<&'static crate::State>,
	Query(GetParams { date, limit }): Query<GetParams>,
) -> Result<Json<Leaderboard>> {
	let date = date.unwrap_or_else(|| Utc::now().date_naive());
	let entries = queries::top(&state.database, date, limit.into()).await?;

	Ok(Json(Leaderboard { date, entries }))
}
