//! Handlers for the `/cases` route.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use itertools::Itertools;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::cases::{queries, CaseSet};
use crate::{responses, Error, Result};

/// Query parameters for `GET /cases`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetParams {
	/// The day to fetch cases for.
	///
	/// Defaults to the current UTC day.
	pub date: Option<NaiveDate>,
}

/// Fetch the case set for a specific day.
///
/// Ground-truth coefficients are never included. A `404` means nothing has been published for
/// that day (yet).
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  get,
  path = "/cases",
  tag = "Cases",
  params(GetParams),
  responses(
    responses::Ok<CaseSet>,
    responses::BadRequest,
    responses::NotFound,
    responses::InternalServerError,
  ),
)]
pub async fn get(
	state: State<&'static crate::State>,
	Query(GetParams { date }): Query<GetParams>,
) -> Result<Json<CaseSet>> {
	let date = date.unwrap_or_else(|| Utc::now().date_naive());
	let cases = queries::by_date(&state.database, date).await?;

	if cases.is_empty() {
		return Err(Error::not_found(format_args!("cases for `{date}`")));
	}

	let published_at = queries::published_at(&state.database, date).await?;

	Ok(Json(CaseSet {
		date,
		published_at,
		cases: cases.into_iter().map_into().collect(),
	}))
}
