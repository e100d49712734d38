//! Handlers for the `/cases/latest` route.

use axum::extract::State;
use axum::Json;
use itertools::Itertools;

use crate::cases::{queries, CaseSet};
use crate::{responses, Error, Result};

/// Fetch the most recently published case set.
///
/// "Most recent" follows publication timestamps, falling back to the maximum case date for data
/// without publication records. A `404` means nothing has ever been published.
#[tracing::instrument(level = "debug", skip(state))]
#[utoipa::path(
  get,
  path = "/cases/latest",
  tag = "Cases",
  responses(
    responses::Ok<CaseSet>,
    responses::NotFound,
    responses::InternalServerError,
  ),
)]
pub async fn get(state: State<&'static crate::State>) -> Result<Json<CaseSet>> {
	let date = queries::latest_published_date(&state.database)
		.await?
		.ok_or_else(|| Error::not_found("any published cases"))?;

	let cases = queries::by_date(&state.database, date).await?;

	if cases.is_empty() {
		return Err(Error::not_found("any published cases"));
	}

	let published_at = queries::published_at(&state.database, date).await?;

	Ok(Json(CaseSet {
		date,
		published_at,
		cases: cases.into_iter().map_into().collect(),
	}))
}
