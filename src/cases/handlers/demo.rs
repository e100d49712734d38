//! Handlers for the `/cases/demo` route.

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::cases::{demo, PublicCase};
use crate::parameters::Limit;
use crate::{responses, Result};

/// Query parameters for `GET /cases/demo`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetParams {
	/// How many demo cases to generate.
	#[serde(default)]
	#[param(value_type = u64)]
	count: Limit<10, 3>,
}

/// Generate sample cases.
///
/// These are not real benchmark cases: there is no ground truth for them and they cannot be
/// submitted against. Clients use them to render something sensible before the first publication.
#[tracing::instrument(level = "debug")]
#[utoipa::path(
  get,
  path = "/cases/demo",
  tag = "Cases",
  params(GetParams),
  responses(
    (status = OK, body = Vec<PublicCase>),
    responses::BadRequest,
  ),
)]
pub async fn get(Query(GetParams { count }): Query<GetParams>) -> Result<Json<Vec<PublicCase>>> {
	#[allow(clippy::cast_possible_truncation)]
	Ok(Json(demo::demo_cases(count.0 as usize)))
}
