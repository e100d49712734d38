//! Handlers for the `/admin/publish` route.

use std::collections::HashSet;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use sqlx::types::Json as SqlJson;
use tracing::info;

use crate::admin::{NewCaseSet, PublishedCaseSet};
use crate::authentication::AdminToken;
use crate::responses::Created;
use crate::{responses, Error, Result};

/// Publish a day's case set.
///
/// Publishing is an upsert: any cases previously published for the day are replaced by the new
/// set, and a publication timestamp is recorded. With `reset_submissions` the day's existing
/// submissions are deleted too. The whole operation is one transaction; concurrent readers see
/// either the old set or the new one, never a mix.
#[tracing::instrument(level = "debug", skip(state, case_set))]
#[utoipa::path(
  post,
  path = "/admin/publish",
  tag = "Admin",
  security(("Admin Token" = [])),
  request_body = NewCaseSet,
  responses(
    responses::Created<PublishedCaseSet>,
    responses::BadRequest,
    responses::Unauthorized,
    responses::InternalServerError,
  ),
)]
pub async fn post(
	AdminToken: AdminToken,
	state: State<&'static crate::State>,
	Json(case_set): Json<NewCaseSet>,
) -> Result<Created<Json<PublishedCaseSet>>> {
	if case_set.cases.is_empty() {
		return Err(Error::invalid("case set; it cannot be empty"));
	}

	let mut seen = HashSet::new();

	for case in &case_set.cases {
		if case.airfoil.trim().is_empty() {
			return Err(Error::invalid(format!(
				"case `{}`; airfoil name cannot be empty",
				case.case_id,
			)));
		}

		let numerics = [case.mach, case.reynolds, case.aoa, case.cl, case.cd];

		if numerics.iter().any(|value| !value.is_finite()) {
			return Err(Error::invalid(format!(
				"case `{}`; all numeric fields must be finite",
				case.case_id,
			)));
		}

		if !seen.insert(case.case_id) {
			return Err(Error::invalid(format!(
				"case set; case ID `{}` appears more than once",
				case.case_id,
			)));
		}
	}

	let published_at = Utc::now();
	let mut transaction = state.transaction().await?;

	sqlx::query("DELETE FROM BenchmarkCases WHERE date = ?")
		.bind(case_set.date)
		.execute(transaction.as_mut())
		.await?;

	if case_set.reset_submissions {
		sqlx::query("DELETE FROM Submissions WHERE date = ?")
			.bind(case_set.date)
			.execute(transaction.as_mut())
			.await?;
	}

	for case in &case_set.cases {
		sqlx::query(
			"INSERT INTO BenchmarkCases
			   (date, case_id, airfoil, mach, reynolds, aoa, coordinates, cl, cd)
			 VALUES
			   (?, ?, ?, ?, ?, ?, ?, ?, ?)",
		)
		.bind(case_set.date)
		.bind(case.case_id)
		.bind(case.airfoil.trim())
		.bind(case.mach)
		.bind(case.reynolds)
		.bind(case.aoa)
		.bind(SqlJson(&case.coordinates))
		.bind(case.cl)
		.bind(case.cd)
		.execute(transaction.as_mut())
		.await?;
	}

	sqlx::query(
		"INSERT INTO Publications (date, published_at)
		 VALUES (?, ?)
		 ON CONFLICT (date) DO UPDATE SET published_at = excluded.published_at",
	)
	.bind(case_set.date)
	.bind(published_at)
	.execute(transaction.as_mut())
	.await?;

	transaction.commit().await?;

	info! {
		target: "aerobench_api::audit_log",
		date = %case_set.date,
		cases = case_set.cases.len(),
		reset_submissions = case_set.reset_submissions,
		"published case set"
	};

	Ok(Created(Json(PublishedCaseSet {
		date: case_set.date,
		published_at,
		cases_published: case_set.cases.len(),
		reset_submissions: case_set.reset_submissions,
	})))
}
