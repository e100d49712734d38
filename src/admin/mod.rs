//! Admin operations.
//!
//! Everything under `/admin` requires the configured admin bearer token; see
//! [`crate::authentication`].

use axum::http::Method;
use axum::routing::post;
use axum::Router;

use crate::middleware::cors;

mod models;

#[doc(inline)]
pub use models::{NewCase, NewCaseSet, PublishedCaseSet};

pub mod handlers;

/// Returns a router with routes for `/admin`.
pub fn router(state: &'static crate::State) -> Router {
	Router::new()
		.route("/publish", post(handlers::publish::post))
		.route_layer(cors::submissions(
			[Method::POST],
			state.config.cors_origin.as_deref(),
		))
		.with_state(state)
}

#[cfg(test)]
mod tests {
	use axum::extract::{FromRequestParts, State};
	use axum::http::Request;
	use axum::Json;
	use chrono::NaiveDate;

	use super::*;
	use crate::authentication::AdminToken;
	use crate::{cases, testing};

	fn new_case(case_id: i64, cl: f64, cd: f64) -> NewCase {
		NewCase {
			case_id,
			airfoil: String::from("NACA 2412"),
			mach: 0.2,
			reynolds: 1e6,
			aoa: 4.0,
			coordinates: vec![[1.0, 0.0], [0.5, 0.06], [0.0, 0.0]],
			cl,
			cd,
		}
	}

	fn case_set(date: NaiveDate, cases: Vec<NewCase>) -> NewCaseSet {
		NewCaseSet {
			date,
			cases,
			reset_submissions: false,
		}
	}

	#[tokio::test]
	async fn publishing_makes_cases_available() {
		let state = testing::state().await;
		let date = testing::date(2025, 6, 1);

		let published = handlers::publish::post(
			AdminToken,
			State(state),
			Json(case_set(date, vec![new_case(1, 0.5, 0.02), new_case(2, 1.1, 0.03)])),
		)
		.await
		.expect("publish")
		.0
		 .0;

		assert_eq!(published.date, date);
		assert_eq!(published.cases_published, 2);
		assert!(!published.reset_submissions);

		let cases = cases::queries::by_date(&state.database, date)
			.await
			.expect("query cases");

		assert_eq!(cases.len(), 2);
		assert_eq!(cases[0].case_id, 1);
		assert_eq!(cases[1].case_id, 2);

		let published_at = cases::queries::published_at(&state.database, date)
			.await
			.expect("query publication");

		assert_eq!(published_at, Some(published.published_at));
	}

	#[tokio::test]
	async fn republishing_replaces_the_case_set() {
		let state = testing::state().await;
		let date = testing::date(2025, 6, 1);

		handlers::publish::post(
			AdminToken,
			State(state),
			Json(case_set(date, vec![new_case(1, 0.5, 0.02), new_case(2, 1.1, 0.03)])),
		)
		.await
		.expect("first publish");

		handlers::publish::post(
			AdminToken,
			State(state),
			Json(case_set(date, vec![new_case(7, 0.8, 0.04)])),
		)
		.await
		.expect("second publish");

		let cases = cases::queries::by_date(&state.database, date)
			.await
			.expect("query cases");

		assert_eq!(cases.len(), 1);
		assert_eq!(cases[0].case_id, 7);
	}

	#[tokio::test]
	async fn republishing_can_reset_submissions() {
		let state = testing::state().await;
		let date = testing::date(2025, 6, 1);

		testing::publish_cases(&state.database, date, &[(1, 0.5, 0.02)]).await;

		sqlx::query(
			"INSERT INTO Submissions
			   (date, name, email, group_name, score, total_error, correct_cases, payload, created_at)
			 VALUES (?, 'Ada', 'ada@example.com', '', 100.0, 0.0, 1, '{}', ?)",
		)
		.bind(date)
		.bind(chrono::Utc::now())
		.execute(&state.database)
		.await
		.expect("insert submission");

		handlers::publish::post(AdminToken, State(state), Json(NewCaseSet {
			date,
			cases: vec![new_case(1, 0.6, 0.03)],
			reset_submissions: true,
		}))
		.await
		.expect("republish");

		let count: i64 =
			sqlx::query_scalar("SELECT COUNT(*) FROM Submissions WHERE date = ?")
				.bind(date)
				.fetch_one(&state.database)
				.await
				.expect("count submissions");

		assert_eq!(count, 0);
	}

	#[tokio::test]
	async fn republishing_keeps_submissions_by_default() {
		let state = testing::state().await;
		let date = testing::date(2025, 6, 1);

		testing::publish_cases(&state.database, date, &[(1, 0.5, 0.02)]).await;

		sqlx::query(
			"INSERT INTO Submissions
			   (date, name, email, group_name, score, total_error, correct_cases, payload, created_at)
			 VALUES (?, 'Ada', 'ada@example.com', '', 100.0, 0.0, 1, '{}', ?)",
		)
		.bind(date)
		.bind(chrono::Utc::now())
		.execute(&state.database)
		.await
		.expect("insert submission");

		handlers::publish::post(
			AdminToken,
			State(state),
			Json(case_set(date, vec![new_case(1, 0.6, 0.03)])),
		)
		.await
		.expect("republish");

		let count: i64 =
			sqlx::query_scalar("SELECT COUNT(*) FROM Submissions WHERE date = ?")
				.bind(date)
				.fetch_one(&state.database)
				.await
				.expect("count submissions");

		assert_eq!(count, 1);
	}

	#[tokio::test]
	async fn empty_case_sets_are_rejected() {
		let state = testing::state().await;
		let date = testing::date(2025, 6, 1);

		let error =
			handlers::publish::post(AdminToken, State(state), Json(case_set(date, Vec::new())))
				.await
				.expect_err("empty case set");

		assert!(error.is_invalid_input());
	}

	#[tokio::test]
	async fn duplicate_case_ids_are_rejected() {
		let state = testing::state().await;
		let date = testing::date(2025, 6, 1);

		let error = handlers::publish::post(
			AdminToken,
			State(state),
			Json(case_set(date, vec![new_case(1, 0.5, 0.02), new_case(1, 1.1, 0.03)])),
		)
		.await
		.expect_err("duplicate case ID");

		assert!(error.is_invalid_input());

		// nothing was written
		let cases = cases::queries::by_date(&state.database, date)
			.await
			.expect("query cases");

		assert!(cases.is_empty());
	}

	#[tokio::test]
	async fn requests_without_the_admin_token_are_rejected() {
		let state = testing::state().await;

		let (mut parts, ()) = Request::builder()
			.body(())
			.expect("build request")
			.into_parts();

		let error = AdminToken::from_request_parts(&mut parts, &state)
			.await
			.expect_err("no token");

		assert!(error.to_string().contains("not permitted"));
	}

	#[tokio::test]
	async fn requests_with_a_wrong_token_are_rejected() {
		let state = testing::state().await;

		let (mut parts, ()) = Request::builder()
			.header("Authorization", "Bearer not-the-token")
			.body(())
			.expect("build request")
			.into_parts();

		let error = AdminToken::from_request_parts(&mut parts, &state)
			.await
			.expect_err("wrong token");

		assert!(error.to_string().contains("not permitted"));
	}
}
