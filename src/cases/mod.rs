//! Everything related to benchmark cases.
//!
//! A "case" is one prediction task: an airfoil geometry plus flow conditions, with a hidden
//! ground-truth coefficient pair. Cases are published in per-day sets by an admin and are
//! immutable until the day is republished.

use axum::routing::get;
use axum::Router;

use crate::middleware::cors;

mod models;

#[doc(inline)]
pub use models::{BenchmarkCase, CaseSet, PublicCase};

pub mod demo;
pub mod queries;
pub mod handlers;

/// Returns a router with routes for `/cases`.
pub fn router(state: &'static crate::State) -> Router {
	Router::new()
		.route("/", get(handlers::root::get))
		.route("/latest", get(handlers::latest::get))
		.route("/demo", get(handlers::demo::get))
		.route_layer(cors::permissive())
		.with_state(state)
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;
	use sqlx::types::Json;
	use sqlx::{Pool, Sqlite};

	use super::*;
	use crate::testing;

	async fn insert_case(database: &Pool<Sqlite>, date: NaiveDate, case_id: i64) {
		sqlx::query(
			"INSERT INTO BenchmarkCases (date, case_id, airfoil, mach, reynolds, aoa, coordinates, cl, cd)
			 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
		)
		.bind(date)
		.bind(case_id)
		.bind("NACA 2412")
		.bind(0.2)
		.bind(1e6)
		.bind(4.0)
		.bind(Json(vec![[1.0, 0.0], [0.0, 0.0]]))
		.bind(0.5)
		.bind(0.02)
		.execute(database)
		.await
		.expect("insert case");
	}

	async fn insert_publication(database: &Pool<Sqlite>, date: NaiveDate, published_at: &str) {
		sqlx::query("INSERT INTO Publications (date, published_at) VALUES (?, ?)")
			.bind(date)
			.bind(published_at)
			.execute(database)
			.await
			.expect("insert publication");
	}

	#[tokio::test]
	async fn fetching_unpublished_date_is_not_found() {
		let state = testing::state().await;

		// empty is fine at the query level; the handler turns it into a 404
		let cases = queries::by_date(&state.database, testing::date(2025, 6, 1))
			.await
			.expect("query cases");

		assert!(cases.is_empty());

		let error = handlers::root::get(
			axum::extract::State(state),
			axum::extract::Query(handlers::root::GetParams {
				date: Some(testing::date(2025, 6, 1)),
			}),
		)
		.await
		.expect_err("no cases published");

		assert!(error.is_not_found());
	}

	#[tokio::test]
	async fn latest_follows_publication_timestamps() {
		let state = testing::state().await;

		let old = testing::date(2025, 5, 30);
		let new = testing::date(2025, 5, 31);

		insert_case(&state.database, old, 1).await;
		insert_case(&state.database, new, 1).await;
		insert_publication(&state.database, new, "2025-05-31T06:00:00Z").await;
		// `old` was re-published later; it wins despite the smaller date
		insert_publication(&state.database, old, "2025-06-01T06:00:00Z").await;

		let latest = queries::latest_published_date(&state.database)
			.await
			.expect("query latest");

		assert_eq!(latest, Some(old));
	}

	#[tokio::test]
	async fn latest_falls_back_to_max_case_date() {
		let state = testing::state().await;

		insert_case(&state.database, testing::date(2025, 5, 30), 1).await;
		insert_case(&state.database, testing::date(2025, 5, 31), 1).await;

		let latest = queries::latest_published_date(&state.database)
			.await
			.expect("query latest");

		assert_eq!(latest, Some(testing::date(2025, 5, 31)));
	}

	#[tokio::test]
	async fn latest_with_nothing_published_is_none() {
		let state = testing::state().await;

		let latest = queries::latest_published_date(&state.database)
			.await
			.expect("query latest");

		assert_eq!(latest, None);
	}
}
