//! Everything related to the leaderboard.

use axum::routing::get;
use axum::Router;

use crate::middleware::cors;

mod models;

#[doc(inline)]
pub use models::{Leaderboard, LeaderboardEntry};

pub mod queries;
pub mod handlers;

/// Returns a router with routes for `/leaderboard`.
pub fn router(state: &'static crate::State) -> Router {
	Router::new()
		.route("/", get(handlers::root::get))
		.route_layer(cors::permissive())
		.with_state(state)
}

#[cfg(test)]
mod tests {
	use axum::extract::{Query, State};

	use super::*;
	use crate::parameters::Limit;
	use crate::scoring::ScoredSubmission;
	use crate::submissions::SubmissionPayload;
	use crate::testing;

	#[tokio::test]
	async fn entries_come_back_best_first() {
		let state = testing::state().await;
		let date = testing::date(2025, 6, 1);

		for (name, email, score, total_error, seconds) in [
			("A", "a@example.com", 90.0, 0.5, 1),
			("B", "b@example.com", 90.0, 0.5, 2),
			("C", "c@example.com", 95.0, 1.0, 3),
		] {
			let scored = ScoredSubmission {
				score,
				total_error,
				correct_cases: 0,
				breakdown: Vec::new(),
			};

			let payload = SubmissionPayload {
				predictions: Vec::new(),
				breakdown: Vec::new(),
			};

			crate::submissions::queries::insert(
				&state.database,
				date,
				name,
				email,
				"",
				&scored,
				&payload,
				chrono::DateTime::from_timestamp(1_748_761_200 + seconds, 0).expect("timestamp"),
			)
			.await
			.expect("insert submission");
		}

		let leaderboard = handlers::root::get(
			State(state),
			Query(handlers::root::GetParams {
				date: Some(date),
				limit: Limit::default(),
			}),
		)
		.await
		.expect("fetch leaderboard")
		.0;

		let names = leaderboard
			.entries
			.iter()
			.map(|entry| entry.name.as_str())
			.collect::<Vec<_>>();

		assert_eq!(names, ["C", "A", "B"]);
	}

	#[tokio::test]
	async fn empty_day_yields_empty_list() {
		let state = testing::state().await;

		let leaderboard = handlers::root::get(
			State(state),
			Query(handlers::root::GetParams {
				date: Some(testing::date(2025, 6, 1)),
				limit: Limit::default(),
			}),
		)
		.await
		.expect("fetch leaderboard")
		.0;

		assert!(leaderboard.entries.is_empty());
	}

	#[tokio::test]
	async fn limit_caps_the_result() {
		let state = testing::state().await;
		let date = testing::date(2025, 6, 1);

		for idx in 0..5_i64 {
			let scored = ScoredSubmission {
				score: f64::from(100 - idx as i32),
				total_error: 0.0,
				correct_cases: 0,
				breakdown: Vec::new(),
			};

			let payload = SubmissionPayload {
				predictions: Vec::new(),
				breakdown: Vec::new(),
			};

			crate::submissions::queries::insert(
				&state.database,
				date,
				"P",
				&format!("p{idx}@example.com"),
				"",
				&scored,
				&payload,
				chrono::DateTime::from_timestamp(1_748_761_200 + idx, 0).expect("timestamp"),
			)
			.await
			.expect("insert submission");
		}

		let leaderboard = handlers::root::get(
			State(state),
			Query(handlers::root::GetParams {
				date: Some(date),
				limit: Limit(2),
			}),
		)
		.await
		.expect("fetch leaderboard")
		.0;

		assert_eq!(leaderboard.entries.len(), 2);
		assert_eq!(leaderboard.entries[0].score, 100.0);
	}
}
