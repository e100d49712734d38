//! Everything related to submissions.
//!
//! A submission is one participant's full set of predictions for a day. It is scored once, on
//! arrival, and never mutated afterwards; ranks are always recomputed from persisted state.

use axum::http::Method;
use axum::routing::post;
use axum::Router;

use crate::middleware::cors;

mod models;

#[doc(inline)]
pub use models::{
	NewSubmission, Prediction, RankingKeys, SubmissionPayload, SubmissionReceipt,
};

pub mod queries;
pub mod handlers;

/// Returns a router with routes for `/submissions`.
pub fn router(state: &'static crate::State) -> Router {
	Router::new()
		.route("/", post(handlers::root::post))
		.route_layer(cors::submissions(
			[Method::POST],
			state.config.cors_origin.as_deref(),
		))
		.with_state(state)
}
