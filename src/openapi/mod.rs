//! Everything related to [OpenAPI].
//!
//! This project uses the [`utoipa`] crate for generating an OpenAPI specification from code.
//! The [`Spec`] struct in this module lists out all the relevant types, routes, and other metadata
//! that will be included in the spec.
//!
//! [OpenAPI]: https://spec.openapis.org/oas/latest.html

use derive_more::{Deref, DerefMut};
use itertools::Itertools;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::security::Security;

pub mod security;

#[derive(Debug, Clone, Deref, DerefMut, OpenApi)]
#[openapi(
  info(
    title = "AeroBench API",
    description = "Daily airfoil aerodynamics benchmark: fetch cases, submit predictions, read the leaderboard.",
  ),
  modifiers(&Security),
  paths(
    crate::cases::handlers::root::get,
    crate::cases::handlers::latest::get,
    crate::cases::handlers::demo::get,

    crate::submissions::handlers::root::post,

    crate::leaderboard::handlers::root::get,

    crate::admin::handlers::publish::post,
  ),
  components(
    schemas(
      crate::parameters::Limit,

      crate::cases::PublicCase,
      crate::cases::CaseSet,

      crate::scoring::CaseScore,

      crate::submissions::Prediction,
      crate::submissions::NewSubmission,
      crate::submissions::SubmissionReceipt,

      crate::leaderboard::LeaderboardEntry,
      crate::leaderboard::Leaderboard,

      crate::admin::NewCase,
      crate::admin::NewCaseSet,
      crate::admin::PublishedCaseSet,
    ),
  ),
)]
#[allow(missing_docs)]
pub struct Spec(utoipa::openapi::OpenApi);

impl Spec {
	/// Creates a new [`Spec`].
	pub fn new() -> Self {
		Self(Self::openapi())
	}

	/// Returns an iterator over the registered API routes and their allowed HTTP methods.
	pub fn routes(&self) -> impl Iterator<Item = (&str, String)> {
		self.paths.paths.iter().map(|(path, handler)| {
			let methods = handler
				.operations
				.keys()
				.map(|method| format!("{method:?}").to_uppercase())
				.join(", ");

			(path.as_str(), methods)
		})
	}

	/// Generates a JSON representation of this OpenAPI spec.
	pub fn as_json(&self) -> String {
		self.to_pretty_json().expect("spec is valid")
	}

	/// Creates a [`SwaggerUi`], which can be turned into an [`axum::Router`], that will serve
	/// a SwaggerUI web page and a JSON file representing this OpenAPI spec.
	pub fn swagger_ui(self) -> SwaggerUi {
		SwaggerUi::new("/docs/swagger-ui").url("/docs/openapi.json", self.0)
	}
}
