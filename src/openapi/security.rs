//! Security modifiers for the OpenAPI spec.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::openapi::OpenApi;

/// Security modifier for the OpenAPI spec.
pub struct Security;

impl utoipa::Modify for Security {
	fn modify(&self, openapi: &mut OpenApi) {
		let admin_token = SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer));
		let components = openapi.components.get_or_insert_with(Default::default);

		components.add_security_schemes_from_iter([("Admin Token", admin_token)])
	}
}
