//! CORS middlewares.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowMethods, AllowOrigin, CorsLayer};

/// Creates a permissive CORS layer that allows `GET` requests.
pub fn permissive() -> CorsLayer {
	CorsLayer::permissive().allow_methods([Method::GET])
}

/// Creates a CORS layer for mutating routes.
///
/// If an origin has been configured, only that exact origin is allowed; otherwise any origin is
/// accepted, which is what you want for local development.
pub fn submissions<M>(methods: M, configured_origin: Option<&str>) -> CorsLayer
where
	M: Into<AllowMethods>,
{
	let allow_origin = configured_origin
		.and_then(|origin| HeaderValue::from_str(origin).ok())
		.map_or_else(AllowOrigin::any, AllowOrigin::exact);

	CorsLayer::new()
		.allow_methods(methods)
		.allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
		.allow_origin(allow_origin)
}
