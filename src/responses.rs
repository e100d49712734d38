//! Response helpers, both for axum and the OpenAPI spec.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as AxumResponse};
use utoipa::openapi::response::Response as OpenApiResponse;
use utoipa::openapi::RefOr;
use utoipa::{IntoResponses, ToSchema};

/// A generic `200 OK` response, for the OpenAPI spec.
#[derive(IntoResponses)]
#[response(status = OK)]
pub struct Ok<T: ToSchema<'static>>(#[to_schema] T);

/// Wrapper struct for turning any `T` into a [Response] with status code 201.
///
/// [Response]: axum::response::Response
#[derive(Debug)]
pub struct Created<T>(pub T);

impl<T> IntoResponses for Created<T>
where
	T: ToSchema<'static>,
{
	fn responses() -> BTreeMap<String, RefOr<OpenApiResponse>> {
		#[derive(IntoResponses)]
		#[response(status = CREATED)]
		struct Helper<T: ToSchema<'static>>(#[to_schema] T);

		Helper::<T>::responses()
	}
}

impl<T> IntoResponse for Created<T>
where
	T: IntoResponse,
{
	fn into_response(self) -> AxumResponse {
		(StatusCode::CREATED, self.0).into_response()
	}
}

/// A `400 Bad Request` response, for the OpenAPI spec.
#[derive(IntoResponses)]
#[response(status = BAD_REQUEST)]
pub struct BadRequest;

/// A `401 Unauthorized` response, for the OpenAPI spec.
#[derive(IntoResponses)]
#[response(status = UNAUTHORIZED)]
pub struct Unauthorized;

/// A `404 Not Found` response, for the OpenAPI spec.
///
/// Clients treat this as the distinct "nothing published yet" signal.
#[derive(IntoResponses)]
#[response(status = NOT_FOUND)]
pub struct NotFound;

/// A `409 Conflict` response, for the OpenAPI spec.
#[derive(IntoResponses)]
#[response(status = CONFLICT)]
pub struct Conflict;

/// A `500 Internal Server Error` response, for the OpenAPI spec.
#[derive(IntoResponses)]
#[response(status = INTERNAL_SERVER_ERROR, description = "Something unexpected happened. This is a bug; please report it.")]
pub struct InternalServerError;
