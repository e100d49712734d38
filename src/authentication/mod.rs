//! Admin authentication.
//!
//! Admin operations are gated by a single shared bearer token, supplied via the `Authorization`
//! header and compared for exact equality against [`Config::admin_token`].
//!
//! [`Config::admin_token`]: crate::Config::admin_token

use axum::extract::FromRequestParts;
use axum::http::request;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

use crate::{Error, Result};

/// An extractor that rejects any request not carrying the configured admin bearer token.
///
/// A missing, malformed, or mismatching `Authorization` header all produce the same
/// `401 Unauthorized` response, so the token cannot be probed.
#[derive(Debug, Clone, Copy)]
pub struct AdminToken;

#[axum::async_trait]
impl FromRequestParts<&'static crate::State> for AdminToken {
	type Rejection = Error;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &&'static crate::State,
	) -> Result<Self> {
		let TypedHeader(Authorization(bearer)) =
			TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
				.await
				.map_err(|err| Error::unauthorized().context(err))?;

		if bearer.token() != state.config.admin_token {
			return Err(Error::unauthorized().context("admin token mismatch"));
		}

		Ok(Self)
	}
}
