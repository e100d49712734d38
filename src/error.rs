//! Runtime errors.
//!
//! This module exposes the [`Error`] type that is used across the code base for bubbling up
//! errors. Any foreign errors that can occur at runtime can be turned into an [`Error`]. Specific
//! error cases have dedicated constructors, see all the public methods on [`Error`].
//!
//! [`Error`] implements [`IntoResponse`], which means it can be returned from HTTP handlers,
//! middleware, etc.
//!
//! This module also exposes a [`Result`] type alias, which sets [`Error`] as the default `E` type
//! parameter.
//!
//! [`Error`]: struct@Error

use std::fmt::{self, Display, Formatter};
use std::panic::Location;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use itertools::Itertools;
use serde_json::json;
use thiserror::Error;

/// Type alias for a [`Result<T, E>`] with its `E` parameter set to [`Error`].
///
/// [`Result`]: std::result::Result
/// [`Error`]: struct@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The API's core error type.
///
/// Any errors that ever reach the outside should be this type.
/// It carries information about the kind of error that occurred, where it occurred, and any extra
/// information like error sources or debug messages.
///
/// This type implements [`IntoResponse`], which means it can be returned from HTTP handlers,
/// middleware, etc.
#[derive(Debug, Error)]
pub struct Error {
	/// The kind of error that occurred.
	///
	/// This is used for determining the HTTP status code and error message for the response
	/// body, when an error is returned from a request.
	kind: ErrorKind,

	/// The source code location of where the error occurred.
	///
	/// This is used for debugging / troubleshooting, and is included in logs.
	location: Location<'static>,

	/// Extra information about the error, like source errors or debug messages.
	attachments: Vec<Attachment>,
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let Self {
			kind,
			location,
			attachments,
		} = self;

		write!(f, "[{location}] {kind}")?;

		if !attachments.is_empty() {
			write!(f, ":")?;

			for attachment in attachments.iter().rev() {
				write!(f, "\n  - {attachment}")?;
			}
		}

		Ok(())
	}
}

/// The different kinds of errors that can occur at runtime.
///
/// Every individual error case should be covered by this enum, with its own error message and any
/// extra information that is necessary to keep around.
#[allow(clippy::missing_docs_in_private_items)]
#[derive(Debug, Error)]
enum ErrorKind {
	#[error("could not find {what}")]
	NotFound { what: String },

	#[error("invalid {what}")]
	InvalidInput { what: String },

	#[error("you are not permitted to perform this action")]
	Unauthorized,

	#[error("{what} already exists")]
	AlreadyExists { what: &'static str },

	#[error("logic assertion failed: {0}")]
	Logic(String),

	#[cfg_attr(test, error("database error: {0}"))]
	#[cfg_attr(not(test), error("database error"))]
	Database(#[from] sqlx::Error),
}

#[allow(clippy::missing_docs_in_private_items)]
type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Generic error attachments.
#[derive(Debug, derive_more::Display)]
#[display("'{context}' at {location}")]
struct Attachment {
	/// The attachment context.
	///
	/// This could be a more concrete error type, e.g. from a third party crate, or simply an
	/// error message.
	context: BoxedError,

	/// The source code location of where this attachment was created.
	location: Location<'static>,
}

impl Attachment {
	/// Creates a new [`Attachment`].
	#[track_caller]
	fn new<C>(context: C) -> Self
	where
		C: Into<BoxedError>,
	{
		Self {
			context: context.into(),
			location: *Location::caller(),
		}
	}
}

impl Error {
	/// Creates a new [`Error`] of the given [`ErrorKind`].
	///
	/// [`Error`]: struct@Error
	#[track_caller]
	fn new<E>(kind: E) -> Self
	where
		E: Into<ErrorKind>,
	{
		Self {
			kind: kind.into(),
			location: *Location::caller(),
			attachments: Vec::new(),
		}
	}

	/// Attach additional context to an error.
	///
	/// This can be another, more concrete, error type, or simply an error message.
	/// If `ctx` is also an [`Error`], it will have its attachments transferred to `self`.
	///
	/// [`Error`]: struct@Error
	#[track_caller]
	pub(crate) fn context<E>(mut self, ctx: E) -> Self
	where
		E: Into<BoxedError>,
	{
		match Into::<BoxedError>::into(ctx).downcast::<Self>() {
			Ok(mut err) => {
				self.attachments.append(&mut err.attachments);
				self.attachments.push(Attachment::new(err.kind));
			}
			Err(other) => {
				self.attachments.push(Attachment::new(other));
			}
		}

		self
	}

	/// An error signaling that a resource could not be found.
	///
	/// Most notably this is returned when cases are requested for a date without a published
	/// case set; clients rely on the distinct `404` to switch into their waiting/demo state.
	///
	/// Produces a `404 Not Found` status.
	#[track_caller]
	pub(crate) fn not_found<T>(what: T) -> Self
	where
		T: Display,
	{
		Self::new(ErrorKind::NotFound {
			what: what.to_string(),
		})
	}

	/// An error signaling invalid user input.
	///
	/// Produces a `400 Bad Request` status.
	#[track_caller]
	pub(crate) fn invalid<T>(what: T) -> Self
	where
		T: Display,
	{
		Self::new(ErrorKind::InvalidInput {
			what: what.to_string(),
		})
	}

	/// A generic `401 Unauthorized` error.
	///
	/// If you can, you should [attach additional context][context] to such an error to make
	/// debugging the cause of the error easier later.
	///
	/// [context]: Error::context()
	#[track_caller]
	pub(crate) fn unauthorized() -> Self {
		Self::new(ErrorKind::Unauthorized)
	}

	/// An error signaling that a resource already exists.
	///
	/// This is how the one-submission-per-`(date, email)` invariant surfaces: the second
	/// writer trips the database's `UNIQUE` constraint and gets this error back.
	///
	/// Produces a `409 Conflict` status.
	#[track_caller]
	pub(crate) fn already_exists(what: &'static str) -> Self {
		Self::new(ErrorKind::AlreadyExists { what })
	}

	/// A generic `500 Internal Server Error`.
	///
	/// This constructor is reserved for errors that _should not_ occur, but _may_ occur. If
	/// such an error is ever returned, that's a bug.
	#[track_caller]
	pub(crate) fn logic<T>(message: T) -> Self
	where
		T: Display,
	{
		Self::new(ErrorKind::Logic(message.to_string()))
	}

	/// Whether this error represents a "not found" condition.
	#[cfg(test)]
	pub(crate) fn is_not_found(&self) -> bool {
		matches!(self.kind, ErrorKind::NotFound { .. })
	}

	/// Whether this error represents an "already exists" condition.
	#[cfg(test)]
	pub(crate) fn is_conflict(&self) -> bool {
		matches!(self.kind, ErrorKind::AlreadyExists { .. })
	}

	/// Whether this error represents invalid user input.
	#[cfg(test)]
	pub(crate) fn is_invalid_input(&self) -> bool {
		matches!(self.kind, ErrorKind::InvalidInput { .. })
	}
}

impl IntoResponse for Error {
	#[track_caller]
	fn into_response(self) -> Response {
		use ErrorKind as E;

		let message = self.kind.to_string();
		let status = match self.kind {
			E::InvalidInput { .. } => StatusCode::BAD_REQUEST,
			E::Unauthorized => StatusCode::UNAUTHORIZED,
			E::NotFound { .. } => StatusCode::NOT_FOUND,
			E::AlreadyExists { .. } => StatusCode::CONFLICT,
			E::Logic(_) | E::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
		};

		if status == StatusCode::INTERNAL_SERVER_ERROR {
			tracing::error!(?self, "internal server error occurred");
		} else {
			tracing::debug! {
				location = %self.location,
				kind = ?self.kind,
				attachments = ?self.attachments,
				error_message = %message,
				"returning error from request handler"
			};
		}

		let mut json = json!({ "message": message });

		#[allow(clippy::indexing_slicing)]
		if !self.attachments.is_empty() {
			json["debug_info"] = self
				.attachments
				.iter()
				.rev()
				.map(|attachment| format!("{attachment}"))
				.collect_vec()
				.into();
		}

		(status, Json(json)).into_response()
	}
}

impl From<sqlx::Error> for Error {
	#[track_caller]
	fn from(error: sqlx::Error) -> Self {
		use sqlx::Error as E;

		match error {
			error @ (E::Configuration(_) | E::Tls(_) | E::AnyDriverError(_) | E::Migrate(_)) => {
				unreachable!("these do not happen after initial setup ({error})");
			}
			error => Self::new(error),
		}
	}
}
