//! Helpers and extension traits for [`sqlx`].

use sqlx::error::ErrorKind;

/// Extension trait for [`sqlx::Error`].
pub trait SqlErrorExt {
	/// Checks whether this error was caused by a violated `UNIQUE` constraint.
	///
	/// The one-submission-per-`(date, email)` invariant is enforced by the database, not by
	/// application-level locking; the losing writer of a race sees this error.
	fn is_unique_violation(&self) -> bool;
}

impl SqlErrorExt for sqlx::Error {
	fn is_unique_violation(&self) -> bool {
		self.as_database_error()
			.is_some_and(|err| matches!(err.kind(), ErrorKind::UniqueViolation))
	}
}
