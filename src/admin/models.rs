//! Types used for admin operations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One case of a new case set, ground truth included.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewCase {
	/// The case's ID, unique within the set.
	pub case_id: i64,

	/// Name of the airfoil geometry.
	pub airfoil: String,

	/// Freestream Mach number.
	pub mach: f64,

	/// Reynolds number.
	pub reynolds: f64,

	/// Angle of attack, in degrees.
	pub aoa: f64,

	/// The airfoil surface as an ordered `(x, y)` polyline.
	#[schema(value_type = Vec<Vec<f64>>)]
	pub coordinates: Vec<[f64; 2]>,

	/// Ground-truth lift coefficient.
	pub cl: f64,

	/// Ground-truth drag coefficient.
	pub cd: f64,
}

/// Request body for publishing a day's case set.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewCaseSet {
	/// The day to publish for.
	pub date: NaiveDate,

	/// The cases; must be non-empty.
	pub cases: Vec<NewCase>,

	/// Whether to also delete any existing submissions for this day.
	///
	/// Off by default; opting in makes republishing a clean reset of both inputs and
	/// results.
	#[serde(default)]
	pub reset_submissions: bool,
}

/// Response body for a successful publication.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublishedCaseSet {
	/// The day that was published.
	pub date: NaiveDate,

	/// The publication timestamp that was recorded.
	pub published_at: DateTime<Utc>,

	/// How many cases were published.
	pub cases_published: usize,

	/// Whether existing submissions for the day were deleted.
	pub reset_submissions: bool,
}
