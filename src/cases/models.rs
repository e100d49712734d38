//! Types used for describing benchmark cases.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

/// A single benchmark case, ground truth included.
///
/// This is the internal representation; it must never be serialized into a response while the
/// day is still open. The participant-facing view is [`PublicCase`].
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkCase {
	/// The day this case belongs to.
	pub date: NaiveDate,

	/// The case's ID, unique within its day.
	pub case_id: i64,

	/// Name of the airfoil geometry (e.g. `NACA 2412`).
	pub airfoil: String,

	/// Freestream Mach number.
	pub mach: f64,

	/// Reynolds number.
	pub reynolds: f64,

	/// Angle of attack, in degrees.
	pub aoa: f64,

	/// The airfoil surface as an ordered `(x, y)` polyline.
	pub coordinates: Vec<[f64; 2]>,

	/// Ground-truth lift coefficient.
	pub cl: f64,

	/// Ground-truth drag coefficient.
	pub cd: f64,
}

impl FromRow<'_, SqliteRow> for BenchmarkCase {
	fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
		Ok(Self {
			date: row.try_get("date")?,
			case_id: row.try_get("case_id")?,
			airfoil: row.try_get("airfoil")?,
			mach: row.try_get("mach")?,
			reynolds: row.try_get("reynolds")?,
			aoa: row.try_get("aoa")?,
			coordinates: row.try_get::<Json<Vec<[f64; 2]>>, _>("coordinates")?.0,
			cl: row.try_get("cl")?,
			cd: row.try_get("cd")?,
		})
	}
}

/// The participant-facing view of a [`BenchmarkCase`].
///
/// Identical to the internal representation, minus the ground-truth coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicCase {
	/// The case's ID, unique within its day.
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
}

impl From<BenchmarkCase> for PublicCase {
	fn from(case: BenchmarkCase) -> Self {
		Self {
			case_id: case.case_id,
			airfoil: case.airfoil,
			mach: case.mach,
			reynolds: case.reynolds,
			aoa: case.aoa,
			coordinates: case.coordinates,
		}
	}
}

/// Response body for fetching a day's case set.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CaseSet {
	/// The day this case set belongs to.
	pub date: NaiveDate,

	/// When this case set was published.
	///
	/// `None` for case sets that predate publication timestamps.
	pub published_at: Option<DateTime<Utc>>,

	/// The cases, in ascending `case_id` order.
	pub cases: Vec<PublicCase>,
}
