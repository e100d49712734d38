//! The scoring engine.
//!
//! Everything in this module is a pure function: per-case correctness and points are computed
//! from a prediction and its ground truth ([`score_case()`]), and a whole submission reduces to
//! totals over its cases ([`score_submission()`]). Identical input always produces identical
//! output, which is what makes scores reproducible for audits and tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::cases::BenchmarkCase;
use crate::submissions::Prediction;
use crate::{Error, Result};

/// Divisor floor for the relative error on lift coefficients.
///
/// Lift coefficients cross zero around small angles of attack; without the floor the relative
/// error blows up near zero lift.
const CL_ERROR_FLOOR: f64 = 1e-3;

/// Divisor floor for the relative error on drag coefficients.
///
/// Tighter than [`CL_ERROR_FLOOR`] because drag coefficients are an order of magnitude smaller.
const CD_ERROR_FLOOR: f64 = 1e-4;

/// Highest number of points a single case can award.
const MAX_POINTS: f64 = 100.0;

/// Points lost per unit of combined relative error.
///
/// A case awards zero points once its combined error reaches 2.0.
const POINTS_PER_ERROR: f64 = 50.0;

/// Largest relative error on the lift coefficient still counted as "correct".
const CL_CORRECT_THRESHOLD: f64 = 0.03;

/// Largest relative error on the drag coefficient still counted as "correct".
const CD_CORRECT_THRESHOLD: f64 = 0.05;

/// The computed result for a single case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CaseScore {
	/// The ID of the case this score belongs to.
	pub case_id: i64,

	/// Points awarded for this case, in `0.0..=100.0`.
	pub points: f64,

	/// Relative error on the predicted lift coefficient.
	pub cl_rel_error: f64,

	/// Relative error on the predicted drag coefficient.
	pub cd_rel_error: f64,

	/// Sum of the two relative errors.
	pub combined_error: f64,

	/// Whether both relative errors are within their correctness thresholds.
	pub is_correct: bool,
}

/// The aggregate result for a full submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSubmission {
	/// Sum of points over all cases.
	pub score: f64,

	/// Sum of combined errors over all cases.
	pub total_error: f64,

	/// How many cases were predicted within both correctness thresholds.
	pub correct_cases: i64,

	/// The per-case scores, in ascending `case_id` order.
	pub breakdown: Vec<CaseScore>,
}

/// Scores a single prediction against its ground truth.
///
/// Both relative errors are floored in the denominator, points decay linearly with the combined
/// error, and correctness requires both errors to be within their (inclusive) thresholds.
pub fn score_case(
	case_id: i64,
	predicted_cl: f64,
	predicted_cd: f64,
	true_cl: f64,
	true_cd: f64,
) -> CaseScore {
	let cl_rel_error = (predicted_cl - true_cl).abs() / true_cl.abs().max(CL_ERROR_FLOOR);
	let cd_rel_error = (predicted_cd - true_cd).abs() / true_cd.abs().max(CD_ERROR_FLOOR);
	let combined_error = cl_rel_error + cd_rel_error;

	CaseScore {
		case_id,
		points: (MAX_POINTS - POINTS_PER_ERROR * combined_error).max(0.0),
		cl_rel_error,
		cd_rel_error,
		combined_error,
		is_correct: cl_rel_error <= CL_CORRECT_THRESHOLD && cd_rel_error <= CD_CORRECT_THRESHOLD,
	}
}

/// Scores a full submission against a day's case set.
///
/// The predictions must cover exactly the published case IDs; a count mismatch, an unknown ID,
/// or a duplicated ID all fail validation before anything is scored. Cases are scored and summed
/// in ascending `case_id` order so that floating-point rounding is reproducible across runs.
pub fn score_submission(
	predictions: &[Prediction],
	cases: &[BenchmarkCase],
) -> Result<ScoredSubmission> {
	if predictions.len() != cases.len() {
		return Err(Error::invalid(format_args!(
			"prediction count; expected {}, got {}",
			cases.len(),
			predictions.len(),
		)));
	}

	let truth_by_id = cases
		.iter()
		.map(|case| (case.case_id, case))
		.collect::<BTreeMap<_, _>>();

	let mut predictions_by_id = BTreeMap::new();

	for prediction in predictions {
		if !truth_by_id.contains_key(&prediction.case_id) {
			return Err(Error::invalid(format_args!(
				"case ID `{}`; it is not part of this case set",
				prediction.case_id,
			)));
		}

		if predictions_by_id
			.insert(prediction.case_id, prediction)
			.is_some()
		{
			return Err(Error::invalid(format_args!(
				"predictions; case ID `{}` appears more than once",
				prediction.case_id,
			)));
		}
	}

	// Equal counts, no unknowns, no duplicates: the prediction IDs are now known to be
	// exactly the published IDs.
	let mut score = 0.0;
	let mut total_error = 0.0;
	let mut correct_cases = 0;
	let mut breakdown = Vec::with_capacity(cases.len());

	for (case_id, prediction) in predictions_by_id {
		let truth = truth_by_id
			.get(&case_id)
			.ok_or_else(|| Error::logic("prediction IDs were validated above"))?;

		let case_score = score_case(case_id, prediction.cl, prediction.cd, truth.cl, truth.cd);

		score += case_score.points;
		total_error += case_score.combined_error;
		correct_cases += i64::from(case_score.is_correct);
		breakdown.push(case_score);
	}

	Ok(ScoredSubmission {
		score,
		total_error,
		correct_cases,
		breakdown,
	})
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;

	const EPSILON: f64 = 1e-9;

	fn case(case_id: i64, cl: f64, cd: f64) -> BenchmarkCase {
		BenchmarkCase {
			date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
			case_id,
			airfoil: String::from("NACA 2412"),
			mach: 0.2,
			reynolds: 1e6,
			aoa: 4.0,
			coordinates: vec![[1.0, 0.0], [0.5, 0.05], [0.0, 0.0]],
			cl,
			cd,
		}
	}

	fn prediction(case_id: i64, cl: f64, cd: f64) -> Prediction {
		Prediction { case_id, cl, cd }
	}

	#[test]
	fn exact_prediction_gets_full_points() {
		let score = score_case(1, 0.5, 0.02, 0.5, 0.02);

		assert_eq!(score.combined_error, 0.0);
		assert_eq!(score.points, 100.0);
		assert!(score.is_correct);
	}

	#[test]
	fn points_bottom_out_at_zero() {
		// combined error is 2.0 exactly
		let at_boundary = score_case(1, 1.5, 0.02, 0.5, 0.02);
		assert!((at_boundary.combined_error - 2.0).abs() < EPSILON);
		assert_eq!(at_boundary.points, 0.0);

		// way past the boundary
		let beyond = score_case(1, 40.0, 5.0, 0.5, 0.02);
		assert_eq!(beyond.points, 0.0);
	}

	#[test]
	fn thresholds_are_inclusive() {
		// cl error 0.02, cd error exactly 0.05
		let score = score_case(1, 0.51, 0.021, 0.5, 0.02);

		assert!((score.cl_rel_error - 0.02).abs() < EPSILON);
		assert!((score.cd_rel_error - 0.05).abs() < EPSILON);
		assert!((score.combined_error - 0.07).abs() < EPSILON);
		assert!((score.points - 96.5).abs() < EPSILON);
		assert!(score.is_correct);
	}

	#[test]
	fn both_thresholds_must_hold() {
		// cl within threshold, cd way off
		let bad_cd = score_case(1, 0.5, 0.04, 0.5, 0.02);
		assert!(!bad_cd.is_correct);

		// cd within threshold, cl way off
		let bad_cl = score_case(1, 0.6, 0.02, 0.5, 0.02);
		assert!(!bad_cl.is_correct);
	}

	#[test]
	fn zero_truth_is_floored() {
		// no division blow-up at zero lift
		let score = score_case(1, 0.001, 0.0001, 0.0, 0.0);

		assert!(score.cl_rel_error.is_finite());
		assert!(score.cd_rel_error.is_finite());
		assert!((score.cl_rel_error - 1.0).abs() < EPSILON);
		assert!((score.cd_rel_error - 1.0).abs() < EPSILON);
	}

	#[test]
	fn growing_cl_error_never_grows_points() {
		let mut previous_error = 0.0;
		let mut previous_points = f64::INFINITY;

		for step in 1..=100 {
			let offset = f64::from(step) * 0.01;
			let score = score_case(1, 0.5 + offset, 0.02, 0.5, 0.02);

			assert!(score.cl_rel_error > previous_error);
			assert!(score.points <= previous_points);

			previous_error = score.cl_rel_error;
			previous_points = score.points;
		}
	}

	#[test]
	fn aggregates_over_all_cases() {
		let cases = [case(1, 0.5, 0.02), case(2, 1.1, 0.03)];
		let predictions = [prediction(2, 1.1, 0.03), prediction(1, 0.5, 0.02)];

		let scored = score_submission(&predictions, &cases).unwrap();

		assert_eq!(scored.score, 200.0);
		assert_eq!(scored.total_error, 0.0);
		assert_eq!(scored.correct_cases, 2);
		assert_eq!(scored.breakdown.len(), 2);

		// breakdown comes back in case-id order regardless of input order
		assert_eq!(scored.breakdown[0].case_id, 1);
		assert_eq!(scored.breakdown[1].case_id, 2);
	}

	#[test]
	fn rejects_count_mismatch() {
		let cases = [case(1, 0.5, 0.02), case(2, 1.1, 0.03)];
		let predictions = [prediction(1, 0.5, 0.02)];

		let error = score_submission(&predictions, &cases).unwrap_err();

		assert!(error.is_invalid_input());
	}

	#[test]
	fn rejects_unknown_case_id() {
		let cases = [case(1, 0.5, 0.02), case(2, 1.1, 0.03)];
		let predictions = [prediction(1, 0.5, 0.02), prediction(42, 1.1, 0.03)];

		let error = score_submission(&predictions, &cases).unwrap_err();

		assert!(error.is_invalid_input());
	}

	#[test]
	fn rejects_duplicate_case_id() {
		let cases = [case(1, 0.5, 0.02), case(2, 1.1, 0.03)];
		let predictions = [prediction(1, 0.5, 0.02), prediction(1, 0.5, 0.02)];

		let error = score_submission(&predictions, &cases).unwrap_err();

		assert!(error.is_invalid_input());
	}
}
