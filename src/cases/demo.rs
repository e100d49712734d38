//! Demo case generation.
//!
//! Before the first publication of the day there is nothing to predict, and clients want
//! something to render while they wait. This module generates structurally valid sample cases
//! on demand; no ground truth exists for them and they are never persisted.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cases::PublicCase;

/// Airfoil names to sample from.
static AIRFOILS: &[&str] = &[
	"NACA 0012",
	"NACA 2412",
	"NACA 4412",
	"NACA 6409",
	"NACA 23012",
];

/// How many points to sample along the airfoil surface.
const COORDINATE_COUNT: usize = 40;

/// Generates `count` plausible demo cases.
///
/// Flow conditions are drawn uniformly from realistic subsonic ranges, and the coordinates trace
/// a symmetric-thickness outline from trailing edge over the upper surface and back along the
/// lower surface.
pub fn demo_cases(count: usize) -> Vec<PublicCase> {
	let mut rng = rand::thread_rng();

	(0..count)
		.map(|idx| {
			let airfoil = AIRFOILS
				.choose(&mut rng)
				.copied()
				.unwrap_or("NACA 0012")
				.to_owned();

			let thickness = rng.gen_range(0.06..0.15);

			PublicCase {
				case_id: idx as i64 + 1,
				airfoil,
				mach: rng.gen_range(0.05..0.4),
				reynolds: rng.gen_range(2e5..9e6),
				aoa: rng.gen_range(-4.0..12.0),
				coordinates: outline(thickness),
			}
		})
		.collect()
}

/// Traces a closed outline with the given maximum `thickness`.
fn outline(thickness: f64) -> Vec<[f64; 2]> {
	let half = COORDINATE_COUNT / 2;
	let mut coordinates = Vec::with_capacity(COORDINATE_COUNT);

	// upper surface, trailing edge to leading edge
	for idx in 0..half {
		let x = 1.0 - (idx as f64) / (half as f64 - 1.0);
		coordinates.push([x, half_thickness(x, thickness)]);
	}

	// lower surface, leading edge back to trailing edge
	for idx in 0..half {
		let x = (idx as f64) / (half as f64 - 1.0);
		coordinates.push([x, -half_thickness(x, thickness)]);
	}

	coordinates
}

/// Half-thickness of a symmetric four-digit profile at chordwise position `x`.
fn half_thickness(x: f64, thickness: f64) -> f64 {
	5.0 * thickness
		* (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
			- 0.1036 * x.powi(4))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn generates_requested_count() {
		let cases = demo_cases(5);

		assert_eq!(cases.len(), 5);

		for (idx, case) in cases.iter().enumerate() {
			assert_eq!(case.case_id, idx as i64 + 1);
			assert!(!case.airfoil.is_empty());
			assert!(case.mach.is_finite());
			assert!(case.reynolds > 0.0);
			assert_eq!(case.coordinates.len(), COORDINATE_COUNT);
		}
	}

	#[test]
	fn zero_count_is_empty() {
		assert!(demo_cases(0).is_empty());
	}
}
