//! Properties of the descriptive statistics functions over many samples

#![allow(clippy::unwrap_used)]

use destat_core::err::Error;
use destat_core::fnc::math;
use destat_core::val::{Number, Sample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 200;

/// Generates a non-empty numeric sample with a mix of integers and floats
fn numeric_sample(rng: &mut StdRng) -> Sample<Number> {
	let len = rng.gen_range(1..40);
	(0..len)
		.map(|_| {
			if rng.gen_bool(0.5) {
				Number::Int(rng.gen_range(-1_000..1_000))
			} else {
				Number::Float(rng.gen_range(-1e3..1e3))
			}
		})
		.collect()
}

/// Generates a non-empty categorical sample drawn from a few labels
fn categorical_sample(rng: &mut StdRng) -> Sample<String> {
	const LABELS: [&str; 5] = ["grande", "pequena", "media", "enorme", "minima"];
	let len = rng.gen_range(1..60);
	(0..len).map(|_| LABELS[rng.gen_range(0..LABELS.len())].to_string()).collect()
}

#[test]
fn known_values() {
	assert_eq!(math::mean(&[1, 2, 3, 4, 5]).unwrap(), 3.0);
	assert_eq!(math::median(&[1, 2, 3, 4, 5]).unwrap(), 3.0);
	assert_eq!(math::median(&[1, 2, 3, 4]).unwrap(), 2.5);
	assert_eq!(math::trimmed_mean(&[1, 2, 3, 4, 5], 0.2).unwrap(), 3.0);
	let sizes = Sample::from(["grande", "pequena", "grande", "pequena", "grande", "grande"]);
	assert_eq!(math::relative_frequency(&sizes, &"grande").unwrap(), 4.0 / 6.0);
	let mode = math::mode(&sizes).unwrap();
	assert_eq!(mode.values, vec!["grande"]);
	assert_eq!(mode.count, 4);
}

#[test]
fn mean_of_nothing_is_an_empty_input_error() {
	let empty = Sample::<f64>::default();
	let err = math::mean(&empty).unwrap_err();
	assert!(matches!(err.downcast_ref::<Error>(), Some(Error::EmptyInput { .. })));
}

#[test]
fn median_is_invariant_under_reversal() {
	let mut rng = StdRng::seed_from_u64(0x5eed);
	for _ in 0..ROUNDS {
		let sample = numeric_sample(&mut rng);
		let reversed = sample.iter().rev().copied().collect::<Sample<Number>>();
		assert_eq!(math::median(&sample).unwrap(), math::median(&reversed).unwrap());
	}
}

#[test]
fn relative_frequencies_sum_to_one() {
	let mut rng = StdRng::seed_from_u64(0xca7);
	for _ in 0..ROUNDS {
		let sample = categorical_sample(&mut rng);
		let mut distinct = sample.to_vec();
		distinct.sort();
		distinct.dedup();
		let total = distinct
			.iter()
			.map(|c| math::relative_frequency(&sample, c).unwrap())
			.sum::<f64>();
		assert!((total - 1.0).abs() < 1e-9, "frequencies summed to {total}");
		let table = math::frequencies(&sample).unwrap();
		assert_eq!(table.len(), distinct.len());
		assert!((table.iter().map(|(_, f)| f).sum::<f64>() - 1.0).abs() < 1e-9);
	}
}

#[test]
fn untrimmed_mean_equals_mean() {
	let mut rng = StdRng::seed_from_u64(0x3ea);
	for _ in 0..ROUNDS {
		let sample = numeric_sample(&mut rng);
		assert_eq!(math::trimmed_mean(&sample, 0.0).unwrap(), math::mean(&sample).unwrap());
	}
}

#[test]
fn trimmed_mean_lies_between_extremes() {
	let mut rng = StdRng::seed_from_u64(0x7e1);
	for _ in 0..ROUNDS {
		let sample = numeric_sample(&mut rng);
		let fraction = rng.gen_range(0.0..0.5);
		let out = math::trimmed_mean(&sample, fraction).unwrap();
		let min = math::percentile(&sample, 0.0).unwrap();
		let max = math::percentile(&sample, 100.0).unwrap();
		assert!(min - 1e-9 <= out && out <= max + 1e-9, "{out} outside [{min}, {max}]");
	}
}

#[test]
fn median_is_the_fiftieth_percentile() {
	let mut rng = StdRng::seed_from_u64(0x50);
	for _ in 0..ROUNDS {
		let sample = numeric_sample(&mut rng);
		assert_eq!(math::percentile(&sample, 50.0).unwrap(), math::median(&sample).unwrap());
	}
}

#[test]
fn mode_count_matches_frequency() {
	let mut rng = StdRng::seed_from_u64(0x30de);
	for _ in 0..ROUNDS {
		let sample = categorical_sample(&mut rng);
		let mode = math::mode(&sample).unwrap();
		// Tied values come back in ascending order
		assert!(mode.values.windows(2).all(|w| w[0] < w[1]));
		for value in &mode.values {
			let freq = math::relative_frequency(&sample, value).unwrap();
			assert_eq!(freq, mode.count as f64 / sample.len() as f64);
		}
		// No other value occurs more often
		for (value, freq) in math::frequencies(&sample).unwrap() {
			if !mode.values.contains(&value) {
				assert!(freq < mode.count as f64 / sample.len() as f64);
			}
		}
	}
}
