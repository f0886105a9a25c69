use anyhow::Result;

use crate::fnc::util::math::ToFloat;
use crate::fnc::util::math::frequency::{Frequencies, Frequency};
use crate::fnc::util::math::mean::Mean;
use crate::fnc::util::math::median::Median;
use crate::fnc::util::math::mode::Mode;
use crate::fnc::util::math::percentile::Percentile;
use crate::fnc::util::math::trimmedmean::TrimmedMean;
use crate::val::{self, Sort};

const TARGET: &str = "destat::core::fnc::math";

/// Collects a numeric sample into floats, ready to be sorted
fn floats<T: ToFloat>(sample: &[T]) -> Vec<f64> {
	sample.iter().map(ToFloat::to_float).collect()
}

/// The arithmetic average of a non-empty numeric sample.
pub fn mean<T: ToFloat>(sample: &[T]) -> Result<f64> {
	trace!(target: TARGET, len = sample.len(), "Computing math::mean");
	ensure_not_empty!("math::mean", sample);
	Ok(sample.mean())
}

/// The middle value of a non-empty numeric sample, averaging the two middle
/// values when the sample has an even length.
pub fn median<T: ToFloat>(sample: &[T]) -> Result<f64> {
	trace!(target: TARGET, len = sample.len(), "Computing math::median");
	ensure_not_empty!("math::median", sample);
	Ok(floats(sample).sorted().median())
}

/// The mean of a numeric sample after discarding `floor(fraction * n)` values
/// from each end of the sorted sample. The fraction must be within [0, 0.5).
pub fn trimmed_mean<T: ToFloat>(sample: &[T], fraction: f64) -> Result<f64> {
	trace!(target: TARGET, len = sample.len(), fraction, "Computing math::trimmed_mean");
	ensure_within!(
		"math::trimmed_mean",
		fraction,
		0.0..0.5,
		"The trim fraction must be within [0, 0.5), got {}."
	);
	ensure_not_empty!("math::trimmed_mean", sample);
	let cut = (fraction * sample.len() as f64).floor() as usize;
	// Nothing to trim
	if cut == 0 {
		return Ok(sample.mean());
	}
	Ok(floats(sample).sorted().trimmed_mean(fraction))
}

/// The most frequent value(s) of a non-empty sample with their shared count.
/// Values tied on the highest count are all returned, smallest first.
pub fn mode<T: Ord + Clone>(sample: &[T]) -> Result<val::Mode<T>> {
	trace!(target: TARGET, len = sample.len(), "Computing math::mode");
	ensure_not_empty!("math::mode", sample);
	Ok(sample.mode())
}

/// The share of a non-empty sample equal to `category`, within [0, 1].
pub fn relative_frequency<T: PartialEq>(sample: &[T], category: &T) -> Result<f64> {
	trace!(target: TARGET, len = sample.len(), "Computing math::relative_frequency");
	ensure_not_empty!("math::relative_frequency", sample);
	Ok(sample.frequency(category))
}

/// The relative frequency of every distinct value of a non-empty sample,
/// in ascending order of value.
pub fn frequencies<T: Ord + Clone>(sample: &[T]) -> Result<Vec<(T, f64)>> {
	trace!(target: TARGET, len = sample.len(), "Computing math::frequencies");
	ensure_not_empty!("math::frequencies", sample);
	Ok(sample.frequencies())
}

/// The linearly interpolated `perc` percentile of a non-empty numeric
/// sample. The percentile must be within [0, 100].
pub fn percentile<T: ToFloat>(sample: &[T], perc: f64) -> Result<f64> {
	trace!(target: TARGET, len = sample.len(), perc, "Computing math::percentile");
	ensure_within!(
		"math::percentile",
		perc,
		0.0..=100.0,
		"The percentile must be within [0, 100], got {}."
	);
	ensure_not_empty!("math::percentile", sample);
	Ok(floats(sample).sorted().percentile(perc))
}
