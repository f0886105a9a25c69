use crate::fnc::util::math::ToFloat;
use crate::val::Sorted;

pub trait Percentile {
	/// Gets the N percentile, interpolating between neighbouring records if non-exact
	fn percentile(&self, perc: f64) -> f64;
}

impl<T> Percentile for Sorted<&[T]>
where
	T: ToFloat,
{
	fn percentile(&self, perc: f64) -> f64 {
		// If an empty set, then return NaN
		if self.0.is_empty() {
			return f64::NAN;
		}
		// If an invalid percentile, then return NaN
		if !(0.0..=100.0).contains(&perc) {
			return f64::NAN;
		}
		// Get the index of the specified percentile
		let fract_index = (self.0.len() - 1) as f64 * perc / 100.0;
		let floor = self.0[fract_index.floor() as usize].to_float();
		let fract = fract_index.fract();

		if fract.abs() <= f64::EPSILON {
			floor
		} else {
			let ceil = self.0[fract_index.ceil() as usize].to_float();
			let spread = ceil - floor;
			if spread.is_finite() {
				floor + spread * fract
			} else {
				// Neighbours of opposite sign and huge magnitude
				floor * (1.0 - fract) + ceil * fract
			}
		}
	}
}
