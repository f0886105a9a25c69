use crate::fnc::util::math::ToFloat;
use crate::fnc::util::math::mean::Mean;
use crate::val::Sorted;

pub trait TrimmedMean {
	/// Mean of the values left after cutting `floor(fraction * n)` values
	/// from each end of the sorted collection
	fn trimmed_mean(&self, fraction: f64) -> f64;
}

impl<T> TrimmedMean for Sorted<&[T]>
where
	T: ToFloat,
{
	fn trimmed_mean(&self, fraction: f64) -> f64 {
		let len = self.0.len();
		if !(0.0..0.5).contains(&fraction) {
			return f64::NAN;
		}
		let cut = (fraction * len as f64).floor() as usize;
		// Nothing would be left to average
		if cut * 2 >= len {
			return f64::NAN;
		}
		self.0[cut..len - cut].mean()
	}
}
