use crate::fnc::util::math::ToFloat;
use crate::fnc::util::math::percentile::Percentile;
use crate::val::Sorted;

pub trait Median {
	/// The middle value, or the average of the two middle values for an even length
	fn median(&self) -> f64;
}

impl<T> Median for Sorted<&[T]>
where
	T: ToFloat,
{
	fn median(&self) -> f64 {
		self.percentile(50.0)
	}
}
