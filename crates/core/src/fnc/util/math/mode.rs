use crate::fnc::util::math::tally::Tally;
use crate::val;

pub trait Mode<T> {
	/// Find the most frequent values in the collection. Values tied on the
	/// highest count are all returned, smallest first.
	fn mode(&self) -> val::Mode<T>;
}

impl<T> Mode<T> for [T]
where
	T: Ord + Clone,
{
	fn mode(&self) -> val::Mode<T> {
		let counts = self.tally();
		let count = counts.values().copied().max().unwrap_or(0);
		let values = counts
			.into_iter()
			.filter(|(_, c)| *c == count)
			.map(|(v, _)| v.clone())
			.collect();
		val::Mode {
			values,
			count,
		}
	}
}
