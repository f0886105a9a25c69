use std::collections::BTreeMap;

pub trait Tally<T> {
	/// Count the occurrences of each distinct value, in ascending order
	/// O(n*log(w)) time complex s.t. w = distinct count
	fn tally(&self) -> BTreeMap<&T, usize>;
}

impl<T> Tally<T> for [T]
where
	T: Ord,
{
	fn tally(&self) -> BTreeMap<&T, usize> {
		self.iter().fold(BTreeMap::new(), |mut counts, value| {
			*counts.entry(value).or_insert(0) += 1;
			counts
		})
	}
}
