use crate::fnc::util::math::tally::Tally;

pub trait Frequency<T> {
	/// The share of the collection equal to `category`, within [0, 1]
	fn frequency(&self, category: &T) -> f64;
}

impl<T> Frequency<T> for [T]
where
	T: PartialEq,
{
	fn frequency(&self, category: &T) -> f64 {
		let hits = self.iter().filter(|v| *v == category).count();
		// Will be NaN if the collection is empty
		hits as f64 / self.len() as f64
	}
}

pub trait Frequencies<T> {
	/// The relative frequency of every distinct value, in ascending order
	fn frequencies(&self) -> Vec<(T, f64)>;
}

impl<T> Frequencies<T> for [T]
where
	T: Ord + Clone,
{
	fn frequencies(&self) -> Vec<(T, f64)> {
		let len = self.len() as f64;
		self.tally().into_iter().map(|(v, c)| (v.clone(), c as f64 / len)).collect()
	}
}
