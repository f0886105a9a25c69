use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// An ordered, immutable sequence of values to be summarised.
///
/// Once constructed the values can only be read. Every statistics function
/// takes a plain slice, and a `Sample` dereferences to one, so either can be
/// passed in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample<T>(Box<[T]>);

impl<T> Sample<T> {
	/// The number of values in the sample
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.0.iter()
	}
}

impl<T> Deref for Sample<T> {
	type Target = [T];
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T> AsRef<[T]> for Sample<T> {
	fn as_ref(&self) -> &[T] {
		&self.0
	}
}

impl<T> From<Vec<T>> for Sample<T> {
	fn from(v: Vec<T>) -> Self {
		Self(v.into_boxed_slice())
	}
}

impl<T, const N: usize> From<[T; N]> for Sample<T> {
	fn from(v: [T; N]) -> Self {
		Self(Box::new(v))
	}
}

impl<T: Clone> From<&[T]> for Sample<T> {
	fn from(v: &[T]) -> Self {
		Self(v.into())
	}
}

impl<T> FromIterator<T> for Sample<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a, T> IntoIterator for &'a Sample<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::val::Number;

	#[test]
	fn sample_construction() {
		let a = Sample::from([1, 2, 3]);
		let b = Sample::from(vec![1, 2, 3]);
		let c = (1..=3).collect::<Sample<i32>>();
		let d = Sample::from(&[1, 2, 3][..]);
		assert_eq!(a, b);
		assert_eq!(b, c);
		assert_eq!(c, d);
		assert_eq!(a.len(), 3);
		assert!(!a.is_empty());
		assert!(Sample::<i32>::default().is_empty());
	}

	#[test]
	fn sample_preserves_order() {
		let sample = Sample::from(["grande", "pequena", "grande"]);
		assert_eq!(sample.iter().copied().collect::<Vec<_>>(), vec!["grande", "pequena", "grande"]);
		assert_eq!(sample.first(), Some(&"grande"));
		assert_eq!(&sample[1..], &["pequena", "grande"]);
	}

	#[test]
	fn sample_serde_is_a_plain_sequence() {
		let sample: Sample<Number> = serde_json::from_str("[23, 20, 22, 21, 110]").unwrap();
		assert_eq!(sample.len(), 5);
		assert_eq!(sample[4], Number::Int(110));
		assert_eq!(serde_json::to_string(&sample).unwrap(), "[23,20,22,21,110]");
	}
}
