use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The most frequent value(s) of a sample, and how often each one occurs.
///
/// When several values share the highest frequency all of them are kept,
/// in ascending order, alongside the shared count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode<T> {
	pub values: Vec<T>,
	pub count: usize,
}

impl<T: Display> Display for Mode<T> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		for (i, v) in self.values.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(v, f)?;
		}
		write!(f, " (occurs {} times)", self.count)
	}
}

/// The result of a single descriptive statistic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Summary<T> {
	/// A mean, median, trimmed mean or percentile
	Scalar(f64),
	/// The most frequent value(s) of the sample
	Mode(Mode<T>),
	/// A relative frequency within [0, 1]
	Frequency(f64),
}

impl<T> From<Mode<T>> for Summary<T> {
	fn from(v: Mode<T>) -> Self {
		Self::Mode(v)
	}
}

impl<T: Display> Display for Summary<T> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Summary::Scalar(v) => Display::fmt(v, f),
			Summary::Mode(v) => Display::fmt(v, f),
			Summary::Frequency(v) => Display::fmt(v, f),
		}
	}
}
