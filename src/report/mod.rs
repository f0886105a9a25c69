use std::fmt::{self, Display, Formatter};

use destat_core::fnc::math;
use destat_core::val::{Sample, Summary};

use crate::err::Error;

pub const TARGET: &str = "destat::report";

/// A category label from one of the bundled samples
pub type Label = &'static str;

/// A titled set of statistics computed over one sample
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
	pub title: &'static str,
	pub entries: Vec<(&'static str, Summary<Label>)>,
}

impl Display for Report {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		writeln!(f, "{}", self.title)?;
		for (name, summary) in &self.entries {
			writeln!(f, "  {name}: {summary}")?;
		}
		Ok(())
	}
}

/// Ages of a small group, one of which is an outlier
pub fn ages() -> Sample<i64> {
	Sample::from([23, 20, 22, 21, 110])
}

/// A small evenly spaced sample
pub fn sequence() -> Sample<i64> {
	Sample::from([1, 2, 3, 4, 5])
}

/// The size of the stain observed on each of six specimens
pub fn stains() -> Sample<Label> {
	Sample::from(["grande", "pequena", "grande", "pequena", "grande", "grande"])
}

/// Mean and median of the ages, showing the outlier's pull on the mean
pub fn central_tendency() -> Result<Report, Error> {
	let ages = ages();
	Ok(Report {
		title: "Ages",
		entries: vec![
			("mean", Summary::Scalar(math::mean(&ages)?)),
			("median", Summary::Scalar(math::median(&ages)?)),
		],
	})
}

/// Mean of the sequence after trimming `fraction` of the values from each end
pub fn trimmed(fraction: f64) -> Result<Report, Error> {
	let sequence = sequence();
	Ok(Report {
		title: "Sequence",
		entries: vec![("trimmed mean", Summary::Scalar(math::trimmed_mean(&sequence, fraction)?))],
	})
}

/// How often the stains are large
pub fn frequency() -> Result<Report, Error> {
	let stains = stains();
	Ok(Report {
		title: "Stains",
		entries: vec![(
			"frequency of grande",
			Summary::Frequency(math::relative_frequency(&stains, &"grande")?),
		)],
	})
}

/// The most common stain size
pub fn mode() -> Result<Report, Error> {
	let stains = stains();
	Ok(Report {
		title: "Stains",
		entries: vec![("mode", Summary::from(math::mode(&stains)?))],
	})
}

/// Every report, in order
pub fn all(fraction: f64) -> Result<Vec<Report>, Error> {
	trace!(target: TARGET, fraction, "Computing reports");
	Ok(vec![central_tendency()?, trimmed(fraction)?, frequency()?, mode()?])
}
