use thiserror::Error;

/// An error raised by one of the descriptive statistics functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// The function needs at least one value, but the sample was empty
	#[error("Incorrect arguments for function {name}(). The sample must contain at least one value")]
	EmptyInput {
		name: String,
	},

	/// A parameter of the function was outside of its accepted range
	#[error("Incorrect arguments for function {name}(). {message}")]
	InvalidParameter {
		name: String,
		message: String,
	},
}
