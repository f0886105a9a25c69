use thiserror::Error;
use tracing_subscriber::filter::ParseError;

#[derive(Error, Debug)]
pub enum Error {
	#[error("The log filter '{filter}' is invalid: {source}")]
	LogFilter {
		filter: String,
		source: ParseError,
	},

	#[error("Unable to install the logger: {0}")]
	Logger(String),

	#[error(transparent)]
	Stats(#[from] anyhow::Error),
}
