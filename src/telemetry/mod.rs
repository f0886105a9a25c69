use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;

use crate::err::Error;

/// Parse a tracing filter directive such as `info` or `destat=trace`
pub fn filter(directive: &str) -> Result<EnvFilter, Error> {
	EnvFilter::builder().parse(directive).map_err(|source| Error::LogFilter {
		filter: directive.to_owned(),
		source,
	})
}

/// Whether log lines written to this stream should carry colour codes
fn ansi(stream: &impl IsTerminal) -> bool {
	stream.is_terminal()
}

/// Install the global subscriber, logging compact lines to stderr
pub fn init(directive: &str) -> Result<(), Error> {
	let filter = filter(directive)?;
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::fmt::layer()
				.compact()
				.with_ansi(ansi(&std::io::stderr()))
				.with_target(true)
				.with_span_events(FmtSpan::NONE)
				.with_writer(std::io::stderr)
				.with_filter(filter),
		)
		.try_init()
		.map_err(|e| Error::Logger(e.to_string()))?;
	debug!(target: "destat::telemetry", directive, "Logger initialised");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_colours_when_not_a_terminal() {
		let file = std::fs::File::open(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")).unwrap();
		assert!(!ansi(&file));
	}

	#[test]
	fn filter_accepts_levels_and_targets() {
		assert!(filter("info").is_ok());
		assert!(filter("destat=trace,warn").is_ok());
	}

	#[test]
	fn filter_rejects_garbage() {
		let err = filter("destat=notalevel").unwrap_err();
		assert!(matches!(err, Error::LogFilter { .. }));
		assert!(err.to_string().starts_with("The log filter 'destat=notalevel' is invalid"));
	}
}
