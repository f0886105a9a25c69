//! Prints the descriptive statistics reports for the bundled samples.

#[macro_use]
extern crate tracing;

mod cnf;
mod err;
mod report;
mod telemetry;

use std::process::ExitCode;

fn main() -> ExitCode {
	// Initiate the logger
	if let Err(e) = telemetry::init(&cnf::LOG) {
		eprintln!("{e}");
		return ExitCode::FAILURE;
	}
	debug!(target: report::TARGET, "Starting {} {}", cnf::PKG_NAME, env!("CARGO_PKG_VERSION"));
	// Compute and print every report
	match report::all(*cnf::TRIM_FRACTION) {
		Ok(reports) => {
			for report in reports {
				println!("{report}");
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			error!(target: report::TARGET, "{e}");
			ExitCode::FAILURE
		}
	}
}
